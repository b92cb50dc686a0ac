use std::path::Path;

use crate::cli::ConfigAction;
use crate::config::{self, Config};
use crate::constants::TOKEN_ENV;
use crate::errors::config_command::ConfigCommandError;
use crate::green;
use crate::ui::Selector;
use crate::utils::{get_config_path, get_env_token, mask_token};

pub fn run(action: ConfigAction, ui: &dyn Selector) -> Result<(), ConfigCommandError> {
    let path = get_config_path()?;

    let saved = match action {
        ConfigAction::Token { value } => set_token(&path, value, ui)?,
        ConfigAction::Project { id } => set_project(&path, id, ui)?,
        ConfigAction::Vars { names } => set_vars(&path, names, ui)?,
        ConfigAction::Reset => Some(reset(&path)?),
        ConfigAction::Show => return show(&path),
    };

    match saved {
        Some(_) => println!("Config saved at: {} {}", path.display(), green!("✓")),
        None => println!("Cancelled"),
    }

    Ok(())
}

/// Each setter returns `None` when the prompt was cancelled and nothing was written.
pub fn set_token(
    path: &Path,
    value: Option<String>,
    ui: &dyn Selector,
) -> Result<Option<Config>, ConfigCommandError> {
    let Some(token) = value.or_else(|| ui.prompt_input("Please enter your Gitlab token")) else {
        return Ok(None);
    };

    let mut config = config::load_or_default(path)?;
    config.token = token.trim().to_string();
    config::save(path, &config)?;

    Ok(Some(config))
}

pub fn set_project(
    path: &Path,
    id: Option<String>,
    ui: &dyn Selector,
) -> Result<Option<Config>, ConfigCommandError> {
    let Some(id) = id.or_else(|| ui.prompt_input("Please enter the Gitlab project ID")) else {
        return Ok(None);
    };

    let mut config = config::load_or_default(path)?;
    config.project_id = id.trim().to_string();
    config::save(path, &config)?;

    Ok(Some(config))
}

pub fn set_vars(
    path: &Path,
    names: Vec<String>,
    ui: &dyn Selector,
) -> Result<Option<Config>, ConfigCommandError> {
    let names = if names.is_empty() {
        match ui.prompt_input("Variable names to update (comma separated)") {
            Some(raw) => vec![raw],
            None => return Ok(None),
        }
    } else {
        names
    };

    let vars = split_var_names(&names);
    if vars.is_empty() {
        return Err(ConfigCommandError::EmptyVars);
    }

    let mut config = config::load_or_default(path)?;
    config.vars = vars;
    config::save(path, &config)?;

    Ok(Some(config))
}

pub fn reset(path: &Path) -> Result<Config, ConfigCommandError> {
    let config = Config::default();
    config::save(path, &config)?;
    Ok(config)
}

fn show(path: &Path) -> Result<(), ConfigCommandError> {
    let config = config::load_or_default(path)?;

    println!("Config file: {}", path.display());
    println!("Project ID:  {}", config.project_id);
    println!("Variables:   {}", config.vars.join(", "));

    if config.token.is_empty() {
        println!("Token:       (not set)");
    } else {
        println!("Token:       {}", mask_token(&config.token));
    }

    if get_env_token().is_some() {
        println!("{} is set and overrides the file token.", TOKEN_ENV);
    }

    Ok(())
}

/// Accepts both `A B` and `A,B` forms; blank entries are dropped.
fn split_var_names(names: &[String]) -> Vec<String> {
    names
        .iter()
        .flat_map(|name| name.split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}
