use std::path::Path;

use tracing::info;

use crate::config;
use crate::constants::ENV_FILE_PATH;
use crate::env_file;
use crate::errors::{api::ApiError, env_file::EnvFileError};
use crate::green;
use crate::network::get_environment_urls;
use crate::ui::{Selection, Selector};

#[derive(Debug, PartialEq, Eq)]
pub enum SetOutcome {
    Updated { url: String, replaced: usize },
    Cancelled,
}

pub fn get() -> Result<(), ApiError> {
    let config = config::load()?;
    let urls = get_environment_urls(&config.project_id, &config.token)?;

    for url in urls {
        println!("{}", url);
    }

    Ok(())
}

pub fn set(ui: &dyn Selector) -> Result<(), ApiError> {
    let config = config::load()?;
    let urls = get_environment_urls(&config.project_id, &config.token)?;

    match select_and_write(ui, &urls, Path::new(ENV_FILE_PATH), &config.vars)? {
        SetOutcome::Updated { url, replaced } => {
            info!("{} line(s) updated in {}", replaced, ENV_FILE_PATH);
            println!("{} API URL set to: {}", green!("[SUCCESS]"), url);
        }
        SetOutcome::Cancelled => println!("Cancelled"),
    }

    Ok(())
}

/// The env file is only touched once the operator has picked a URL.
pub fn select_and_write(
    ui: &dyn Selector,
    urls: &[String],
    env_path: &Path,
    vars: &[String],
) -> Result<SetOutcome, EnvFileError> {
    let url = match ui.select("Select an API", urls) {
        Selection::Chosen(url) => url,
        Selection::Cancelled => return Ok(SetOutcome::Cancelled),
    };

    let replaced = env_file::rewrite(env_path, vars, &url)?;

    Ok(SetOutcome::Updated { url, replaced })
}
