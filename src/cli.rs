use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "sapp",
    version,
    about = "This tool lists the available Sapp API's.",
    long_about = "Lists the deployed Sapp environments of a GitLab project and writes the chosen URL into ./.env"
)]
pub struct Cli {
    #[arg(short, long, action = ArgAction::Count, global = true, help = "Increase log verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "You can either 'get' or 'set' environments")]
    Api {
        #[command(subcommand)]
        action: Option<ApiAction>,
    },
    #[command(about = "Manage the token, project and variable names in config.json")]
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ApiAction {
    #[command(about = "Prints the URL of every available environment")]
    Get,
    #[command(about = "Pick an environment and write its URL into ./.env")]
    Set,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    #[command(about = "Sets the GitLab token. Prompts when no value is given")]
    Token {
        #[arg(help = "GitLab private token")]
        value: Option<String>,
    },
    #[command(about = "Sets the GitLab project ID. Prompts when no value is given")]
    Project {
        #[arg(help = "Project ID. Example: 21001347")]
        id: Option<String>,
    },
    #[command(about = "Sets the .env variable names to update. Prompts when none are given")]
    Vars {
        #[arg(help = "Variable names. Example: APP_API_URL SAPP_URL")]
        names: Vec<String>,
    },
    #[command(about = "Restores the default config")]
    Reset,
    #[command(about = "Prints the current config with the token masked")]
    Show,
}
