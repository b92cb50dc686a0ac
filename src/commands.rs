use crate::cli::{ApiAction, Cli, Commands};
use crate::red;
use crate::ui::CliUi;

pub mod api;
pub mod config;

pub fn dispatch(cli: Cli) {
    match cli.command {
        Some(Commands::Api { action: None }) => {
            println!("Please enter an argument: 'get' or 'set'");
        }
        Some(Commands::Api {
            action: Some(ApiAction::Get),
        }) => {
            if let Err(e) = api::get() {
                eprintln!("{} {}", red!("Error in api get:"), e);
                std::process::exit(1);
            }
        }
        Some(Commands::Api {
            action: Some(ApiAction::Set),
        }) => {
            if let Err(e) = api::set(&CliUi::new()) {
                eprintln!("{} {}", red!("Error in api set:"), e);
                std::process::exit(1);
            }
        }
        Some(Commands::Config { action: None }) => {
            println!("Please enter an argument: 'token', 'project', 'vars', 'reset' or 'show'");
        }
        Some(Commands::Config {
            action: Some(action),
        }) => {
            if let Err(e) = config::run(action, &CliUi::new()) {
                eprintln!("{} {}", red!("Error in config:"), e);
                std::process::exit(1);
            }
        }
        None => {
            println!("Command not found. Use --help.");
        }
    }
}
