pub mod api;
pub mod config;
pub mod config_command;
pub mod env_file;
pub mod network;
