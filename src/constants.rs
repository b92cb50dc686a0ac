pub const GITLAB_API_URL: &str = "https://gitlab.com/api/v4";
pub const ENVIRONMENTS_PATH: &str = "/projects/{id}/environments";
pub const TOKEN_ENV: &str = "GITLAB_TOKEN";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const ENV_FILE_PATH: &str = "./.env";
pub const DEFAULT_PROJECT_ID: &str = "21001347";
pub const DEFAULT_VARS: [&str; 2] = ["APP_API_URL", "SAPP_URL"];
pub const APP_NAME: &str = "sapp";
