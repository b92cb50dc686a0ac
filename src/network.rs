use reqwest::StatusCode;
use reqwest::blocking::{Client, ClientBuilder};
use serde::Deserialize;
use tracing::debug;

use crate::constants::{ENVIRONMENTS_PATH, GITLAB_API_URL};
use crate::errors::network::NetworkError;

/// Only `external_url` is consumed; every other field of the API record is ignored.
#[derive(Deserialize, Debug)]
pub struct Environment {
    #[serde(rename = "external_url", default)]
    pub url: Option<String>,
}

pub fn build_client() -> Result<Client, reqwest::Error> {
    ClientBuilder::new().use_rustls_tls().build()
}

pub fn get_environment_urls(project_id: &str, token: &str) -> Result<Vec<String>, NetworkError> {
    get_environment_urls_from(GITLAB_API_URL, project_id, token)
}

pub fn get_environment_urls_from(
    base_url: &str,
    project_id: &str,
    token: &str,
) -> Result<Vec<String>, NetworkError> {
    let client = build_client()?;
    let url = format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        ENVIRONMENTS_PATH.replace("{id}", project_id)
    );

    debug!("GET {}", url);

    let res = client
        .get(&url)
        .query(&[("private_token", token), ("states", "available")])
        .send()?;

    match res.status() {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            return Err(NetworkError::Unauthorized);
        }
        status => debug!("Environments API answered {}", status),
    }

    let body = res.text().map_err(|source| NetworkError::Read {
        message: "Can't read response".to_string(),
        source: source.without_url(),
    })?;

    let urls = parse_environment_urls(&body)?;
    if urls.is_empty() {
        return Err(NetworkError::NoEnvironments {
            project_id: project_id.to_string(),
        });
    }

    debug!("Found {} environments", urls.len());
    Ok(urls)
}

/// Keeps non-empty URLs in response order, duplicates included.
pub fn parse_environment_urls(body: &str) -> Result<Vec<String>, serde_json::Error> {
    let environments: Vec<Environment> = serde_json::from_str(body)?;

    Ok(environments
        .into_iter()
        .filter_map(|env| env.url)
        .filter(|url| !url.is_empty())
        .collect())
}
