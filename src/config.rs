//! Process configuration.
//!
//! Everything the service needs is fixed at startup: the repository set, the
//! contents-API base URL, the listen port, and an optional token from the
//! environment. The loaded `Config` is passed into application state
//! explicitly; nothing reads the environment after boot.

use std::env;

/// Repositories served by the relay, in the order aggregate endpoints visit them.
pub const REPOSITORIES: [&str; 3] = [
    "linuxfandudeguy/theparrotcollection",
    "linuxfandudeguy/flagparrots",
    "linuxfandudeguy/partyguests",
];

pub const API_BASE_URL: &str = "https://api.github.com/repos";

pub const PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub repositories: Vec<String>,
    pub api_base: String,
    pub token: Option<String>,
    pub port: u16,
}

impl Config {
    /// Reads the token from `GITHUB_TOKEN`. An unset token is not an error:
    /// requests go out unauthenticated and the remote API decides.
    pub fn from_env() -> Self {
        Self {
            repositories: REPOSITORIES.iter().map(|r| r.to_string()).collect(),
            api_base: API_BASE_URL.to_string(),
            token: env::var("GITHUB_TOKEN").ok(),
            port: PORT,
        }
    }
}
