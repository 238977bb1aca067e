use std::env;

use dotenvy::dotenv;
use log::{info, warn};

use crate::errors::{CustomResult, Error};

pub const DEFAULT_HOUSES: &str = "Extern";
pub const DEFAULT_GRADES: &str = "Keine Klasse";

/// # application configuration
/// everything the server reads from the environment.
/// it is managed by rocket so routes can take it as `&State<AppConfig>`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// caching is disabled when no redis url is configured
    pub redis_url: Option<String>,
    pub houses: Vec<String>,
    pub grades: Vec<String>,
    pub helper_password: Option<String>,
    pub superadmin_password: Option<String>,
}

impl AppConfig {
    /// # load the config from the environment
    /// reads the `.env` file first when one exists.
    ///
    /// ## Returns
    /// * `AppConfig` - the loaded config
    /// * `Error::MissingConfigError` - when `DATABASE_URL` is not set
    pub fn from_env() -> CustomResult<AppConfig> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").map_err(|_| Error::MissingConfigError {
            key: "DATABASE_URL".to_string(),
        })?;

        let redis_url = optional_var("REDIS_URL");
        if redis_url.is_none() {
            info!(target:"config", "REDIS_URL not set, leaderboard caching disabled");
        }

        let helper_password = optional_var("HELPER_PASSWORD");
        let superadmin_password = optional_var("SUPERADMIN_PASSWORD");
        if helper_password.is_none() && superadmin_password.is_none() {
            warn!(target:"config", "no role passwords configured, nobody will be able to log in");
        }

        Ok(AppConfig {
            database_url,
            redis_url,
            houses: parse_list(env::var("HOUSES").ok().as_deref(), DEFAULT_HOUSES),
            grades: parse_list(env::var("GRADES").ok().as_deref(), DEFAULT_GRADES),
            helper_password,
            superadmin_password,
        })
    }
}

/// # parse a comma separated list
/// entries are trimmed and empty entries are dropped.
/// when nothing is left the default is used.
///
/// ## Arguments
/// * `value` - the raw value of the environment variable
/// * `default` - the value used when the list is missing or empty
pub fn parse_list(value: Option<&str>, default: &str) -> Vec<String> {
    let entries: Vec<String> = value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect();

    if entries.is_empty() {
        vec![default.to_string()]
    } else {
        entries
    }
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_list_falls_back_to_default() {
        assert_eq!(parse_list(None, DEFAULT_HOUSES), vec!["Extern"]);
        assert_eq!(parse_list(Some(""), DEFAULT_GRADES), vec!["Keine Klasse"]);
        assert_eq!(parse_list(Some(" , ,"), DEFAULT_GRADES), vec!["Keine Klasse"]);
    }

    #[test]
    fn list_entries_are_trimmed_in_order() {
        assert_eq!(
            parse_list(Some("Extern, Nordhaus ,Südhaus,"), DEFAULT_HOUSES),
            vec!["Extern", "Nordhaus", "Südhaus"]
        );
    }
}
