use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// Identifiable defines common traits that can be shared by library records
pub trait Identifiable {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

pub const BRANCH_ID_ENV: &str = "LIBRARY_BRANCH_ID";
pub const LOG_LEVEL_ENV: &str = "LIBRARY_LOG_LEVEL";
pub const JSON_LOGS_ENV: &str = "LIBRARY_JSON_LOGS";

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub log_level: String,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            log_level: "info".to_string(),
            json_logs: true,
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        let branch_id = std::env::var(BRANCH_ID_ENV).unwrap_or_else(|_| "dev".to_string());
        let mut config = Configuration::new(branch_id.as_str());
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            config.log_level = level;
        }
        if let Ok(json) = std::env::var(JSON_LOGS_ENV) {
            config.json_logs = json.trim().parse::<bool>().map_err(|err| LibraryError::validation(
                format!("{} must be true or false, got {:?} {:?}", JSON_LOGS_ENV, json, err).as_str(), None))?;
        }
        Ok(config)
    }

    pub fn max_level(&self) -> LibraryResult<tracing::Level> {
        tracing::Level::from_str(self.log_level.as_str()).map_err(|err| LibraryError::validation(
            format!("invalid log level {:?} {:?}", self.log_level, err).as_str(), None))
    }
}
