use std::path::PathBuf;

use crate::quiz::settings::MAX_SESSION_QUESTIONS;
use crate::quiz::Settings;

pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";
pub const DEFAULT_SHEET_RANGE: &str = "A:Z";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

#[derive(Clone, Debug)]
pub struct SheetConfig {
    pub api_url: String,
    pub sheet_id: String,
    pub range: String,
    /// Opaque bearer credential.
    pub access_token: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub csv_path: Option<PathBuf>,
    pub sheet: Option<SheetConfig>,
    pub max_questions: usize,
    pub offline_cache: bool,
    pub log_filter: String,
}

impl Config {
    /// Loads configuration from the environment, reading a `.env` file first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Config::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let sheet = var("QUIZ_SHEET_ID").map(|sheet_id| SheetConfig {
            api_url: var("QUIZ_SHEETS_API_URL").unwrap_or_else(|| DEFAULT_SHEETS_API_URL.to_owned()),
            sheet_id,
            range: var("QUIZ_SHEET_RANGE").unwrap_or_else(|| DEFAULT_SHEET_RANGE.to_owned()),
            access_token: var("QUIZ_ACCESS_TOKEN"),
        });

        let max_questions = match var("QUIZ_MAX_QUESTIONS") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 && n <= MAX_SESSION_QUESTIONS => n,
                _ => {
                    return Err(ConfigError::InvalidValue(
                        "QUIZ_MAX_QUESTIONS".to_owned(),
                        format!(
                            "{:?} is not a number between 1 and {}",
                            value, MAX_SESSION_QUESTIONS
                        ),
                    ))
                }
            },
            None => Settings::default().max_questions,
        };

        let offline_cache = match var("QUIZ_OFFLINE_CACHE") {
            Some(value) => match value.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidValue(
                        "QUIZ_OFFLINE_CACHE".to_owned(),
                        format!("{:?} is not true or false", value),
                    ))
                }
            },
            None => true,
        };

        Ok(Config {
            csv_path: var("QUIZ_CSV_PATH").map(PathBuf::from),
            sheet,
            max_questions,
            offline_cache,
            log_filter: var("RUST_LOG").unwrap_or_else(|| "info".to_owned()),
        })
    }

    pub fn settings(&self) -> Settings {
        Settings {
            max_questions: self.max_questions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert!(config.csv_path.is_none());
        assert!(config.sheet.is_none());
        assert_eq!(config.max_questions, 20);
        assert!(config.offline_cache);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn reads_sheet_settings() {
        let config = config(&[
            ("QUIZ_SHEET_ID", "abc123"),
            ("QUIZ_ACCESS_TOKEN", "token"),
            ("QUIZ_SHEET_RANGE", "Questions!A:J"),
        ])
        .unwrap();
        let sheet = config.sheet.unwrap();
        assert_eq!(sheet.sheet_id, "abc123");
        assert_eq!(sheet.range, "Questions!A:J");
        assert_eq!(sheet.api_url, DEFAULT_SHEETS_API_URL);
        assert_eq!(sheet.access_token.as_deref(), Some("token"));
    }

    #[test]
    fn blank_values_are_unset() {
        let config = config(&[("QUIZ_SHEET_ID", "id"), ("QUIZ_ACCESS_TOKEN", "  ")]).unwrap();
        assert!(config.sheet.unwrap().access_token.is_none());
    }

    #[test]
    fn rejects_invalid_numbers() {
        assert!(config(&[("QUIZ_MAX_QUESTIONS", "0")]).is_err());
        assert!(config(&[("QUIZ_MAX_QUESTIONS", "many")]).is_err());
        assert!(config(&[("QUIZ_MAX_QUESTIONS", "21")]).is_err());
        assert_eq!(
            config(&[("QUIZ_MAX_QUESTIONS", "20")]).unwrap().max_questions,
            20
        );
        assert_eq!(
            config(&[("QUIZ_MAX_QUESTIONS", "5")]).unwrap().settings().max_questions,
            5
        );
    }

    #[test]
    fn parses_offline_cache_flag() {
        assert!(!config(&[("QUIZ_OFFLINE_CACHE", "false")]).unwrap().offline_cache);
        assert!(config(&[("QUIZ_OFFLINE_CACHE", "maybe")]).is_err());
    }
}
