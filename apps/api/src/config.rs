use anyhow::{Context, Result};

use crate::assistant::service::API_KEY_VAR;

const DEFAULT_CV_DATA_PATH: &str = "data/cv.json";

/// Application configuration loaded from environment variables.
///
/// The LLM credential is optional here: a missing or blank key is reported per request
/// as a configuration error so the rest of the API keeps serving.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub cv_data_path: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: std::env::var(API_KEY_VAR).ok(),
            cv_data_path: std::env::var("CV_DATA_PATH")
                .unwrap_or_else(|_| DEFAULT_CV_DATA_PATH.to_string()),
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    raw.unwrap_or("8080")
        .parse::<u16>()
        .context("PORT must be a valid port number")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_to_8080() {
        assert_eq!(parse_port(None).unwrap(), 8080);
    }

    #[test]
    fn test_port_parses_value() {
        assert_eq!(parse_port(Some("3000")).unwrap(), 3000);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = parse_port(Some("not-a-port")).unwrap_err();
        assert!(err.to_string().contains("PORT must be a valid port number"));
    }
}
