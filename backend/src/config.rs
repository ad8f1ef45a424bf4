use std::env;

use thiserror::Error;

const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
const DEFAULT_GATEWAY_MODEL: &str = "google/gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not configured; set it in the environment or .env file")]
    MissingVar(&'static str),
    #[error("PORT must be a number, got {0:?}")]
    InvalidPort(String),
}

/// Service configuration, read from the environment exactly once at startup.
///
/// The gateway key in particular is validated here so a missing secret kills
/// the process with a clear diagnostic instead of failing every request.
#[derive(Clone)]
pub struct AppConfig {
    pub gateway_url: String,
    pub gateway_api_key: String,
    pub gateway_model: String,
    pub port: u16,
    pub frontend_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let gateway_api_key = env::var("AI_GATEWAY_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingVar("AI_GATEWAY_API_KEY"))?;

        let gateway_url =
            env::var("AI_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        let gateway_model =
            env::var("AI_GATEWAY_MODEL").unwrap_or_else(|_| DEFAULT_GATEWAY_MODEL.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 8081,
        };

        let frontend_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
            format!("{}/../frontend/dist", manifest_dir)
        } else {
            "/usr/src/app/frontend/dist".to_string()
        };

        Ok(Self {
            gateway_url,
            gateway_api_key,
            gateway_model,
            port,
            frontend_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            gateway_api_key: "test-key".to_string(),
            gateway_model: DEFAULT_GATEWAY_MODEL.to_string(),
            port: 8081,
            frontend_dir: "/tmp".to_string(),
        }
    }

    #[test]
    fn config_is_cloneable_for_app_data() {
        let config = test_config();
        let copy = config.clone();
        assert_eq!(copy.gateway_model, DEFAULT_GATEWAY_MODEL);
        assert_eq!(copy.port, 8081);
    }

    #[test]
    fn missing_key_error_names_the_variable() {
        let err = ConfigError::MissingVar("AI_GATEWAY_API_KEY");
        assert!(err.to_string().contains("AI_GATEWAY_API_KEY"));
    }
}
