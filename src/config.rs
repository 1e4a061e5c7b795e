use crate::constants::{self, env_vars};
use crate::error::BotError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Configuration structure for the bot process.
/// Handles loading, saving, and validating application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Telegram bot token issued by @BotFather.
    pub bot_token: String,
    /// PandaScore API bearer token.
    pub pandascore_token: String,
    /// Public base URL for the webhook listener. When absent the bot falls
    /// back to long-polling, which needs no public endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Port the webhook listener binds to.
    #[serde(default = "default_webhook_port")]
    pub webhook_port: u16,
    /// Path to the log file. If not specified, logs go to stdout only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Timeout in seconds for statistics API requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_webhook_port() -> u16 {
    constants::DEFAULT_WEBHOOK_PORT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bot_token: String::new(),
            pandascore_token: String::new(),
            webhook_url: None,
            webhook_port: default_webhook_port(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location, then
    /// applies environment variable overrides.
    ///
    /// # Environment Variables
    /// - `FURIA_BOT_TOKEN` - Telegram bot token
    /// - `PANDASCORE_TOKEN` - PandaScore API token
    /// - `FURIA_WEBHOOK_URL` - Webhook base URL (polling when unset everywhere)
    /// - `FURIA_WEBHOOK_PORT` - Webhook listen port
    /// - `FURIA_LOG_FILE` - Log file path
    /// - `FURIA_HTTP_TIMEOUT` - API timeout in seconds (default: 10)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded and validated configuration
    /// * `Err(BotError)` - Missing credentials or invalid values
    ///
    /// # Notes
    /// - The config file is optional; a deployment may run on env vars alone
    /// - Environment variables take precedence over config file values
    pub async fn load() -> Result<Self, BotError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides onto the current values.
    fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var(env_vars::BOT_TOKEN) {
            self.bot_token = token;
        }
        if let Ok(token) = std::env::var(env_vars::PANDASCORE_TOKEN) {
            self.pandascore_token = token;
        }
        if let Ok(url) = std::env::var(env_vars::WEBHOOK_URL) {
            self.webhook_url = Some(url);
        }
        if let Some(port) = std::env::var(env_vars::WEBHOOK_PORT)
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.webhook_port = port;
        }
        if let Ok(path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(path);
        }
        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings.
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(BotError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), BotError> {
        if self.bot_token.trim().is_empty() {
            return Err(BotError::config_error(format!(
                "Telegram bot token is required (set {})",
                env_vars::BOT_TOKEN
            )));
        }
        if self.pandascore_token.trim().is_empty() {
            return Err(BotError::config_error(format!(
                "PandaScore API token is required (set {})",
                env_vars::PANDASCORE_TOKEN
            )));
        }
        if self.http_timeout_seconds == 0 {
            return Err(BotError::config_error(
                "HTTP timeout must be greater than zero",
            ));
        }
        if let Some(url) = &self.webhook_url {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(BotError::config_error(format!(
                    "Webhook URL must include the scheme: {url}"
                )));
            }
        }
        Ok(())
    }

    /// Saves the current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), BotError> {
        self.save_to_path(&get_config_path()).await
    }

    /// Saves the current configuration to a specific path, creating parent
    /// directories as needed.
    pub async fn save_to_path(&self, path: &str) -> Result<(), BotError> {
        if let Some(parent) = Path::new(path).parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

/// Returns the platform-specific path for the config file.
///
/// Uses the platform config directory (e.g. `~/.config` on Linux) and falls
/// back to the current directory when it is unavailable.
pub fn get_config_path() -> String {
    dirs::config_dir()
        .map(|p| p.join("furia_fanbot").join("config.toml"))
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "config.toml".to_string())
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .map(|p| p.join("furia_fanbot").join("logs"))
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "logs".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            bot_token: "123456:ABC-DEF".to_string(),
            pandascore_token: "panda-secret".to_string(),
            webhook_url: None,
            webhook_port: 5000,
            log_file_path: None,
            http_timeout_seconds: 10,
        }
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
        assert_eq!(config.webhook_port, constants::DEFAULT_WEBHOOK_PORT);
        assert!(config.webhook_url.is_none());
        assert!(config.log_file_path.is_none());
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_tokens() {
        let mut config = valid_config();
        config.bot_token = String::new();
        assert!(matches!(config.validate(), Err(BotError::Config(_))));

        let mut config = valid_config();
        config.pandascore_token = "   ".to_string();
        assert!(matches!(config.validate(), Err(BotError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = valid_config();
        config.http_timeout_seconds = 0;
        assert!(matches!(config.validate(), Err(BotError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_schemeless_webhook_url() {
        let mut config = valid_config();
        config.webhook_url = Some("example.ngrok.app".to_string());
        assert!(matches!(config.validate(), Err(BotError::Config(_))));

        config.webhook_url = Some("https://example.ngrok.app".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip_defaults_optional_fields() {
        let parsed: Config = toml::from_str(
            r#"
            bot_token = "123456:ABC-DEF"
            pandascore_token = "panda-secret"
            "#,
        )
        .expect("minimal config should parse");

        assert_eq!(parsed.bot_token, "123456:ABC-DEF");
        assert_eq!(
            parsed.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
        assert_eq!(parsed.webhook_port, constants::DEFAULT_WEBHOOK_PORT);
        assert!(parsed.webhook_url.is_none());
    }

    #[tokio::test]
    async fn test_save_and_reload_from_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir
            .path()
            .join("config.toml")
            .to_string_lossy()
            .to_string();

        let mut config = valid_config();
        config.webhook_url = Some("https://example.ngrok.app".to_string());
        config.save_to_path(&path).await.expect("save config");

        let content = tokio::fs::read_to_string(&path).await.expect("read back");
        let reloaded: Config = toml::from_str(&content).expect("parse saved config");
        assert_eq!(reloaded.bot_token, config.bot_token);
        assert_eq!(reloaded.webhook_url, config.webhook_url);
        assert_eq!(reloaded.webhook_port, config.webhook_port);
    }

    #[test]
    fn test_config_paths_are_not_empty() {
        assert!(!get_config_path().is_empty());
        assert!(!get_log_dir_path().is_empty());
    }
}
