//! Credential loading for the homework watch bot.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),
    #[error("TELEGRAM_CHAT_ID must be a numeric chat id")]
    InvalidChatId,
}

/// Credentials loaded once at startup and passed by reference from there
/// on. Absence of any of them is fatal before the first network call.
#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub chat_id: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PRACTICUM_TOKEN").ok(),
            std::env::var("TELEGRAM_TOKEN").ok(),
            std::env::var("TELEGRAM_CHAT_ID").ok(),
        )
    }

    fn from_vars(
        practicum_token: Option<String>,
        telegram_token: Option<String>,
        chat_id: Option<String>,
    ) -> Result<Self, ConfigError> {
        let practicum_token = require(practicum_token, "PRACTICUM_TOKEN")?;
        let telegram_token = require(telegram_token, "TELEGRAM_TOKEN")?;
        let chat_id = require(chat_id, "TELEGRAM_CHAT_ID")?
            .parse()
            .map_err(|_| ConfigError::InvalidChatId)?;
        Ok(Self {
            practicum_token,
            telegram_token,
            chat_id,
        })
    }
}

/// A set-but-blank variable counts as missing.
fn require(value: Option<String>, name: &'static str) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> (Option<String>, Option<String>, Option<String>) {
        (
            Some("y0_token".into()),
            Some("123:bot-token".into()),
            Some("987654321".into()),
        )
    }

    #[test]
    fn all_credentials_present() {
        let (p, t, c) = full();
        let cfg = Config::from_vars(p, t, c).unwrap();
        assert_eq!(cfg.practicum_token, "y0_token");
        assert_eq!(cfg.telegram_token, "123:bot-token");
        assert_eq!(cfg.chat_id, 987654321);
    }

    #[test]
    fn missing_practicum_token() {
        let (_, t, c) = full();
        let err = Config::from_vars(None, t, c).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("PRACTICUM_TOKEN")));
    }

    #[test]
    fn missing_telegram_token() {
        let (p, _, c) = full();
        let err = Config::from_vars(p, None, c).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("TELEGRAM_TOKEN")));
    }

    #[test]
    fn missing_chat_id() {
        let (p, t, _) = full();
        let err = Config::from_vars(p, t, None).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("TELEGRAM_CHAT_ID")));
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let (_, t, c) = full();
        let err = Config::from_vars(Some("   ".into()), t, c).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("PRACTICUM_TOKEN")));
    }

    #[test]
    fn non_numeric_chat_id() {
        let (p, t, _) = full();
        let err = Config::from_vars(p, t, Some("@channel".into())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidChatId));
    }
}
