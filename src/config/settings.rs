//! Bot settings loaded from the process environment.

use std::fmt;

use serde::Serialize;

use super::{AspectRatio, LogLevel, GEMINI_MODEL};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// One or more required variables are unset or empty. Carries every
    /// missing name so the operator can fix them all in one pass.
    #[error("Missing required environment variables: {}", .missing.join(", "))]
    MissingConfiguration { missing: Vec<&'static str> },

    #[error("ADMIN_IDS contains a non-integer entry: {token:?}")]
    InvalidAdminId { token: String },

    #[error("Unknown log level {value:?} (expected TRACE, DEBUG, INFO, WARN or ERROR)")]
    InvalidLogLevel { value: String },

    #[error("Unknown aspect ratio {value:?} (expected 1:1, 16:9, 9:16, 4:3 or 3:4)")]
    InvalidAspectRatio { value: String },

    #[error("A global logging subscriber is already installed")]
    LoggingInit,
}

/// Fully validated bot settings.
///
/// Constructed once at startup via [`Settings::from_env`] and passed by
/// reference to the components that need it. Fields are fixed after
/// construction; there are no setters.
#[derive(Clone, Serialize)]
pub struct Settings {
    /// Bot token from `@BotFather`. Secret: redacted in `Debug`, never
    /// serialized.
    #[serde(skip_serializing)]
    pub telegram_bot_token: String,

    /// Google AI Studio API key. Secret, same handling as the bot token.
    #[serde(skip_serializing)]
    pub gemini_api_key: String,

    /// Aspect ratio used when the user does not ask for one.
    pub default_aspect_ratio: AspectRatio,

    /// Minimum severity for process-wide logging.
    pub log_level: LogLevel,

    /// Telegram user IDs allowed to run admin commands. Empty means no
    /// admins configured.
    pub admin_ids: Vec<i64>,
}

impl Settings {
    /// Loads settings from the ambient process environment.
    ///
    /// Call [`super::load_env_file`] first if a `.env` file should
    /// pre-populate the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is unset/empty, an admin ID
    /// is not an integer, or `LOG_LEVEL` is unrecognized.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through an arbitrary variable lookup.
    ///
    /// This is the actual constructor; [`Settings::from_env`] wires it to
    /// `std::env::var`. Tests supply a closure over a map instead of
    /// mutating the process environment.
    ///
    /// An empty value counts the same as an unset one.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Settings::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let telegram_bot_token = read("TELEGRAM_BOT_TOKEN");
        let gemini_api_key = read("GEMINI_API_KEY");

        // Collect every missing required variable before failing, so the
        // operator sees the complete list rather than one name per restart.
        let mut missing = Vec::new();
        if telegram_bot_token.is_none() {
            missing.push("TELEGRAM_BOT_TOKEN");
        }
        if gemini_api_key.is_none() {
            missing.push("GEMINI_API_KEY");
        }
        let (Some(telegram_bot_token), Some(gemini_api_key)) =
            (telegram_bot_token, gemini_api_key)
        else {
            return Err(ConfigError::MissingConfiguration { missing });
        };

        let log_level = match read("LOG_LEVEL") {
            Some(value) => value.parse()?,
            None => LogLevel::default(),
        };

        let admin_ids = parse_admin_ids(&read("ADMIN_IDS").unwrap_or_default())?;

        Ok(Self {
            telegram_bot_token,
            gemini_api_key,
            default_aspect_ratio: AspectRatio::default(),
            log_level,
            admin_ids,
        })
    }

    /// The Gemini model used for image generation. Fixed, not overridable
    /// via the environment.
    #[must_use]
    pub const fn gemini_model(&self) -> &'static str {
        GEMINI_MODEL
    }

    /// Returns true if `user_id` is in the configured admin list.
    #[must_use]
    pub fn is_admin(&self, user_id: i64) -> bool {
        self.admin_ids.contains(&user_id)
    }

    /// Renders a commented `.env` template covering every consumed variable.
    #[must_use]
    pub fn example_env() -> String {
        concat!(
            "# Bot token from @BotFather\n",
            "TELEGRAM_BOT_TOKEN=123456:ABC-DEF_your_token_here\n",
            "\n",
            "# API key from Google AI Studio (https://aistudio.google.com)\n",
            "GEMINI_API_KEY=your_api_key_here\n",
            "\n",
            "# Optional: minimum log severity (TRACE, DEBUG, INFO, WARN, ERROR)\n",
            "#LOG_LEVEL=INFO\n",
            "\n",
            "# Optional: comma-separated Telegram user IDs with admin access.\n",
            "# Whitespace around IDs is ignored.\n",
            "#ADMIN_IDS=123456789,987654321\n",
        )
        .to_owned()
    }
}

// Secrets must not leak into logs, so Debug is written by hand.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("telegram_bot_token", &"***")
            .field("gemini_api_key", &"***")
            .field("gemini_model", &GEMINI_MODEL)
            .field("default_aspect_ratio", &self.default_aspect_ratio)
            .field("log_level", &self.log_level)
            .field("admin_ids", &self.admin_ids)
            .finish()
    }
}

/// Parses a comma-separated list of Telegram user IDs.
///
/// Tokens are trimmed and empty tokens discarded, so `"1,,3"` and
/// `"1, 3"` both yield `[1, 3]`. Input order is preserved.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidAdminId`] on the first token that is not
/// a valid integer.
pub fn parse_admin_ids(raw: &str) -> Result<Vec<i64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse().map_err(|_| ConfigError::InvalidAdminId {
                token: token.to_owned(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_minimal_environment_succeeds_with_defaults() {
        let settings = Settings::from_lookup(env(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("GEMINI_API_KEY", "key"),
        ]))
        .unwrap();

        assert_eq!(settings.telegram_bot_token, "123:abc");
        assert_eq!(settings.gemini_api_key, "key");
        assert_eq!(settings.default_aspect_ratio, AspectRatio::Square);
        assert_eq!(settings.log_level, LogLevel::Info);
        assert!(settings.admin_ids.is_empty());
        assert_eq!(settings.gemini_model(), GEMINI_MODEL);
    }

    #[test]
    fn test_reports_all_missing_variables_at_once() {
        let err = Settings::from_lookup(env(&[])).unwrap_err();
        match err {
            ConfigError::MissingConfiguration { missing } => {
                assert_eq!(missing, vec!["TELEGRAM_BOT_TOKEN", "GEMINI_API_KEY"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_error_message_names_every_variable() {
        let err = Settings::from_lookup(env(&[])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("TELEGRAM_BOT_TOKEN"));
        assert!(message.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let err = Settings::from_lookup(env(&[
            ("TELEGRAM_BOT_TOKEN", "  "),
            ("GEMINI_API_KEY", "key"),
        ]))
        .unwrap_err();
        match err {
            ConfigError::MissingConfiguration { missing } => {
                assert_eq!(missing, vec!["TELEGRAM_BOT_TOKEN"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_admin_ids_ordered() {
        assert_eq!(parse_admin_ids("1,2,3").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_admin_ids_empty_input() {
        assert_eq!(parse_admin_ids("").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_parse_admin_ids_discards_empty_tokens() {
        assert_eq!(parse_admin_ids("1,,3").unwrap(), vec![1, 3]);
        assert_eq!(parse_admin_ids("1, 3,").unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_parse_admin_ids_rejects_non_integer() {
        let err = parse_admin_ids("1,x,3").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidAdminId { token } if token == "x"
        ));
    }

    #[test]
    fn test_invalid_log_level_fails_construction() {
        let err = Settings::from_lookup(env(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("GEMINI_API_KEY", "key"),
            ("LOG_LEVEL", "VERBOSE"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidLogLevel { value } if value == "VERBOSE"
        ));
    }

    #[test]
    fn test_explicit_log_level_applied() {
        let settings = Settings::from_lookup(env(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("GEMINI_API_KEY", "key"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(settings.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_admin_ids_from_lookup() {
        let settings = Settings::from_lookup(env(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("GEMINI_API_KEY", "key"),
            ("ADMIN_IDS", "10, 20"),
        ]))
        .unwrap();
        assert_eq!(settings.admin_ids, vec![10, 20]);
        assert!(settings.is_admin(10));
        assert!(!settings.is_admin(30));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let settings = Settings::from_lookup(env(&[
            ("TELEGRAM_BOT_TOKEN", "123:secret-token"),
            ("GEMINI_API_KEY", "secret-key"),
        ]))
        .unwrap();
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_serialize_skips_secrets() {
        let settings = Settings::from_lookup(env(&[
            ("TELEGRAM_BOT_TOKEN", "123:secret-token"),
            ("GEMINI_API_KEY", "secret-key"),
        ]))
        .unwrap();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"log_level\":\"INFO\""));
        assert!(json.contains("\"default_aspect_ratio\":\"1:1\""));
    }

    #[test]
    fn test_example_env_covers_every_variable() {
        let example = Settings::example_env();
        for var in [
            "TELEGRAM_BOT_TOKEN",
            "GEMINI_API_KEY",
            "LOG_LEVEL",
            "ADMIN_IDS",
        ] {
            assert!(example.contains(var), "template is missing {var}");
        }
    }
}
