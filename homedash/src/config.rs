//! Matcher configuration
//!
//! Only the match window is tunable. It can come from JSON or from the
//! `HOMEDASH_MATCH_WINDOW` environment variable; both paths are validated.

use serde::{Deserialize, Serialize};

use crate::interface::MatchError;

/// Only the first this-many UTF-16 code units of a title or url are searched.
pub const DEFAULT_WINDOW_CHARS: usize = 50;

/// Environment variable overriding [`MatchConfig::window_chars`].
pub const WINDOW_ENV: &str = "HOMEDASH_MATCH_WINDOW";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// UTF-16 code units kept from each prefix-stripped field before matching.
    pub window_chars: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            window_chars: DEFAULT_WINDOW_CHARS,
        }
    }
}

impl MatchConfig {
    pub fn from_json(raw: &str) -> Result<Self, MatchError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    /// Read the config from the environment. Unset or blank means default.
    pub fn from_env() -> Result<Self, MatchError> {
        Self::from_env_value(std::env::var(WINDOW_ENV).ok().as_deref())
    }

    fn from_env_value(raw: Option<&str>) -> Result<Self, MatchError> {
        let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return Ok(Self::default());
        };
        let window_chars = value.parse::<usize>().map_err(|_| {
            MatchError::InvalidConfig(format!("{WINDOW_ENV} must be a positive integer, got {value:?}"))
        })?;
        Self { window_chars }.validate()
    }

    pub fn validate(self) -> Result<Self, MatchError> {
        if self.window_chars == 0 {
            return Err(MatchError::InvalidConfig(
                "window_chars must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}
