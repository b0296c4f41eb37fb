//! Environment-driven configuration.

use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-3-5-haiku-latest";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_MAX_TOKENS: u32 = 512;

/// Variables consulted, in order, for the environment's locale list.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    /// No key means offline play: every question comes from the fallback pool.
    pub api_key: Option<String>,
    pub model: String,
    pub timeout: Duration,
    pub max_tokens: u32,
    pub app_locale: Option<String>,
    pub environment_locales: Vec<String>,
}

impl Config {
    /// Read settings from the process environment (after `.env`).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let timeout_secs = match non_empty("CHARADES_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("CHARADES_TIMEOUT_SECS must be a number of seconds, got {raw:?}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let max_tokens = match non_empty("CHARADES_MAX_TOKENS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("CHARADES_MAX_TOKENS must be a positive integer, got {raw:?}"))?,
            None => DEFAULT_MAX_TOKENS,
        };

        Ok(Self {
            api_url: non_empty("CHARADES_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_key: non_empty("CHARADES_API_KEY"),
            model: non_empty("CHARADES_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            max_tokens,
            app_locale: non_empty("APP_LOCALE"),
            environment_locales: LOCALE_VARS.iter().filter_map(|key| non_empty(*key)).collect(),
        })
    }
}
