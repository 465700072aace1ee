//! Minimal configuration: bot token, optional API URL and log file, loaded from the environment.

use anyhow::{Context as _, Result};
use std::env;
use url::Url;

pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl TelegramConfig {
    /// Reads `BOT_TOKEN` (required), `TELEGRAM_API_URL` or `TELOXIDE_API_URL`, and `LOG_FILE`.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|u| !u.is_empty());
        let log_file = env::var("LOG_FILE").ok().filter(|p| !p.is_empty());
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: None,
        }
    }

    /// Custom Bot API server URL, if configured.
    pub fn api_url(&self) -> Result<Option<Url>> {
        self.telegram_api_url
            .as_deref()
            .map(|raw| Url::parse(raw).with_context(|| format!("Invalid TELEGRAM_API_URL: {}", raw)))
            .transpose()
    }

    /// teloxide client pointed at the configured API server.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        Ok(match self.api_url()? {
            Some(url) => bot.set_api_url(url),
            None => bot,
        })
    }
}
