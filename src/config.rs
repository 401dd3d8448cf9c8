//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (loaded in `main.rs`).
//!
//! ```bash
//! export SUPABASE_URL="https://abcd.supabase.co"
//! export SUPABASE_KEY="<service role or anon key>"
//! ```
//!
//! ## Required Variables
//!
//! - `SUPABASE_URL` - Supabase project URL (`http://` or `https://`)
//! - `SUPABASE_KEY` - Supabase project API key
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:$PORT`, `PORT` defaulting to `3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SUPABASE_TIMEOUT_SECS` - Timeout for every Supabase request (default: 10, range 1-300)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::infrastructure::supabase::SupabaseConfig;

const DEFAULT_PORT: &str = "3000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_key: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound for each outbound Supabase request, in seconds.
    pub supabase_timeout_secs: u64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &mask_secret(&self.supabase_key))
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("supabase_timeout_secs", &self.supabase_timeout_secs)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SUPABASE_URL` or `SUPABASE_KEY` is missing, or if
    /// `SUPABASE_TIMEOUT_SECS` is not a number.
    pub fn from_env() -> Result<Self> {
        let supabase_url = env::var("SUPABASE_URL").context("SUPABASE_URL must be set")?;
        let supabase_key = env::var("SUPABASE_KEY").context("SUPABASE_KEY must be set")?;

        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let supabase_timeout_secs = match env::var("SUPABASE_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SUPABASE_TIMEOUT_SECS must be a number, got '{raw}'"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            supabase_url,
            supabase_key,
            listen_addr,
            log_level,
            log_format,
            supabase_timeout_secs,
        })
    }

    /// Resolves the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:$PORT`, with `PORT` defaulting to 3000
    fn load_listen_addr() -> String {
        if let Ok(listen) = env::var("LISTEN") {
            return listen;
        }

        let port = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        format!("0.0.0.0:{port}")
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `supabase_url` is not an absolute `http`/`https` URL
    /// - `supabase_key` is blank
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `supabase_timeout_secs` is outside 1..=300
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.supabase_url)
            .with_context(|| format!("SUPABASE_URL is not a valid URL: '{}'", self.supabase_url))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!(
                "SUPABASE_URL must start with 'http://' or 'https://', got '{}'",
                self.supabase_url
            );
        }

        if self.supabase_key.trim().is_empty() {
            anyhow::bail!("SUPABASE_KEY must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !(1..=300).contains(&self.supabase_timeout_secs) {
            anyhow::bail!(
                "SUPABASE_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.supabase_timeout_secs
            );
        }

        Ok(())
    }

    /// Connection settings for the Supabase clients.
    pub fn supabase(&self) -> SupabaseConfig {
        SupabaseConfig {
            url: self.supabase_url.clone(),
            api_key: self.supabase_key.clone(),
            timeout: Duration::from_secs(self.supabase_timeout_secs),
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Supabase URL: {}", self.supabase_url);
        tracing::info!("  Supabase key: {}", mask_secret(&self.supabase_key));
        tracing::info!("  Supabase timeout: {}s", self.supabase_timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Keeps the first four characters of a secret and masks the rest.
fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 8 {
        "***".to_string()
    } else {
        format!("{visible}***")
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
