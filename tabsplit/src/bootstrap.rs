use std::{env, io};

use tabsplit_application::{DEFAULT_AVATAR_BASE, Session};
use tracing_subscriber::EnvFilter;

use crate::{repl::Repl, seed};

const AVATAR_BASE_VAR: &str = "TABSPLIT_AVATAR_BASE";
const SEED_DEMO_VAR: &str = "TABSPLIT_SEED_DEMO";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be one of true/false/yes/no/1/0 (found '{value}')")]
    InvalidFlag { name: &'static str, value: String },
    #[error("{name} must not be empty")]
    EmptyValue { name: &'static str },
}

/// Application configuration
#[derive(Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub avatar_base: String,
    pub seed_demo: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let avatar_base = match lookup(AVATAR_BASE_VAR) {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::EmptyValue {
                    name: AVATAR_BASE_VAR,
                });
            }
            Some(value) => value.trim().to_string(),
            None => DEFAULT_AVATAR_BASE.to_string(),
        };

        let seed_demo = match lookup(SEED_DEMO_VAR) {
            Some(value) => parse_flag(SEED_DEMO_VAR, &value)?,
            None => true,
        };

        Ok(Self {
            avatar_base,
            seed_demo,
        })
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}

/// Initialize logging and tracing. Logs go to stderr; stdout is the UI.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run the application with proper error handling
pub fn run() {
    init_logging();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "loaded configuration");

    let ledger = match seed::initial_ledger(config.seed_demo, &config.avatar_base) {
        Ok(ledger) => ledger,
        Err(e) => {
            tracing::error!("Failed to seed friends: {e}");
            std::process::exit(1);
        }
    };
    let mut session = Session::with_default_avatar(ledger, config.avatar_base);

    let mut repl = Repl::new(io::stdin().lock(), io::stdout().lock());
    if let Err(e) = repl.run(&mut session) {
        tracing::error!("Terminal error: {e}");
        std::process::exit(1);
    }
}
