//! Client configuration.
//!
//! Loading precedence, lowest to highest: built-in defaults, an optional
//! YAML config file, `INCUBATOR_`-prefixed environment variables
//! (e.g. `INCUBATOR_API__BASE_URL`), then explicit CLI flags.

use std::env;
use std::path::Path;

use clap::Args;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Configuration-related CLI flags, flattened into the binary's parser.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Backend base URL
    #[arg(long, env = "INCUBATOR_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "INCUBATOR_TIMEOUT")]
    pub timeout_secs: Option<u64>,

    /// Session file path
    #[arg(long, env = "INCUBATOR_SESSION_FILE")]
    pub session_file: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Path of the persisted session snapshot.
    pub file: String,
}

impl ClientConfig {
    /// Load configuration with default CLI flags (env and files still apply).
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(&ConfigArgs::default())
    }

    /// Load configuration, applying `args` as the highest-precedence layer.
    pub fn load_with(args: &ConfigArgs) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("api.timeout_secs", 30)?
            .set_default("session.file", ".incubator-session.json")?;

        // Config file: CLI flag, then CONFIG_FILE env, then ./incubator.yaml.
        let file = args.config.clone().or_else(|| env::var("CONFIG_FILE").ok());
        if let Some(path) = file {
            builder = builder.add_source(File::with_name(&path));
        } else if Path::new("incubator.yaml").exists() {
            builder = builder.add_source(File::with_name("incubator"));
        }

        // Environment variables, e.g. INCUBATOR_API__TIMEOUT_SECS=5.
        builder = builder.add_source(
            Environment::with_prefix("INCUBATOR")
                .separator("__")
                .try_parsing(true),
        );

        // Explicit CLI flags win over everything.
        if let Some(url) = &args.api_url {
            builder = builder.set_override("api.base_url", url.clone())?;
        }
        if let Some(timeout) = args.timeout_secs {
            builder = builder.set_override("api.timeout_secs", timeout)?;
        }
        if let Some(file) = &args.session_file {
            builder = builder.set_override("session.file", file.clone())?;
        }

        builder.build()?.try_deserialize()
    }
}
