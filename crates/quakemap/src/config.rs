//! Configuration loading for the quakemap binary.
//!
//! Values are layered with the `config` crate, later sources overriding
//! earlier ones:
//!
//! 1. Built-in defaults (the public USGS weekly feed, `earthquakes.html`)
//! 2. An optional `quakemap.toml` / `quakemap.yaml` in the working directory
//! 3. `QUAKEMAP_*` environment variables, e.g. `QUAKEMAP_FEED_URL`

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use quakemap_feed::DEFAULT_FEED_URL;
use quakemap_map::render::DEFAULT_TITLE;
use serde::Deserialize;

/// Output value that sends the page to standard output.
pub const STDOUT_OUTPUT: &str = "-";

const CONFIG_FILE_STEM: &str = "quakemap";
const ENV_PREFIX: &str = "QUAKEMAP";

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// GeoJSON feed to fetch.
    pub feed_url: String,
    /// Where the rendered page is written; `-` means stdout.
    pub output: String,
    /// Whole-request timeout in seconds. Unset or `0` means no timeout.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Page title.
    pub title: String,
}

impl AppConfig {
    /// Load configuration from defaults, the optional config file and the
    /// process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Load configuration using `env` as the environment layer.
    fn load_from(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("feed_url", DEFAULT_FEED_URL)?
            .set_default("output", "earthquakes.html")?
            .set_default("title", DEFAULT_TITLE)?
            .add_source(File::with_name(CONFIG_FILE_STEM).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Request timeout, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Whether the page goes to standard output.
    pub fn writes_to_stdout(&self) -> bool {
        self.output == STDOUT_OUTPUT
    }
}
