use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub const DEFAULT_SOURCE_URL: &str = "https://www.checklistinsider.com/release-calendar?v=list";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_OUTPUT: &str = "releases.json";

/// Env vars are read as `RELEASES_<FIELD>`, e.g. `RELEASES_TIMEOUT_SECS=10`.
const ENV_PREFIX: &str = "RELEASES";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub source_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub output: PathBuf,
    /// Saved page to parse instead of fetching `source_url`.
    #[serde(default)]
    pub input: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output: PathBuf::from(DEFAULT_OUTPUT),
            input: None,
        }
    }
}

impl Settings {
    /// Defaults overlaid with `RELEASES_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("source_url", DEFAULT_SOURCE_URL)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("output", DEFAULT_OUTPUT)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn defaults_without_env() {
        let settings = Settings::from_env(env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn env_overrides_defaults() {
        let settings = Settings::from_env(env(&[
            ("RELEASES_TIMEOUT_SECS", "5"),
            ("RELEASES_OUTPUT", "out/cal.json"),
        ]))
        .unwrap();
        assert_eq!(settings.timeout_secs, 5);
        assert_eq!(settings.output, PathBuf::from("out/cal.json"));
        assert_eq!(settings.source_url, DEFAULT_SOURCE_URL);
    }

    #[test]
    fn bad_number_is_an_error() {
        assert!(Settings::from_env(env(&[("RELEASES_TIMEOUT_SECS", "soon")])).is_err());
    }
}
