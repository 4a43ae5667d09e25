//! Layered configuration: defaults, a TOML file, then environment variables.
//!
//! Command-line flags are applied on top by each command.

use cardwar_engine::game::GameMode;
use cardwar_engine::scheduler::DEFAULT_TICK_INTERVAL;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_PATH_VAR: &str = "CARDWAR_CONFIG";
pub const MODE_VAR: &str = "CARDWAR_MODE";
pub const SEED_VAR: &str = "CARDWAR_SEED";
pub const INTERVAL_VAR: &str = "CARDWAR_INTERVAL_MS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub mode: GameMode,
    pub seed: Option<u64>,
    pub interval_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub mode: ValueSource,
    pub seed: ValueSource,
    pub interval_ms: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            mode: ValueSource::Default,
            seed: ValueSource::Default,
            interval_ms: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: GameMode::AutoAuto,
            seed: None,
            interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read {}: {}", CONFIG_PATH_VAR, e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_PATH_VAR)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.mode {
            cfg.mode = v
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("Invalid mode in file: {}", e)))?;
            sources.mode = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.interval_ms {
            cfg.interval_ms = v;
            sources.interval_ms = ValueSource::File;
        }
    }

    if let Ok(mode) = std::env::var(MODE_VAR)
        && !mode.is_empty()
    {
        cfg.mode = mode
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("Invalid {}: {}", MODE_VAR, e)))?;
        sources.mode = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var(SEED_VAR)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid {}", SEED_VAR)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(interval) = std::env::var(INTERVAL_VAR)
        && !interval.is_empty()
    {
        cfg.interval_ms = interval
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}", INTERVAL_VAR)))?;
        sources.interval_ms = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    interval_ms: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.interval_ms == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: interval_ms must be >=1".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_cadence() {
        let cfg = Config::default();
        assert_eq!(cfg.mode, GameMode::AutoAuto);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.interval_ms, 1600);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let cfg = Config {
            interval_ms: 0,
            ..Config::default()
        };
        let err = validate(&cfg).unwrap_err();
        assert!(err.to_string().contains("interval_ms"));
    }

    #[test]
    fn file_config_fields_are_optional() {
        let f: FileConfig = toml::from_str("seed = 9\n").unwrap();
        assert_eq!(f.seed, Some(9));
        assert!(f.mode.is_none());
        assert!(f.interval_ms.is_none());
    }
}
