use std::{fs::File, io::Read, path::Path};
use log::warn;
use serde::Deserialize;
use crate::error::ConfigError;

pub const CONFIG_ENV: &str = "IPSET_RUNNER_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Binary name or path, looked up on PATH.
    pub binary: String,
    /// Default options carried by the handle.
    pub options: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            binary: "ipset".to_string(),
            options: Vec::new(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let mut cfg_file = File::open(path)?;
        let mut cfg_text = String::new();
        cfg_file.read_to_string(&mut cfg_text)?;
        Config::parse(&cfg_text)
    }

    pub fn parse(text: &str) -> Result<Config, ConfigError> {
        let cfg: Config = serde_yaml::from_str(text)?;
        Ok(cfg)
    }

    /// Loads the file named by `IPSET_RUNNER_CONFIG`, or defaults.
    pub fn from_env() -> Config {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Config::load(&path).unwrap_or_else(|e| {
                warn!("ignoring config {}: {}", Path::new(&path).display(), e);
                Config::default()
            }),
            None => Config::default(),
        }
    }
}

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}
