use crate::utils::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "./config.json";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_dir: PathBuf,
    pub log_to_file: bool,
    pub password: PasswordConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    pub word_api_url: String,
    /// Number of words requested from the word API.
    pub fetch_count: usize,
    /// Upper bound applied to the word, number and symbol counts.
    pub max_insertions: u32,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub width: usize,
    /// Install command template, `{}` is replaced by the package name.
    pub install_command: String,
    pub auto_install: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_dir: PathBuf::from("."),
            log_to_file: true,
            password: PasswordConfig::default(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        PasswordConfig {
            word_api_url: String::from("https://random-word-api.herokuapp.com/word"),
            fetch_count: 1000,
            max_insertions: 256,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            width: 120,
            install_command: String::from("sudo apt-get install -y {}"),
            auto_install: true,
        }
    }
}

impl AppConfig {
    /// Loads the config at `path`. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                return Ok(AppConfig::default());
            }
            Err(e) => return Err(Error::Io(e)),
        };
        serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
