//! Configuration file discovery for the CLI
//!
//! Candidates are tried in order and the first file that exists wins:
//!
//! 1. The `--config` path (must exist)
//! 2. `tracelane/config.toml` in the working directory
//! 3. `config.toml` in the platform config directory
//!
//! With no file at all the built-in defaults are used. A file that exists but
//! cannot be parsed, or whose style colors are invalid, is an error naming
//! that file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use tracelane::{TracelaneError, config::AppConfig};

const LOCAL_CONFIG: &str = "tracelane/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration in `{}`: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Cannot read configuration file `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<ConfigError> for TracelaneError {
    fn from(err: ConfigError) -> Self {
        TracelaneError::Config(err.to_string())
    }
}

/// Load the configuration for this run.
///
/// # Errors
///
/// Returns [`TracelaneError::Config`] if the explicit path does not exist, or
/// if the selected file cannot be read, parsed or validated.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, TracelaneError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path:% = path.display(); "Loading configuration from explicit path");
        return read_config(path)?
            .ok_or_else(|| ConfigError::MissingFile(path.to_path_buf()).into());
    }

    for path in discovered_paths() {
        if let Some(config) = read_config(&path)? {
            info!(path:% = path.display(); "Loaded configuration");
            return Ok(config);
        }
        debug!(path:% = path.display(); "No configuration file here");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn discovered_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
    match ProjectDirs::from("com", "tracelane", "tracelane") {
        Some(dirs) => paths.push(dirs.config_dir().join("config.toml")),
        None => debug!("Could not determine platform-specific config directory"),
    }
    paths
}

/// Reads and validates one configuration file; `None` if it does not exist.
fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let invalid = |message: String| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    };

    let config: AppConfig = toml::from_str(&content).map_err(|err| invalid(err.to_string()))?;
    config.style.palette().map_err(invalid)?;
    config.style.background_color().map_err(invalid)?;

    Ok(Some(config))
}
