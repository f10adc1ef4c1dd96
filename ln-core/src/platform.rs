//! Host OS name and per-user directories.

use std::fmt;
use std::path::PathBuf;

use crate::constants::APP_NAME;
use crate::error::{LnError, LnResult};

/// Operating system the client was built for. Shown in the User-Agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// `<os config dir>/LabNocturne`, home of `config.toml`.
    pub fn config_dir() -> LnResult<PathBuf> {
        app_dir(dirs::config_dir(), "config")
    }

    /// `<os data dir>/LabNocturne`, parent of the default log directory.
    pub fn data_dir() -> LnResult<PathBuf> {
        app_dir(dirs::data_dir(), "data")
    }
}

fn app_dir(base: Option<PathBuf>, kind: &str) -> LnResult<PathBuf> {
    base.map(|dir| dir.join(APP_NAME))
        .ok_or_else(|| LnError::Config(format!("could not determine {kind} directory")))
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
        })
    }
}
