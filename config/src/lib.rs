//! Configuration loading for ghostlog.
//!
//! ```toml
//! [app]
//! ascii_only = false
//! show_probabilities = true
//!
//! [table]
//! evidence_order = ["EMF 5", "Spirit Box", "Ghost Orbs", "Ghost Writing", "Fingerprints", "Freezing Temperatures"]
//!
//! [[table.identities]]
//! name = "Spirit"
//! evidence = ["Fingerprints", "Ghost Writing", "Spirit Box"]
//! ```
//!
//! Every section is optional. A `[table]` section replaces the built-in
//! reference table and must list every ghost.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use ghostlog_types::{Evidence, Ghost, ReferenceTable, TableError};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "GHOSTLOG_CONFIG";

// Default value function for serde (bool::default() is false, so only true needs a fn)
const fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct GhostlogConfig {
    pub app: Option<AppConfig>,
    pub table: Option<TableConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid reference table in {}: {source}", path.display())]
    Table { path: PathBuf, source: TableError },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Table { path, .. } => path,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only markers when rendering the board.
    #[serde(default)]
    pub ascii_only: bool,
    /// Show the per-evidence percentage next to each candidate.
    #[serde(default = "default_true")]
    pub show_probabilities: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ascii_only: false,
            show_probabilities: true,
        }
    }
}

/// A replacement reference table.
#[derive(Debug, Deserialize)]
pub struct TableConfig {
    /// Display order for evidence. Defaults to the built-in order.
    pub evidence_order: Option<Vec<Evidence>>,
    #[serde(default)]
    pub identities: Vec<IdentityConfig>,
}

#[derive(Debug, Deserialize)]
pub struct IdentityConfig {
    pub name: Ghost,
    pub evidence: Vec<Evidence>,
}

impl TableConfig {
    pub fn to_reference_table(&self) -> Result<ReferenceTable, TableError> {
        let entries = self
            .identities
            .iter()
            .map(|identity| (identity.name, identity.evidence.as_slice()));

        match &self.evidence_order {
            Some(order) => ReferenceTable::new(entries, order.iter().copied()),
            None => {
                let standard = ReferenceTable::standard();
                ReferenceTable::new(entries, standard.evidence_order().iter().copied())
            }
        }
    }
}

impl GhostlogConfig {
    /// Load from the default location. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let config: Self = match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                return Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        // Validate eagerly so a broken table is reported at load time.
        if let Some(table) = &config.table
            && let Err(err) = table.to_reference_table()
        {
            return Err(ConfigError::Table {
                path: path.to_path_buf(),
                source: err,
            });
        }

        Ok(config)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// The configured table, or the built-in one.
    pub fn reference_table(&self) -> Result<ReferenceTable, TableError> {
        match &self.table {
            Some(table) => table.to_reference_table(),
            None => Ok(ReferenceTable::standard()),
        }
    }

    #[must_use]
    pub fn ascii_only(&self) -> bool {
        self.app.as_ref().is_some_and(|app| app.ascii_only)
    }

    #[must_use]
    pub fn show_probabilities(&self) -> bool {
        self.app.as_ref().is_none_or(|app| app.show_probabilities)
    }
}

/// `$GHOSTLOG_CONFIG` if set, else `~/.ghostlog/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".ghostlog").join("config.toml"))
}
