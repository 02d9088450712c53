use crate::error::KeuanganError;
use crate::pagination::{DEFAULT_MAX_WINDOW, ItemsPerPage};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_ITEMS_PER_PAGE: &str = "KEUANGAN_ITEMS_PER_PAGE";
pub const ENV_MAX_WINDOW: &str = "KEUANGAN_MAX_WINDOW";

const CONFIG_FILE_NAME: &str = "config.json";

/// List display settings.
///
/// Resolution order: built-in defaults, then `config.json` in the platform
/// config directory, then environment variables. The CLI applies its own
/// flags on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub items_per_page: ItemsPerPage,
    pub max_window: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items_per_page: ItemsPerPage::default(),
            max_window: DEFAULT_MAX_WINDOW,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf, KeuanganError> {
        ProjectDirs::from("", "", "keuangan")
            .map(|proj_dirs| proj_dirs.config_dir().join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                KeuanganError::Config("Could not determine config directory".to_string())
            })
    }

    /// Load from the default location and apply environment overrides.
    pub fn load() -> Result<Self, KeuanganError> {
        let mut config = Self::load_from(&Self::default_path()?)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// A missing file is not an error; defaults are used instead.
    pub fn load_from(path: &Path) -> Result<Self, KeuanganError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), KeuanganError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Apply overrides from a key lookup (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), KeuanganError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_ITEMS_PER_PAGE) {
            self.items_per_page = value.parse()?;
            log::debug!(
                "{} overrides page size: {}",
                ENV_ITEMS_PER_PAGE,
                self.items_per_page
            );
        }
        if let Some(value) = lookup(ENV_MAX_WINDOW) {
            self.max_window = value.trim().parse().map_err(|_| {
                KeuanganError::Config(format!(
                    "{} must be a positive number, got '{}'",
                    ENV_MAX_WINDOW, value
                ))
            })?;
            log::debug!("{} overrides window size: {}", ENV_MAX_WINDOW, self.max_window);
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), KeuanganError> {
        if self.max_window == 0 {
            return Err(KeuanganError::Config("max_window must be at least 1".to_string()));
        }
        Ok(())
    }
}
