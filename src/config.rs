//! Config loading and persistence.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collab::LocaleProvider;
use crate::core::Locale;

#[derive(Debug, Error)]
#[error("config: {reason}")]
pub struct ConfigError {
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Menu set names bootstrapped at startup and protected from deletion.
    pub default_sets: Vec<String>,
    /// UI affordance toggle; stored and exposed, never interpreted here.
    pub enable_create: bool,
    /// Locales for per-locale item fields. Empty means localisation is off.
    pub locales: Vec<Locale>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_sets: Vec::new(),
            enable_create: true,
            locales: Vec::new(),
        }
    }
}

impl Config {
    /// Expose the locale list as a provider, or nothing when empty.
    ///
    /// The migration engine takes `Option<&dyn LocaleProvider>`; this is the
    /// capability check that decides it.
    pub fn locale_provider(&self) -> Option<&dyn LocaleProvider> {
        if self.locales.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl LocaleProvider for Config {
    fn locales(&self) -> Vec<Locale> {
        self.locales.clone()
    }
}

pub fn load(path: &Path) -> crate::Result<Config> {
    let contents = fs::read_to_string(path)
        .map_err(|e| config_error(format!("failed to read {}: {e}", path.display())))?;
    toml::from_str(&contents)
        .map_err(|e| config_error(format!("failed to parse {}: {e}", path.display())))
}

pub fn load_or_init(path: &Path) -> Config {
    if path.exists() {
        match load(path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                tracing::warn!("config load failed, using defaults: {e}");
                return Config::default();
            }
        }
    }

    let cfg = Config::default();
    if let Err(e) = write_config(path, &cfg) {
        tracing::warn!("failed to write default config: {e}");
    }
    cfg
}

pub fn write_config(path: &Path, cfg: &Config) -> crate::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| config_error(format!("failed to create {}: {e}", dir.display())))?;
    }
    let contents = toml::to_string_pretty(cfg)
        .map_err(|e| config_error(format!("failed to render config: {e}")))?;
    atomic_write(path, contents.as_bytes())
}

fn atomic_write(path: &Path, data: &[u8]) -> crate::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| config_error("config path missing parent directory".to_string()))?;
    let temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        config_error(format!(
            "failed to create temp file in {}: {e}",
            dir.display()
        ))
    })?;
    fs::write(temp.path(), data)
        .map_err(|e| config_error(format!("failed to write config temp file: {e}")))?;
    temp.persist(path).map_err(|e| {
        config_error(format!(
            "failed to persist config to {}: {e}",
            path.display()
        ))
    })?;
    Ok(())
}

fn config_error(reason: String) -> crate::Error {
    crate::Error::Config(ConfigError { reason })
}
