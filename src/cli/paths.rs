//! Default paths and configuration directory management

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the configuration directory for libautomata
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("libautomata"))
}

/// Get the default config file path
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the REPL history file path
pub fn history_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("history.txt"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            Ok(path.to_path_buf())
        }
        None => config_file_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

/// User configuration stored in config file
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PersistentConfig {
    /// Exercise used when none is given on the command line
    #[serde(default)]
    pub default_exercise: Option<String>,
    /// Print a step-by-step trace after each run
    #[serde(default)]
    pub show_trace: Option<bool>,
}

impl PersistentConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from custom path
    ///
    /// A missing file yields the default configuration.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(None)
    }

    /// Save configuration to custom path
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<()> {
        let path = config_file_path_with_override(custom_path)?;
        ensure_parent(&path)?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, exercise: Option<String>, show_trace: Option<bool>) -> Self {
        Self {
            default_exercise: exercise.or_else(|| self.default_exercise.clone()),
            show_trace: show_trace.or(self.show_trace),
        }
    }

    /// The exercise to use, falling back to the first catalog entry
    pub fn exercise_or_default(&self) -> &str {
        match &self.default_exercise {
            Some(id) => id,
            None => crate::catalog::catalog()
                .first()
                .map(|e| e.id)
                .unwrap_or_default(),
        }
    }

    /// Whether traces are shown
    pub fn trace_enabled(&self) -> bool {
        self.show_trace.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = PersistentConfig {
            default_exercise: Some("abc".to_string()),
            show_trace: Some(true),
        };
        config.save_to(Some(&path)).unwrap();

        let loaded = PersistentConfig::load_from(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let loaded = PersistentConfig::load_from(Some(&path)).unwrap();
        assert_eq!(loaded, PersistentConfig::default());
        assert_eq!(loaded.exercise_or_default(), "l1");
        assert!(!loaded.trace_enabled());
    }

    #[test]
    fn test_rejects_non_json_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        assert!(PersistentConfig::load_from(Some(&path)).is_err());
    }

    #[test]
    fn test_merge_prefers_cli() {
        let stored = PersistentConfig {
            default_exercise: Some("l1".to_string()),
            show_trace: Some(false),
        };
        let merged = stored.merge_with_cli(Some("abc".to_string()), None);
        assert_eq!(merged.default_exercise.as_deref(), Some("abc"));
        assert_eq!(merged.show_trace, Some(false));
    }
}
