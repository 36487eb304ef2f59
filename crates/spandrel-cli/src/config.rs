//! Configuration file loading.
//!
//! An explicit `--config` path wins; otherwise the user configuration
//! directory is probed for `spandrel.toml`; otherwise defaults apply.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use log::{debug, info};

use spandrel::{SpandrelError, config::AppConfig};

/// Loads the application configuration.
///
/// # Errors
///
/// Returns [`SpandrelError`] when an explicitly given file cannot be read or
/// any configuration file fails to parse. A missing default file is not an
/// error.
pub fn load_config(explicit_path: Option<&String>) -> Result<AppConfig, SpandrelError> {
    let path = match explicit_path {
        Some(path) => PathBuf::from(path),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                debug!("No configuration file, using defaults");
                return Ok(AppConfig::default());
            }
        },
    };

    info!(path:display = path.display(); "Loading configuration");
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content)
        .map_err(|err| SpandrelError::Config(format!("{}: {err}", path.display())))
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "spandrel")
        .map(|dirs| dirs.config_dir().join("spandrel.toml"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_missing_default_is_fine() {
        // No explicit path: defaults come back even on machines without a
        // config directory.
        let config = load_config(None).unwrap();
        assert_eq!(config.drawing().scale, 1.0);
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[drawing]\nscale = 2.5\n[proportions]\nbatter = 8.0").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.drawing().scale, 2.5);
        assert_eq!(config.proportions().batter, 8.0);
        assert_eq!(config.proportions().cable_sag_ratio, 0.3);
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let path = "/nonexistent/spandrel.toml".to_string();
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_malformed_file_reports_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "drawing = \"not a table\"").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, SpandrelError::Config(_)));
    }
}
