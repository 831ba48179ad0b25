// PlacePrep - platform/config.rs
//
// Platform-specific directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for PlacePrep data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/placeprep/ or %APPDATA%\PlacePrep\config\)
    pub config_dir: PathBuf,

    /// Data directory holding the saved history.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so a newer config file still loads in
/// an older binary.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[storage]` section.
    pub storage: StorageSection,
    /// `[analysis]` section.
    pub analysis: AnalysisSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[storage]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct StorageSection {
    /// Override for the directory holding `placement_history.json`.
    pub data_dir: Option<String>,
}

/// `[analysis]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct AnalysisSection {
    /// JDs shorter than this many characters produce a warning (0 = never).
    pub short_jd_warning_chars: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Data directory override. `None` uses the platform data dir.
    pub data_dir: Option<PathBuf>,

    /// Threshold for the short-JD warning.
    pub short_jd_warning_chars: usize,

    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,

    /// Log file path.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            short_jd_warning_chars: constants::DEFAULT_SHORT_JD_WARNING_CHARS,
            log_level: None,
            log_file: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file yields defaults with no warnings (first run). An unreadable
/// or unparseable file yields defaults plus one warning.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path,
                source: e,
            };
            tracing::warn!(error = %err, "Could not read config file");
            return (AppConfig::default(), vec![format!("{err}. Using defaults.")]);
        }
    };

    let (config, warnings) = parse_config(&content, &config_path);
    if warnings.is_empty() {
        tracing::info!(path = %config_path.display(), "Loaded config.toml");
    } else {
        tracing::warn!(
            path = %config_path.display(),
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }
    (config, warnings)
}

/// Parse and validate config.toml content. `path` is only used in messages.
pub fn parse_config(content: &str, path: &Path) -> (AppConfig, Vec<String>) {
    let raw: RawConfig = match toml::from_str(content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: path.to_path_buf(),
                source: e,
            };
            return (AppConfig::default(), vec![format!("{err}. Using defaults.")]);
        }
    };

    // Validate each field against named constants, accumulating all problems.
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- Storage: data_dir --
    if let Some(ref dir) = raw.storage.data_dir {
        let trimmed = dir.trim();
        if !trimmed.is_empty() {
            config.data_dir = Some(PathBuf::from(trimmed));
        }
    }

    // -- Analysis: short_jd_warning_chars --
    if let Some(chars) = raw.analysis.short_jd_warning_chars {
        if chars <= constants::MAX_SHORT_JD_WARNING_CHARS {
            config.short_jd_warning_chars = chars;
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "[analysis] short_jd_warning_chars".to_string(),
                value: chars.to_string(),
                expected: format!("0-{}", constants::MAX_SHORT_JD_WARNING_CHARS),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_SHORT_JD_WARNING_CHARS
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "[logging] level".to_string(),
                value: level.clone(),
                expected: valid.join(", "),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_LOG_LEVEL
            ));
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file.clone());
        }
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(content: &str) -> (AppConfig, Vec<String>) {
        parse_config(content, Path::new("config.toml"))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_config_applied() {
        let (config, warnings) = parse(
            r#"
            [storage]
            data_dir = "/srv/placeprep"

            [analysis]
            short_jd_warning_chars = 500

            [logging]
            level = "DEBUG"
            file = "/tmp/placeprep.log"
            "#,
        );
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/placeprep")));
        assert_eq!(config.short_jd_warning_chars, 500);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file.as_deref(), Some("/tmp/placeprep.log"));
    }

    #[test]
    fn test_out_of_range_values_fall_back_with_warnings() {
        let (config, warnings) = parse(
            r#"
            [analysis]
            short_jd_warning_chars = 999999

            [logging]
            level = "verbose"
            "#,
        );
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("short_jd_warning_chars"));
        assert!(warnings[1].contains("verbose"));
        assert_eq!(
            config.short_jd_warning_chars,
            constants::DEFAULT_SHORT_JD_WARNING_CHARS
        );
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_unparseable_file_warns_and_uses_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.toml"), "[analysis\nnope").unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
    }

    #[test]
    fn test_unknown_keys_ignored_and_blank_values_skipped() {
        let (config, warnings) = parse(
            r#"
            [storage]
            data_dir = "   "

            [future]
            flag = true

            [logging]
            file = ""
            "#,
        );
        assert!(warnings.is_empty());
        assert_eq!(config, AppConfig::default());
    }
}
