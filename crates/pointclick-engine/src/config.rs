//! Engine configuration.
//!
//! Viewport, logging, data file locations and the inventory screen layout.
//! Configuration can be loaded from and saved to a TOML file.

use pointclick_gui::ScreenConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Configuration file name.
pub const CONFIG_FILE: &str = "pointclick.toml";

/// Engine configuration parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === Viewport ===
    /// Game viewport width in pixels
    pub viewport_width: i32,
    /// Game viewport height in pixels
    pub viewport_height: i32,

    // === Logging ===
    /// Default log directive, overridden by `RUST_LOG`
    pub log_filter: String,

    // === Data ===
    /// Game data file (items, sprites, characters, interactions)
    pub game_data: PathBuf,
    /// Input session replayed through the inventory screen
    pub session: PathBuf,

    // === Inventory screen ===
    /// Legacy inventory screen layout
    pub screen: ScreenConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            viewport_width: 320,
            viewport_height: 200,
            log_filter: "pointclick=info".to_string(),
            game_data: PathBuf::from("data/game.toml"),
            session: PathBuf::from("data/session.toml"),
            screen: ScreenConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read config file: {e}");
                return Self::default();
            },
        };

        match toml::from_str::<Self>(&contents) {
            Ok(mut config) => {
                config.validate();
                info!("Loaded config from {}", path.display());
                config
            },
            Err(e) => {
                warn!("Failed to parse config file: {e}");
                Self::default()
            },
        }
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, contents)?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate and clamp configuration values to sensible ranges.
    pub fn validate(&mut self) {
        self.viewport_width = self.viewport_width.clamp(160, 7680);
        self.viewport_height = self.viewport_height.clamp(100, 4320);
        self.screen.validate();
    }

    /// Resolves a data path relative to the directory holding the config file.
    #[must_use]
    pub fn resolve(config_path: &Path, data_path: &Path) -> PathBuf {
        if data_path.is_absolute() {
            return data_path.to_path_buf();
        }
        config_path
            .parent()
            .map_or_else(|| data_path.to_path_buf(), |dir| dir.join(data_path))
    }

    /// Builds the log filter. A non-empty `from_env` (the value of `RUST_LOG`)
    /// replaces `log_filter` entirely.
    pub fn env_filter(&self, from_env: Option<&str>) -> Result<EnvFilter, ParseError> {
        match from_env.map(str::trim).filter(|directives| !directives.is_empty()) {
            Some(directives) => EnvFilter::try_new(directives),
            None => EnvFilter::try_new(&self.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.viewport_width, 320);
        assert_eq!(config.viewport_height, 200);
        assert_eq!(config.screen, ScreenConfig::default());
    }

    #[test]
    fn test_config_validation() {
        let mut config = EngineConfig::default();
        config.viewport_width = 10;
        config.screen.icons_per_row = 0;

        config.validate();

        assert_eq!(config.viewport_width, 160);
        assert_eq!(config.screen.icons_per_row, 1);
    }

    #[test]
    fn test_config_save_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("test_config.toml");

        let mut config = EngineConfig::default();
        config.viewport_height = 480;
        config.screen.pixel_scale = 2;
        config.session = PathBuf::from("sessions/look.toml");

        config.save_to(&config_path).expect("Failed to save config");

        let loaded = EngineConfig::load_from(&config_path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_load_missing_file() {
        let config = EngineConfig::load_from("/nonexistent/path/config.toml");
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_config_load_invalid_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "viewport_width = \"wide\"").expect("Failed to write");

        let config = EngineConfig::load_from(&config_path);
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: EngineConfig = toml::from_str(
            r#"
            viewport_height = 400

            [screen]
            margin = 10
            "#,
        )
        .expect("Failed to parse");

        assert_eq!(config.viewport_height, 400);
        assert_eq!(config.viewport_width, 320);
        assert_eq!(config.screen.margin, 10);
        assert_eq!(config.screen.icons_per_row, 4);
    }

    #[test]
    fn test_resolve_relative_to_config() {
        let resolved = EngineConfig::resolve(Path::new("game/pointclick.toml"), Path::new("data/game.toml"));
        assert_eq!(resolved, PathBuf::from("game/data/game.toml"));

        let absolute = EngineConfig::resolve(Path::new("game/pointclick.toml"), Path::new("/srv/game.toml"));
        assert_eq!(absolute, PathBuf::from("/srv/game.toml"));
    }

    #[test]
    fn test_env_filter_prefers_rust_log() {
        let config = EngineConfig::default();

        let from_env = config
            .env_filter(Some("pointclick=debug"))
            .expect("Failed to build filter");
        assert_eq!(from_env.to_string(), "pointclick=debug");
        assert_eq!(from_env.max_level_hint(), Some(LevelFilter::DEBUG));

        let fallback = config.env_filter(None).expect("Failed to build filter");
        assert_eq!(fallback.to_string(), "pointclick=info");
        assert_eq!(fallback.max_level_hint(), Some(LevelFilter::INFO));

        // An empty RUST_LOG counts as unset
        let blank = config.env_filter(Some("  ")).expect("Failed to build filter");
        assert_eq!(blank.to_string(), "pointclick=info");
    }

    #[test]
    fn test_env_filter_rejects_bad_directive() {
        let mut config = EngineConfig::default();
        config.log_filter = "pointclick=loud".to_string();
        assert!(config.env_filter(None).is_err());
    }
}
