use std::net::SocketAddr;
use std::path::Path;

use crate::error::ConfigError;
use crate::leaderboard::LeaderboardConfig;
use crate::web::ServerConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub leaderboard: LeaderboardConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "server.bind must be a socket address, got '{}'",
                self.server.bind
            )));
        }
        if self.server.assets_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "server.assets_dir must not be empty".into(),
            ));
        }
        if self.leaderboard.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "leaderboard.path must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.server.bind, "127.0.0.1:8000");
        assert_eq!(config.leaderboard.path, PathBuf::from("leaderboard.txt"));
        assert_eq!(config.server.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[server]
bind = "0.0.0.0:9000"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        // Other fields should be defaults
        assert_eq!(config.server.assets_dir, PathBuf::from("assets"));
        assert_eq!(config.leaderboard.path, PathBuf::from("leaderboard.txt"));
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.server.bind, default.server.bind);
        assert_eq!(config.leaderboard.path, default.leaderboard.path);
    }

    #[test]
    fn test_validation_rejects_bad_bind() {
        let mut config = AppConfig::default();
        config.server.bind = "localhost".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_leaderboard_path() {
        let mut config = AppConfig::default();
        config.leaderboard.path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_assets_dir() {
        let mut config = AppConfig::default();
        config.server.assets_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:8000");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[leaderboard]
path = "scores.json"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.leaderboard.path, PathBuf::from("scores.json"));
        // Others are defaults
        assert_eq!(config.server.bind, "127.0.0.1:8000");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[server]\nbind = \"nowhere\"\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)), "got: {err}");
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
