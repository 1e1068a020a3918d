use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use directories::BaseDirs;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const CONFIG_FILE: &str = "codexweb.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid base_url {url:?}: {source}")]
    InvalidUrl { url: String, source: url::ParseError },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_string() }
    }
}

impl AppConfig {
    fn config_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.config_dir().join(CONFIG_FILE))
    }

    /// Reads the user config if present. Anything unusable falls back to the default.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let raw: AppConfig = toml::from_str(text)?;
        let base_url = crate::utils::normalize_url(&raw.base_url);
        url::Url::parse(&base_url).map_err(|source| ConfigError::InvalidUrl {
            url: base_url.clone(),
            source,
        })?;
        Ok(Self { base_url })
    }
}

#[cfg(feature = "gui")]
pub fn build_ui(app: &adw::Application) {
    let config = AppConfig::load();
    log::info!("agent endpoint: {}", config.base_url);
    crate::ui::main_window::show_main_window(app, &config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(AppConfig::default().base_url, "http://localhost:8000");
    }

    #[test]
    fn parse_normalizes_base_url() {
        let cfg = AppConfig::parse("base_url = \"agent.example.com/\"\n").unwrap();
        assert_eq!(cfg.base_url, "https://agent.example.com");
    }

    #[test]
    fn parse_keeps_explicit_scheme() {
        let cfg = AppConfig::parse("base_url = \"http://10.0.0.2:8000\"").unwrap();
        assert_eq!(cfg.base_url, "http://10.0.0.2:8000");
    }

    #[test]
    fn missing_key_is_a_parse_error() {
        assert!(matches!(AppConfig::parse("url = \"x\""), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn bad_url_is_rejected() {
        assert!(matches!(
            AppConfig::parse("base_url = \"http://exa mple.com\""),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn load_from_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"https://codex.example.org\"").unwrap();
        let cfg = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(cfg.base_url, "https://codex.example.org");
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
