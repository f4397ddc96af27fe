use crate::core::currency::CurrencyCode;
use crate::providers::simulated::{DEFAULT_DELAY, DEFAULT_VOLATILITY};
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Source currency when none is given on the command line
    pub from: CurrencyCode,
    /// Target currency when none is given on the command line
    pub to: CurrencyCode,
    /// Fetch jittered rates instead of the static table
    pub live: bool,
    pub fetch_delay_ms: u64,
    pub volatility: f64,
    pub data_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            from: CurrencyCode::USD,
            to: CurrencyCode::EUR,
            live: false,
            fetch_delay_ms: DEFAULT_DELAY.as_millis() as u64,
            volatility: DEFAULT_VOLATILITY,
            data_path: None,
        }
    }
}

impl AppConfig {
    /// Loads the config at the default path, or defaults when there is none.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "zenith", "zenith")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn default_data_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs = ProjectDirs::from("dev", "zenith", "zenith")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Live rates stay positive only while `volatility` is in `[0, 1)`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.volatility) {
            bail!(
                "volatility must be at least 0 and below 1, got {}",
                self.volatility
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
from: "GBP"
to: "INR"
live: true
fetch_delay_ms: 0
volatility: 0.01
data_path: "/tmp/zenith"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.from, CurrencyCode::GBP);
        assert_eq!(config.to, CurrencyCode::INR);
        assert!(config.live);
        assert_eq!(config.fetch_delay_ms, 0);
        assert_eq!(config.volatility, 0.01);
        assert_eq!(config.data_path.as_deref(), Some("/tmp/zenith"));
        assert_eq!(
            config.default_data_path().unwrap(),
            PathBuf::from("/tmp/zenith")
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_yaml::from_str("to: JPY").unwrap();
        assert_eq!(config.from, CurrencyCode::USD);
        assert_eq!(config.to, CurrencyCode::JPY);
        assert!(!config.live);
        assert_eq!(config.fetch_delay_ms, 600);
        assert_eq!(config.volatility, 0.005);
        assert!(config.data_path.is_none());
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let result: Result<AppConfig, _> = serde_yaml::from_str("from: XYZ");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_volatility_is_rejected() {
        for bad in ["2.0", "1.0", "-0.01", ".nan", ".inf"] {
            let config: AppConfig =
                serde_yaml::from_str(&format!("volatility: {bad}")).unwrap();
            assert!(config.validate().is_err(), "accepted volatility {bad}");
        }
    }

    #[test]
    fn test_load_rejects_bad_volatility() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "volatility: 2.0\n").unwrap();

        let err = AppConfig::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
        assert!(format!("{err:#}").contains("volatility must be"));
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_from_path(dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
