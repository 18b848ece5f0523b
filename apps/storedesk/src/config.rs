//! # Desk Configuration
//!
//! Page sizes, simulated latencies and export settings.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                            │
//! │     STOREDESK_ORDERS_PAGE_SIZE=10                                       │
//! │     STOREDESK_EXPORT_DIALECT=rfc4180                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                    │
//! │     ~/.config/storedesk/storedesk.toml (Linux)                          │
//! │     ~/Library/Application Support/com.storedesk.storedesk/... (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! │     orders 6 / products 7 per page, 300 ms load, 1000 ms refresh        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [orders]
//! page_size = 6
//!
//! [products]
//! page_size = 7
//!
//! [timing]
//! load_ms = 300
//! refresh_ms = 1000
//! export_ms = 0
//!
//! [export]
//! directory = "/home/me/Downloads"
//! dialect = "verbatim"  # verbatim | rfc4180
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use storedesk_core::export::CsvDialect;
use storedesk_core::{ORDERS_PER_PAGE, PRODUCTS_PER_PAGE};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

/// Name of the config file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "storedesk.toml";

// =============================================================================
// List Settings
// =============================================================================

/// Per-list settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSettings {
    pub page_size: usize,
}

impl ListSettings {
    fn orders() -> Self {
        ListSettings {
            page_size: ORDERS_PER_PAGE,
        }
    }

    fn products() -> Self {
        ListSettings {
            page_size: PRODUCTS_PER_PAGE,
        }
    }
}

fn default_orders() -> ListSettings {
    ListSettings::orders()
}

fn default_products() -> ListSettings {
    ListSettings::products()
}

// =============================================================================
// Timing Settings
// =============================================================================

/// Simulated latencies, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingSettings {
    /// Initial record load.
    #[serde(default = "default_load_ms")]
    pub load_ms: u64,

    /// Delay before a refresh reports completion.
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,

    /// Delay before an export is delivered.
    #[serde(default)]
    pub export_ms: u64,
}

fn default_load_ms() -> u64 {
    300
}

fn default_refresh_ms() -> u64 {
    1000
}

impl Default for TimingSettings {
    fn default() -> Self {
        TimingSettings {
            load_ms: default_load_ms(),
            refresh_ms: default_refresh_ms(),
            export_ms: 0,
        }
    }
}

impl TimingSettings {
    pub fn load(&self) -> Duration {
        Duration::from_millis(self.load_ms)
    }

    pub fn refresh(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }

    pub fn export(&self) -> Duration {
        Duration::from_millis(self.export_ms)
    }
}

// =============================================================================
// Export Settings
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Where exported files land. Falls back to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    #[serde(default)]
    pub dialect: CsvDialect,
}

pub(crate) fn parse_dialect(raw: &str) -> Option<CsvDialect> {
    match raw.to_lowercase().as_str() {
        "verbatim" => Some(CsvDialect::Verbatim),
        "rfc4180" | "escaped" => Some(CsvDialect::Rfc4180),
        _ => None,
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete desk configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskConfig {
    #[serde(default = "default_orders")]
    pub orders: ListSettings,

    #[serde(default = "default_products")]
    pub products: ListSettings,

    #[serde(default)]
    pub timing: TimingSettings,

    #[serde(default)]
    pub export: ExportSettings,
}

impl Default for DeskConfig {
    fn default() -> Self {
        DeskConfig {
            orders: ListSettings::orders(),
            products: ListSettings::products(),
            timing: TimingSettings::default(),
            export: ExportSettings::default(),
        }
    }
}

impl DeskConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storedesk.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> AppResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(AppError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.orders.page_size == 0 {
            return Err(AppError::InvalidConfig(
                "orders.page_size must be greater than 0".into(),
            ));
        }
        if self.products.page_size == 0 {
            return Err(AppError::InvalidConfig(
                "products.page_size must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Applies `STOREDESK_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup. Unparseable values are logged
    /// and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |key: &str| -> Option<u64> {
            let raw = lookup(key)?;
            match raw.trim().parse::<u64>() {
                Ok(n) => Some(n),
                Err(_) => {
                    warn!(key, value = %raw, "Ignoring non-numeric override");
                    None
                }
            }
        };

        if let Some(n) = number("STOREDESK_ORDERS_PAGE_SIZE") {
            debug!(page_size = n, "Overriding orders page size from environment");
            self.orders.page_size = n as usize;
        }
        if let Some(n) = number("STOREDESK_PRODUCTS_PAGE_SIZE") {
            debug!(page_size = n, "Overriding products page size from environment");
            self.products.page_size = n as usize;
        }
        if let Some(n) = number("STOREDESK_LOAD_MS") {
            self.timing.load_ms = n;
        }
        if let Some(n) = number("STOREDESK_REFRESH_MS") {
            self.timing.refresh_ms = n;
        }
        if let Some(n) = number("STOREDESK_EXPORT_MS") {
            self.timing.export_ms = n;
        }

        if let Some(dir) = lookup("STOREDESK_EXPORT_DIR") {
            debug!(dir = %dir, "Overriding export directory from environment");
            self.export.directory = Some(PathBuf::from(dir));
        }

        if let Some(raw) = lookup("STOREDESK_EXPORT_DIALECT") {
            match parse_dialect(&raw) {
                Some(dialect) => self.export.dialect = dialect,
                None => warn!(dialect = %raw, "Unknown export dialect in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storedesk", "storedesk")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Directory exports are written to.
    ///
    /// The configured directory, else `<data dir>/exports`, else the working
    /// directory.
    pub fn export_dir(&self) -> PathBuf {
        if let Some(dir) = &self.export.directory {
            return dir.clone();
        }
        directories::ProjectDirs::from("com", "storedesk", "storedesk")
            .map(|dirs| dirs.data_dir().join("exports"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = DeskConfig::default();
        assert_eq!(config.orders.page_size, 6);
        assert_eq!(config.products.page_size, 7);
        assert_eq!(config.timing.refresh(), Duration::from_millis(1000));
        assert_eq!(config.export.dialect, CsvDialect::Verbatim);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: DeskConfig = toml::from_str(
            r#"
            [orders]
            page_size = 10

            [export]
            dialect = "rfc4180"
            "#,
        )
        .unwrap();
        assert_eq!(config.orders.page_size, 10);
        assert_eq!(config.products.page_size, 7);
        assert_eq!(config.timing.load_ms, 300);
        assert_eq!(config.export.dialect, CsvDialect::Rfc4180);
    }

    #[test]
    fn test_zero_page_size_is_invalid() {
        let mut config = DeskConfig::default();
        config.products.page_size = 0;
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("STOREDESK_ORDERS_PAGE_SIZE", "12"),
            ("STOREDESK_REFRESH_MS", "oops"),
            ("STOREDESK_EXPORT_DIR", "/tmp/exports"),
            ("STOREDESK_EXPORT_DIALECT", "RFC4180"),
        ]
        .into_iter()
        .collect();

        let mut config = DeskConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.orders.page_size, 12);
        assert_eq!(config.timing.refresh_ms, 1000);
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/exports"));
        assert_eq!(config.export.dialect, CsvDialect::Rfc4180);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = DeskConfig::default();
        config.orders.page_size = 9;
        config.timing.export_ms = 250;
        config.save(Some(path.clone())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[orders]"));
        assert!(contents.contains("[timing]"));

        let loaded: DeskConfig = toml::from_str(&contents).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[orders\npage_size = ").unwrap();
        assert!(matches!(
            DeskConfig::load(Some(path)),
            Err(AppError::ConfigParse(_))
        ));
    }
}
