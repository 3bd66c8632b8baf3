use serde::{Deserialize, Serialize};

/// Top-level application settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppSettings {
    pub appearance: AppearanceSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

/// Visual appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppearanceSettings {
    pub theme: ThemeMode,
}

/// Color scheme preference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

/// Where the web app table lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StorageSettings {
    /// Overrides `<data_dir>/smartweb.db` when set.
    pub database_path: Option<String>,
}

/// Log filter used when `RUST_LOG` is not set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "smartweb=info".to_string(),
        }
    }
}
