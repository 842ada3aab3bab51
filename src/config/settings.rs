//! User settings for FinTrack
//!
//! Display preferences, completion timer delays, the weekly expense reminder
//! and logging options. Settings are the only thing FinTrack reads from or
//! writes to disk.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::paths::FinTrackPaths;
use crate::error::FinTrackError;
use crate::reminders::ReminderSchedule;

/// Delays used by the goal completion scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerSettings {
    /// Delay between completing a goal and announcing it
    #[serde(default = "default_notify_delay_ms")]
    pub notify_delay_ms: u64,

    /// Delay between the announcement and removing the goal
    #[serde(default = "default_auto_delete_delay_ms")]
    pub auto_delete_delay_ms: u64,
}

fn default_notify_delay_ms() -> u64 {
    500
}

fn default_auto_delete_delay_ms() -> u64 {
    5000
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            notify_delay_ms: default_notify_delay_ms(),
            auto_delete_delay_ms: default_auto_delete_delay_ms(),
        }
    }
}

impl SchedulerSettings {
    pub fn notify_delay(&self) -> Duration {
        Duration::from_millis(self.notify_delay_ms)
    }

    pub fn auto_delete_delay(&self) -> Duration {
        Duration::from_millis(self.auto_delete_delay_ms)
    }
}

/// User settings for FinTrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default)]
    pub scheduler: SchedulerSettings,

    /// Weekly reminder to log expenses
    #[serde(default)]
    pub reminders: ReminderSchedule,

    /// Default `tracing` filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Mirror audit entries to the audit log file
    #[serde(default)]
    pub audit_log: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

fn default_log_filter() -> String {
    "fintrack=warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            scheduler: SchedulerSettings::default(),
            reminders: ReminderSchedule::default(),
            log_filter: default_log_filter(),
            audit_log: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinTrackPaths) -> Result<Self, FinTrackError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinTrackError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinTrackError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinTrackPaths) -> Result<(), FinTrackError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinTrackError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FinTrackError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.scheduler.notify_delay(), Duration::from_millis(500));
        assert_eq!(
            settings.scheduler.auto_delete_delay(),
            Duration::from_millis(5000)
        );
        assert!(!settings.reminders.enabled);
        assert!(!settings.audit_log);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinTrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.scheduler.auto_delete_delay_ms = 1000;
        settings.reminders.enabled = true;
        settings.reminders.day = Weekday::Fri;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinTrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"scheduler": {"notify_delay_ms": 100}}"#).unwrap();
        assert_eq!(settings.scheduler.notify_delay_ms, 100);
        assert_eq!(settings.scheduler.auto_delete_delay_ms, 5000);
        assert_eq!(settings.currency_symbol, "₹");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinTrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinTrackError::Config(_)));
    }
}
