//! Application configuration.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! directory resolved by [`DataStorage`]. A missing file is not an error: the
//! defaults below apply until `hourly init` writes one.
//!
//! ## Structure
//!
//! ```json
//! {
//!   "account_id": "local",
//!   "currency": "€",
//!   "strict_durations": false,
//!   "report": { "title": "Informe de Horas Laborales", "subtitle": null },
//!   "export_dir": null
//! }
//! ```
//!
//! Every field has a serde default, so files written by older versions keep
//! loading after new settings are added.

use super::data_storage::DataStorage;
use crate::libs::entry::DurationPolicy;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_ACCOUNT_ID: &str = "local";
pub const DEFAULT_CURRENCY: &str = "€";
pub const DEFAULT_REPORT_TITLE: &str = "Informe de Horas Laborales";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    #[serde(default = "default_report_title")]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            title: default_report_title(),
            subtitle: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Tenant every project and entry is scoped to.
    #[serde(default = "default_account_id")]
    pub account_id: String,

    #[serde(default = "default_currency")]
    pub currency: String,

    /// Reject entries whose supplied duration disagrees with their clock times.
    #[serde(default)]
    pub strict_durations: bool,

    #[serde(default)]
    pub report: ReportConfig,

    /// Where exports go when no output path is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

fn default_account_id() -> String {
    DEFAULT_ACCOUNT_ID.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_report_title() -> String {
    DEFAULT_REPORT_TITLE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            account_id: default_account_id(),
            currency: default_currency(),
            strict_durations: false,
            report: ReportConfig::default(),
            export_dir: None,
        }
    }
}

impl Config {
    /// Reads the configuration from the data directory, falling back to defaults.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn duration_policy(&self) -> DurationPolicy {
        DurationPolicy::from_strict(self.strict_durations)
    }

    /// Interactive setup wizard; current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigModuleGeneral);
        let account_id: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptAccountId.to_string())
            .default(current.account_id.clone())
            .interact_text()?;
        let currency: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptCurrency.to_string())
            .default(current.currency.clone())
            .interact_text()?;
        let strict_durations = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptStrictDurations.to_string())
            .default(current.strict_durations)
            .interact()?;

        msg_print!(Message::ConfigModuleReport);
        let title: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptReportTitle.to_string())
            .default(current.report.title.clone())
            .interact_text()?;
        let subtitle: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptReportSubtitle.to_string())
            .default(current.report.subtitle.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        let export_dir: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptExportDir.to_string())
            .default(
                current
                    .export_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            )
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            account_id: account_id.trim().to_string(),
            currency: currency.trim().to_string(),
            strict_durations,
            report: ReportConfig {
                title,
                subtitle: Some(subtitle).filter(|s| !s.trim().is_empty()),
            },
            export_dir: Some(export_dir).filter(|d| !d.trim().is_empty()).map(PathBuf::from),
        })
    }
}
