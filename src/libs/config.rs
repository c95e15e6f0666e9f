//! Application configuration.
//!
//! Tracker data lives in the document store; `config.json` keeps the
//! per-machine preferences that are not part of an export, currently the
//! timer durations. A missing file means defaults, so dtrack runs without
//! any setup. `dtrack init` walks through the values interactively.

use super::data_storage::DataStorage;
use super::timer::TimerPrefs;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerPrefs,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    pub fn read_from(config_file_path: &Path) -> Result<Config> {
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Like [`Config::read`] but a broken file falls back to defaults.
    pub fn read_or_default() -> Config {
        Self::read().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to read configuration, using defaults");
            Config::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, config_file_path: &Path) -> Result<()> {
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.timer.clone();

        msg_print!(Message::ConfigModuleTimer);
        let mut timer = TimerPrefs::default();
        timer.set_custom_minutes(
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCustomMinutes.to_string())
                .default(default.custom_minutes as i64)
                .interact_text()?,
        );
        timer.set_focus_minutes(
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptFocusMinutes.to_string())
                .default(default.focus_minutes as i64)
                .interact_text()?,
        );
        timer.set_short_break_minutes(
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptShortBreakMinutes.to_string())
                .default(default.short_break_minutes as i64)
                .interact_text()?,
        );
        timer.set_long_break_minutes(
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptLongBreakMinutes.to_string())
                .default(default.long_break_minutes as i64)
                .interact_text()?,
        );
        timer.set_cycle_every(
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCycleEvery.to_string())
                .default(default.cycle_every as i64)
                .interact_text()?,
        );
        config.timer = timer;

        Ok(config)
    }
}
