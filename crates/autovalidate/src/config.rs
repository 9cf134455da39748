// File: src/config.rs
// Purpose: Settings parsing from autovalidate.toml

use anyhow::{Context, Result};
use autovalidate_core::WalkOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Presentation and submit settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Form attribute selecting how messages are shown ("container" or "alert")
    #[serde(default = "default_validation_attribute")]
    pub validation_message_attribute: String,

    #[serde(default = "default_validation_message_type")]
    pub default_validation_message_type: String,

    /// Class of the shared message container inside the form
    #[serde(default = "default_validation_message_container_class")]
    pub validation_message_container_class: String,

    /// Form attribute naming the callback to run once validation passes
    #[serde(default = "default_validation_callback_attribute")]
    pub validation_callback_attribute: String,

    #[serde(default = "default_callback_function")]
    pub default_callback_function: String,

    #[serde(default = "default_true")]
    pub add_error_class: bool,

    #[serde(default = "default_general_error_message")]
    pub general_error_message: String,

    /// Element attribute naming the rule to apply
    #[serde(default = "default_validation_attribute")]
    pub rule_attribute: String,

    #[serde(default = "default_optional_class")]
    pub optional_class: String,

    #[serde(default = "default_error_class")]
    pub error_class: String,

    /// Form class that turns error classes off for that form
    #[serde(default = "default_no_error_class")]
    pub no_error_class: String,

    #[serde(default = "default_custom_error_container_class")]
    pub custom_error_container_class: String,
}

// Default values
fn default_validation_attribute() -> String {
    "data-validation".to_string()
}

fn default_validation_message_type() -> String {
    "container".to_string()
}

fn default_validation_message_container_class() -> String {
    "validationMessages".to_string()
}

fn default_validation_callback_attribute() -> String {
    "data-validation-callback".to_string()
}

fn default_callback_function() -> String {
    "submit".to_string()
}

fn default_general_error_message() -> String {
    "Please correct your input".to_string()
}

fn default_optional_class() -> String {
    "optional".to_string()
}

fn default_error_class() -> String {
    "error".to_string()
}

fn default_no_error_class() -> String {
    "noErrorClass".to_string()
}

fn default_custom_error_container_class() -> String {
    "customErrorContainer".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            validation_message_attribute: default_validation_attribute(),
            default_validation_message_type: default_validation_message_type(),
            validation_message_container_class: default_validation_message_container_class(),
            validation_callback_attribute: default_validation_callback_attribute(),
            default_callback_function: default_callback_function(),
            add_error_class: true,
            general_error_message: default_general_error_message(),
            rule_attribute: default_validation_attribute(),
            optional_class: default_optional_class(),
            error_class: default_error_class(),
            no_error_class: default_no_error_class(),
            custom_error_container_class: default_custom_error_container_class(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {:?}", path))?;

        Ok(settings)
    }

    /// Load settings from the default path (./autovalidate.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("autovalidate.toml")
    }

    /// Walker options matching these settings
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            rule_attribute: self.rule_attribute.clone(),
            optional_class: self.optional_class.clone(),
        }
    }
}
