//! Настройки приложения: категории, значения и их мутация.
//!
//! `Setting::set_value` намеренно не проверяет тип: значение записывается
//! как есть, даже если оно не совпадает с `kind` или отсутствует в `options`.
//! Строгий вариант: `Setting::try_set_value`.

use crate::shared::logger::LogEntry;
use crate::shared::validation::DataError;
use serde::{Deserialize, Serialize};
use std::fmt;

const LOG_SOURCE: &str = "settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Boolean,
    Text,
    Number,
    Select,
}

impl SettingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKind::Boolean => "boolean",
            SettingKind::Text => "text",
            SettingKind::Number => "number",
            SettingKind::Select => "select",
        }
    }
}

/// Runtime value of a setting. `Null` is the "cleared" value the unchecked
/// mutator accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Null,
}

impl SettingValue {
    pub fn matches_kind(&self, kind: SettingKind) -> bool {
        matches!(
            (self, kind),
            (SettingValue::Bool(_), SettingKind::Boolean)
                | (SettingValue::Number(_), SettingKind::Number)
                | (SettingValue::Text(_), SettingKind::Text)
                | (SettingValue::Text(_), SettingKind::Select)
        )
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            SettingValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(b) => write!(f, "{b}"),
            SettingValue::Number(n) => write!(f, "{n}"),
            SettingValue::Text(s) => write!(f, "{s}"),
            SettingValue::Null => f.write_str("null"),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        SettingValue::Bool(v)
    }
}

impl From<f64> for SettingValue {
    fn from(v: f64) -> Self {
        SettingValue::Number(v)
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        SettingValue::Text(v.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(v: String) -> Self {
        SettingValue::Text(v)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub name: String,
    pub description: String,
    pub value: SettingValue,
    #[serde(rename = "type")]
    pub kind: SettingKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Setting {
    /// Replaces the value without any check and logs the change.
    pub fn set_value(&mut self, value: impl Into<SettingValue>) -> LogEntry {
        self.value = value.into();
        LogEntry::new(
            LOG_SOURCE,
            "change",
            format!("Setting \"{}\" changed to: {}", self.name, self.value),
        )
        .emit()
    }

    /// Like [`Setting::set_value`], but rejects values that do not fit `kind`
    /// or `options`. The setting is untouched on error.
    pub fn try_set_value(&mut self, value: impl Into<SettingValue>) -> Result<LogEntry, DataError> {
        let value = value.into();
        self.check_value(&value)?;
        Ok(self.set_value(value))
    }

    fn check_value(&self, value: &SettingValue) -> Result<(), DataError> {
        if !value.matches_kind(self.kind) {
            return Err(DataError::KindMismatch {
                name: self.name.clone(),
                kind: self.kind.as_str(),
            });
        }
        if self.kind == SettingKind::Select {
            let options = match &self.options {
                Some(options) if !options.is_empty() => options,
                _ => {
                    return Err(DataError::MissingOptions {
                        name: self.name.clone(),
                    })
                }
            };
            let text = value.as_text().unwrap_or_default();
            if !options.iter().any(|o| o == text) {
                return Err(DataError::NotAnOption {
                    name: self.name.clone(),
                    value: text.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingCategory {
    pub name: String,
    pub icon: String,
    pub settings: Vec<Setting>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPanel {
    pub setting_categories: Vec<SettingCategory>,
}

fn toggle(name: &str, description: &str, value: bool) -> Setting {
    Setting {
        name: name.to_string(),
        description: description.to_string(),
        value: SettingValue::Bool(value),
        kind: SettingKind::Boolean,
        options: None,
    }
}

fn number(name: &str, description: &str, value: f64) -> Setting {
    Setting {
        name: name.to_string(),
        description: description.to_string(),
        value: SettingValue::Number(value),
        kind: SettingKind::Number,
        options: None,
    }
}

fn select(name: &str, description: &str, value: &str, options: &[&str]) -> Setting {
    Setting {
        name: name.to_string(),
        description: description.to_string(),
        value: SettingValue::Text(value.to_string()),
        kind: SettingKind::Select,
        options: Some(options.iter().map(|o| o.to_string()).collect()),
    }
}

fn category(name: &str, icon: &str, settings: Vec<Setting>) -> SettingCategory {
    SettingCategory {
        name: name.to_string(),
        icon: icon.to_string(),
        settings,
    }
}

impl SettingsPanel {
    pub fn seeded() -> Self {
        Self {
            setting_categories: vec![
                category(
                    "General",
                    "settings",
                    vec![
                        toggle("Dark Mode", "Enable dark theme for better night viewing", false),
                        select(
                            "Language",
                            "Select your preferred language",
                            "English",
                            &["English", "Spanish", "French", "German", "Chinese"],
                        ),
                        select(
                            "Timezone",
                            "Set your local timezone",
                            "UTC-5 (EST)",
                            &["UTC-8 (PST)", "UTC-5 (EST)", "UTC+0 (GMT)", "UTC+1 (CET)", "UTC+9 (JST)"],
                        ),
                    ],
                ),
                category(
                    "Notifications",
                    "notifications",
                    vec![
                        toggle("Email Notifications", "Receive notifications via email", true),
                        toggle("Push Notifications", "Receive browser push notifications", true),
                        select(
                            "Notification Frequency",
                            "How often to receive notifications",
                            "Immediate",
                            &["Immediate", "Hourly", "Daily", "Weekly"],
                        ),
                    ],
                ),
                category(
                    "Security",
                    "security",
                    vec![
                        toggle(
                            "Two-Factor Authentication",
                            "Add an extra layer of security to your account",
                            false,
                        ),
                        number(
                            "Session Timeout",
                            "Automatically log out after inactivity (minutes)",
                            30.0,
                        ),
                        select(
                            "Password Strength",
                            "Minimum password strength requirement",
                            "Strong",
                            &["Weak", "Medium", "Strong", "Very Strong"],
                        ),
                    ],
                ),
                category(
                    "Performance",
                    "speed",
                    vec![
                        toggle("Auto-Save", "Automatically save changes as you work", true),
                        toggle("Animation Effects", "Enable smooth animations and transitions", true),
                        number(
                            "Data Refresh Rate",
                            "How often to refresh dashboard data (seconds)",
                            30.0,
                        ),
                    ],
                ),
            ],
        }
    }

    pub fn find(&self, category: &str, name: &str) -> Option<&Setting> {
        self.setting_categories
            .iter()
            .find(|c| c.name == category)?
            .settings
            .iter()
            .find(|s| s.name == name)
    }

    pub fn find_mut(&mut self, category: &str, name: &str) -> Option<&mut Setting> {
        self.setting_categories
            .iter_mut()
            .find(|c| c.name == category)?
            .settings
            .iter_mut()
            .find(|s| s.name == name)
    }

    pub fn validate(&self) -> Result<(), DataError> {
        for c in &self.setting_categories {
            if c.settings.is_empty() {
                return Err(DataError::EmptyCategory(c.name.clone()));
            }
            for s in &c.settings {
                s.check_value(&s.value)?;
            }
        }
        Ok(())
    }

    // Action stubs: log a fixed message, change nothing.

    pub fn reset_to_defaults(&self) -> LogEntry {
        LogEntry::new(LOG_SOURCE, "action", "Resetting all settings to defaults...").emit()
    }

    pub fn export_settings(&self) -> LogEntry {
        LogEntry::new(LOG_SOURCE, "action", "Exporting settings...").emit()
    }

    pub fn import_settings(&self) -> LogEntry {
        LogEntry::new(LOG_SOURCE, "action", "Importing settings...").emit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_setting_is_dark_mode() {
        let panel = SettingsPanel::seeded();
        let first = &panel.setting_categories[0].settings[0];
        assert_eq!(first.name, "Dark Mode");
        assert_eq!(first.kind, SettingKind::Boolean);
        assert_eq!(first.value, SettingValue::Bool(false));
    }

    #[test]
    fn test_seeded_shape() {
        let panel = SettingsPanel::seeded();
        let names: Vec<&str> = panel
            .setting_categories
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["General", "Notifications", "Security", "Performance"]);
        assert!(panel.setting_categories.iter().all(|c| c.settings.len() == 3));
        let timeout = panel.find("Security", "Session Timeout").unwrap();
        assert_eq!(timeout.value.as_number(), Some(30.0));
        let lang = panel.find("General", "Language").unwrap();
        assert_eq!(lang.options.as_ref().map(|o| o.len()), Some(5));
    }

    #[test]
    fn test_seeded_values_match_kinds() {
        let panel = SettingsPanel::seeded();
        assert_eq!(panel.validate(), Ok(()));
        for c in &panel.setting_categories {
            for s in &c.settings {
                assert!(s.value.matches_kind(s.kind), "{}", s.name);
            }
        }
    }

    #[test]
    fn test_set_value_is_unchecked() {
        let mut panel = SettingsPanel::seeded();
        let dark = panel.find_mut("General", "Dark Mode").unwrap();
        dark.set_value("definitely not a bool");
        assert_eq!(dark.value, SettingValue::Text("definitely not a bool".into()));
        assert_eq!(dark.kind, SettingKind::Boolean);

        dark.set_value(SettingValue::Null);
        assert_eq!(dark.value, SettingValue::Null);

        let lang = panel.find_mut("General", "Language").unwrap();
        lang.set_value("Klingon");
        assert_eq!(lang.value.as_text(), Some("Klingon"));

        // Panel invariants no longer hold, which is allowed.
        assert!(panel.validate().is_err());
    }

    #[test]
    fn test_set_value_log_entry() {
        let mut panel = SettingsPanel::seeded();
        let timeout = panel.find_mut("Security", "Session Timeout").unwrap();
        let entry = timeout.set_value(45.0);
        assert_eq!(entry.source, "settings");
        assert_eq!(entry.message, "Setting \"Session Timeout\" changed to: 45");

        let dark = panel.find_mut("General", "Dark Mode").unwrap();
        let entry = dark.set_value(true);
        assert_eq!(entry.message, "Setting \"Dark Mode\" changed to: true");
        let entry = dark.set_value(SettingValue::Null);
        assert_eq!(entry.message, "Setting \"Dark Mode\" changed to: null");
    }

    #[test]
    fn test_try_set_value() {
        let mut panel = SettingsPanel::seeded();
        let lang = panel.find_mut("General", "Language").unwrap();
        assert!(lang.try_set_value("German").is_ok());
        assert_eq!(lang.value.as_text(), Some("German"));

        let err = lang.try_set_value("Klingon").unwrap_err();
        assert_eq!(
            err,
            DataError::NotAnOption {
                name: "Language".into(),
                value: "Klingon".into()
            }
        );
        assert_eq!(lang.value.as_text(), Some("German"));

        let err = lang.try_set_value(true).unwrap_err();
        assert!(matches!(err, DataError::KindMismatch { kind: "select", .. }));

        let dark = panel.find_mut("General", "Dark Mode").unwrap();
        assert!(dark.try_set_value(SettingValue::Null).is_err());
        assert_eq!(dark.value, SettingValue::Bool(false));
    }

    #[test]
    fn test_select_without_options() {
        let mut s = select("Language", "", "English", &[]);
        assert_eq!(
            s.try_set_value("English"),
            Err(DataError::MissingOptions {
                name: "Language".into()
            })
        );
        s.options = None;
        assert!(s.try_set_value("English").is_err());
    }

    #[test]
    fn test_empty_category_invalid() {
        let mut panel = SettingsPanel::seeded();
        panel.setting_categories[3].settings.clear();
        assert_eq!(
            panel.validate(),
            Err(DataError::EmptyCategory("Performance".into()))
        );
    }

    #[test]
    fn test_action_stubs_change_nothing() {
        let panel = SettingsPanel::seeded();
        let before = panel.clone();
        assert_eq!(
            panel.reset_to_defaults().message,
            "Resetting all settings to defaults..."
        );
        assert_eq!(panel.export_settings().message, "Exporting settings...");
        assert_eq!(panel.import_settings().message, "Importing settings...");
        assert_eq!(panel, before);
    }

    #[test]
    fn test_json_shape() {
        let panel = SettingsPanel::seeded();
        let json = serde_json::to_value(&panel).unwrap();
        let first = &json["settingCategories"][0]["settings"][0];
        assert_eq!(first["type"], "boolean");
        assert_eq!(first["value"], false);
        assert!(first.get("options").is_none());

        let back: SettingsPanel = serde_json::from_value(json).unwrap();
        assert_eq!(back, panel);
    }

    #[test]
    fn test_null_value_deserializes() {
        let s: Setting = serde_json::from_str(
            r#"{"name":"X","description":"","value":null,"type":"text"}"#,
        )
        .unwrap();
        assert_eq!(s.value, SettingValue::Null);
        assert_eq!(s.options, None);
    }
}
