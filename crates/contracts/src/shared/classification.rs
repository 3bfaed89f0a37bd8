//! Классификаторы меток: строка → иконка / цвет темы.
//!
//! Сравнение строгое: регистр и пробелы значимы, никакой нормализации.
//! Всё, что не совпало (включая `None`, пустую строку, `"POSITIVE"`,
//! `" away "`), уходит в значение по умолчанию конкретного маппера.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Theme colour
// ---------------------------------------------------------------------------

/// Semantic colour of the UI palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    Primary,
    Accent,
    Warn,
}

impl ThemeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeColor::Primary => "primary",
            ThemeColor::Accent => "accent",
            ThemeColor::Warn => "warn",
        }
    }
}

// ---------------------------------------------------------------------------
// Change direction (analytics)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Positive,
    Negative,
    Neutral,
}

impl ChangeType {
    pub fn from_label(label: Option<&str>) -> Option<Self> {
        match label? {
            "positive" => Some(ChangeType::Positive),
            "negative" => Some(ChangeType::Negative),
            "neutral" => Some(ChangeType::Neutral),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Positive => "positive",
            ChangeType::Negative => "negative",
            ChangeType::Neutral => "neutral",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ChangeType::Positive => "trending_up",
            ChangeType::Negative => "trending_down",
            ChangeType::Neutral => TRENDING_FLAT,
        }
    }

    pub fn color(&self) -> ThemeColor {
        match self {
            ChangeType::Positive => ThemeColor::Primary,
            ChangeType::Negative => ThemeColor::Warn,
            ChangeType::Neutral => ThemeColor::Accent,
        }
    }
}

const TRENDING_FLAT: &str = "trending_flat";

/// `positive` → `trending_up`, `negative` → `trending_down`, otherwise `trending_flat`.
pub fn change_type_icon<'a>(label: impl Into<Option<&'a str>>) -> &'static str {
    ChangeType::from_label(label.into())
        .map(|t| t.icon())
        .unwrap_or(TRENDING_FLAT)
}

/// `positive` → `primary`, `negative` → `warn`, otherwise `accent`.
pub fn change_type_color<'a>(label: impl Into<Option<&'a str>>) -> &'static str {
    ChangeType::from_label(label.into())
        .map(|t| t.color())
        .unwrap_or(ThemeColor::Accent)
        .as_str()
}

// ---------------------------------------------------------------------------
// Project phase (overview dashboard)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectPhase {
    Completed,
    InProgress,
    Planning,
}

impl ProjectPhase {
    pub fn from_label(label: Option<&str>) -> Option<Self> {
        match label? {
            "Completed" => Some(ProjectPhase::Completed),
            "In Progress" => Some(ProjectPhase::InProgress),
            "Planning" => Some(ProjectPhase::Planning),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectPhase::Completed => "Completed",
            ProjectPhase::InProgress => "In Progress",
            ProjectPhase::Planning => "Planning",
        }
    }

    pub fn color(&self) -> ThemeColor {
        match self {
            ProjectPhase::Completed => ThemeColor::Primary,
            ProjectPhase::InProgress => ThemeColor::Accent,
            ProjectPhase::Planning => ThemeColor::Warn,
        }
    }
}

pub fn project_status_color<'a>(label: impl Into<Option<&'a str>>) -> &'static str {
    ProjectPhase::from_label(label.into())
        .map(|p| p.color())
        .unwrap_or(ThemeColor::Primary)
        .as_str()
}

// ---------------------------------------------------------------------------
// Presence (team)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    Online,
    Away,
    Offline,
}

impl PresenceStatus {
    pub fn from_label(label: Option<&str>) -> Option<Self> {
        match label? {
            "online" => Some(PresenceStatus::Online),
            "away" => Some(PresenceStatus::Away),
            "offline" => Some(PresenceStatus::Offline),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PresenceStatus::Online => "online",
            PresenceStatus::Away => "away",
            PresenceStatus::Offline => "offline",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PresenceStatus::Online => "radio_button_checked",
            PresenceStatus::Away => "schedule",
            PresenceStatus::Offline => "radio_button_unchecked",
        }
    }

    pub fn color(&self) -> ThemeColor {
        match self {
            PresenceStatus::Online => ThemeColor::Primary,
            PresenceStatus::Away => ThemeColor::Accent,
            PresenceStatus::Offline => ThemeColor::Warn,
        }
    }

    pub fn all() -> [PresenceStatus; 3] {
        [
            PresenceStatus::Online,
            PresenceStatus::Away,
            PresenceStatus::Offline,
        ]
    }
}

pub fn presence_status_icon<'a>(label: impl Into<Option<&'a str>>) -> &'static str {
    PresenceStatus::from_label(label.into())
        .map(|s| s.icon())
        .unwrap_or("help")
}

pub fn presence_status_color<'a>(label: impl Into<Option<&'a str>>) -> &'static str {
    PresenceStatus::from_label(label.into())
        .map(|s| s.color())
        .unwrap_or(ThemeColor::Primary)
        .as_str()
}

// ---------------------------------------------------------------------------
// Department (team)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Engineering,
    Design,
    Product,
    Analytics,
}

impl Department {
    pub fn from_label(label: Option<&str>) -> Option<Self> {
        match label? {
            "Engineering" => Some(Department::Engineering),
            "Design" => Some(Department::Design),
            "Product" => Some(Department::Product),
            "Analytics" => Some(Department::Analytics),
            _ => None,
        }
    }

    pub fn color(&self) -> ThemeColor {
        match self {
            Department::Engineering => ThemeColor::Primary,
            Department::Design => ThemeColor::Accent,
            Department::Product => ThemeColor::Warn,
            Department::Analytics => ThemeColor::Primary,
        }
    }
}

pub fn department_color<'a>(label: impl Into<Option<&'a str>>) -> &'static str {
    Department::from_label(label.into())
        .map(|d| d.color())
        .unwrap_or(ThemeColor::Primary)
        .as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inputs that never match any ladder.
    const NEAR_MISSES: &[&str] = &["", " ", "unknown", "null", "undefined"];

    #[test]
    fn test_change_type_icon_table() {
        assert_eq!(change_type_icon("positive"), "trending_up");
        assert_eq!(change_type_icon("negative"), "trending_down");
        assert_eq!(change_type_icon("neutral"), "trending_flat");
    }

    #[test]
    fn test_change_type_color_table() {
        assert_eq!(change_type_color("positive"), "primary");
        assert_eq!(change_type_color("negative"), "warn");
        assert_eq!(change_type_color("neutral"), "accent");
    }

    #[test]
    fn test_change_type_defaults() {
        assert_eq!(change_type_icon(None), "trending_flat");
        assert_eq!(change_type_color(None), "accent");
        for input in NEAR_MISSES.iter().chain(&["POSITIVE", "Negative", " positive"]) {
            assert_eq!(change_type_icon(*input), "trending_flat", "input {input:?}");
            assert_eq!(change_type_color(*input), "accent", "input {input:?}");
        }
    }

    #[test]
    fn test_project_status_color_table() {
        assert_eq!(project_status_color("Completed"), "primary");
        assert_eq!(project_status_color("In Progress"), "accent");
        assert_eq!(project_status_color("Planning"), "warn");
    }

    #[test]
    fn test_project_status_color_defaults() {
        assert_eq!(project_status_color(None), "primary");
        for input in NEAR_MISSES
            .iter()
            .chain(&["completed", "in progress", "In  Progress", "Planning "])
        {
            assert_eq!(project_status_color(*input), "primary", "input {input:?}");
        }
    }

    #[test]
    fn test_presence_status_icon_table() {
        assert_eq!(presence_status_icon("online"), "radio_button_checked");
        assert_eq!(presence_status_icon("away"), "schedule");
        assert_eq!(presence_status_icon("offline"), "radio_button_unchecked");
    }

    #[test]
    fn test_presence_status_color_table() {
        assert_eq!(presence_status_color("online"), "primary");
        assert_eq!(presence_status_color("away"), "accent");
        assert_eq!(presence_status_color("offline"), "warn");
    }

    #[test]
    fn test_presence_status_defaults() {
        assert_eq!(presence_status_icon(None), "help");
        assert_eq!(presence_status_color(None), "primary");
        for input in NEAR_MISSES.iter().chain(&["ONLINE", "Away", " away "]) {
            assert_eq!(presence_status_icon(*input), "help", "input {input:?}");
            assert_eq!(presence_status_color(*input), "primary", "input {input:?}");
        }
    }

    #[test]
    fn test_department_color_table() {
        assert_eq!(department_color("Engineering"), "primary");
        assert_eq!(department_color("Design"), "accent");
        assert_eq!(department_color("Product"), "warn");
        assert_eq!(department_color("Analytics"), "primary");
    }

    #[test]
    fn test_department_color_defaults() {
        assert_eq!(department_color(None), "primary");
        for input in NEAR_MISSES.iter().chain(&["engineering", "DESIGN", " Product"]) {
            assert_eq!(department_color(*input), "primary", "input {input:?}");
        }
    }

    #[test]
    fn test_mappers_are_idempotent() {
        for input in ["positive", "away", "Design", "In Progress", "", "POSITIVE"] {
            assert_eq!(change_type_icon(input), change_type_icon(input));
            assert_eq!(change_type_color(input), change_type_color(input));
            assert_eq!(project_status_color(input), project_status_color(input));
            assert_eq!(presence_status_icon(input), presence_status_icon(input));
            assert_eq!(presence_status_color(input), presence_status_color(input));
            assert_eq!(department_color(input), department_color(input));
        }
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(change_type_icon("positive"), "trending_up");
        assert_eq!(change_type_icon("POSITIVE"), "trending_flat");
        assert_eq!(presence_status_color("away"), "accent");
        assert_eq!(presence_status_color(" away "), "primary");
        assert_eq!(department_color("Analytics"), "primary");
        assert_eq!(department_color(""), "primary");
    }

    #[test]
    fn test_enum_labels_round_trip_through_ladder() {
        for status in PresenceStatus::all() {
            assert_eq!(PresenceStatus::from_label(Some(status.as_str())), Some(status));
        }
        for phase in [
            ProjectPhase::Completed,
            ProjectPhase::InProgress,
            ProjectPhase::Planning,
        ] {
            assert_eq!(ProjectPhase::from_label(Some(phase.label())), Some(phase));
        }
    }
}
