//! Проверка инвариантов демо-данных.
//!
//! Классификаторы никогда не возвращают ошибок. Ошибки возможны только
//! при явной валидации снимков и при строгой записи настройки.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static SIGNED_PERCENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]\d+(\.\d+)?%$").expect("valid percent pattern"));

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("metric '{title}': change '{change}' is not a signed percentage")]
    BadChangeFormat { title: String, change: String },

    #[error("chart slices sum to {0}, expected 100")]
    SlicesNotHundred(f64),

    #[error("chart slice '{0}' has a negative value")]
    NegativeSlice(String),

    #[error("project '{name}': progress {progress} is outside 0..=100")]
    ProgressOutOfRange { name: String, progress: f64 },

    #[error("project '{0}' has no valid due date")]
    MissingDueDate(String),

    #[error("team member id {0} is not unique")]
    DuplicateMemberId(u32),

    #[error("team member id must be positive")]
    ZeroMemberId,

    #[error("team member '{name}': invalid email '{email}'")]
    BadEmail { name: String, email: String },

    #[error("team member '{name}': avatar '{avatar}' is longer than 3 characters")]
    AvatarTooLong { name: String, avatar: String },

    #[error("setting category '{0}' has no settings")]
    EmptyCategory(String),

    #[error("setting '{name}': value does not match declared type '{kind}'")]
    KindMismatch { name: String, kind: &'static str },

    #[error("setting '{name}': select has no options")]
    MissingOptions { name: String },

    #[error("setting '{name}': '{value}' is not one of the options")]
    NotAnOption { name: String, value: String },
}

pub fn is_signed_percent(value: &str) -> bool {
    SIGNED_PERCENT.is_match(value)
}

pub fn is_email_shape(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}
