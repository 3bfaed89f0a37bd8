use serde::{Deserialize, Serialize};

/// Диагностическая запись, которую порождают мутаторы и заглушки действий.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub source: String, // "settings", "team", ...
    pub category: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(source: &str, category: &str, message: impl Into<String>) -> Self {
        Self {
            source: source.to_string(),
            category: category.to_string(),
            message: message.into(),
        }
    }

    /// Writes the entry through the `log` facade and hands it back.
    pub fn emit(self) -> Self {
        log::info!("[{}/{}] {}", self.source, self.category, self.message);
        self
    }
}
