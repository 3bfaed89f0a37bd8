//! Общие типы и данные демо-приложения.
//!
//! Крейт не зависит от wasm и собирается/тестируется нативно:
//! - `shared`: классификаторы, лог-записи, валидация, конфигурация
//! - `dashboards`: обзорный дашборд и аналитика
//! - `domain`: команда
//! - `system`: настройки

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
