pub mod classification;
pub mod config;
pub mod logger;
pub mod validation;
