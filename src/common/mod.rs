//! Общие типы для querylex

pub mod config;
pub mod error;

pub use config::*;
pub use error::{Error, LexicalError, Result};
