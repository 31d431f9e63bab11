//! Обработка ошибок для querylex

use crate::parser::token::Position;
use thiserror::Error;

/// Сообщение об ошибке лексического анализа
pub const NO_VALID_TOKEN: &str = "No valid token";

/// Ни одно правило не совпало в позиции курсора
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error at position: {position} - {message}")]
pub struct LexicalError {
    pub message: String,
    /// Абсолютное смещение в байтах от начала буфера
    pub position: usize,
    /// Строка и колонка того же места
    pub location: Position,
}

impl LexicalError {
    /// Создает ошибку "No valid token" в указанной позиции
    pub fn no_valid_token(location: Position) -> Self {
        Self {
            message: NO_VALID_TOKEN.to_string(),
            position: location.offset,
            location,
        }
    }
}

/// Основной тип ошибки для querylex
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ошибка лексического анализа
    #[error(transparent)]
    Lexical(#[from] LexicalError),

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Тип результата для querylex
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::configuration(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::configuration(err.to_string())
    }
}
