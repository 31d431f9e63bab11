//! Конфигурация для querylex
//!
//! Настройки лексера и логирования. Загружаются из TOML файла и переменных окружения.

use crate::common::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Уровни логирования, которые понимает env_logger
pub const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Основная конфигурация
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lexer: LexerConfig,
    pub logging: LoggingConfig,
}

/// Конфигурация лексера
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Ключевое слово совпадает только на границе слова (`selectx` это идентификатор).
    /// При `false` ключевое слово распознается как префикс: `select1` дает SELECT и INT.
    pub strict_keywords: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            strict_keywords: true,
        }
    }
}

/// Конфигурация логирования
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень логирования
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: &Path) -> Result<Self> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Читает TOML файл без валидации: значения еще могут быть переопределены
    pub fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        let config = Self::default().apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Применяет переменные окружения поверх текущих значений.
    /// Уровень логирования не проверяется, его еще может заменить аргумент CLI.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(strict) = lookup("QUERYLEX_STRICT_KEYWORDS") {
            self.lexer.strict_keywords = strict.parse().map_err(|_| {
                Error::configuration(format!(
                    "QUERYLEX_STRICT_KEYWORDS must be true or false, got '{}'",
                    strict
                ))
            })?;
        }

        if let Some(level) = lookup("QUERYLEX_LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(self)
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::configuration(format!(
                "unknown log level '{}', expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.lexer.strict_keywords);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("querylex.toml");

        let mut config = Config::default();
        config.lexer.strict_keywords = false;
        config.logging.level = "debug".to_string();
        config.to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("querylex.toml");
        std::fs::write(&path, "[lexer]\nstrict_keywords = false\n").unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert!(!loaded.lexer.strict_keywords);
        assert_eq!(loaded.logging.level, "warn");
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("querylex.toml");
        std::fs::write(&path, "[lexer]\nstrict_keywords = \"maybe\"\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_apply_env() {
        let vars: HashMap<&str, &str> = [
            ("QUERYLEX_STRICT_KEYWORDS", "false"),
            ("QUERYLEX_LOG_LEVEL", "trace"),
        ]
        .into_iter()
        .collect();

        let config = Config::default()
            .apply_env(|key| vars.get(key).map(|value| value.to_string()))
            .unwrap();
        assert!(!config.lexer.strict_keywords);
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_apply_env_bad_values() {
        let bad_bool = Config::default().apply_env(|key| {
            (key == "QUERYLEX_STRICT_KEYWORDS").then(|| "yes".to_string())
        });
        assert!(bad_bool.is_err());

        let bad_level = Config::default()
            .apply_env(|key| (key == "QUERYLEX_LOG_LEVEL").then(|| "loud".to_string()))
            .unwrap();
        assert_eq!(bad_level.logging.level, "loud");
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_read_file_defers_validation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("querylex.toml");
        std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

        let config = Config::read_file(&path).unwrap();
        assert_eq!(config.logging.level, "loud");
        assert!(matches!(
            Config::from_file(&path).unwrap_err(),
            Error::Configuration { .. }
        ));
    }
}
