//! CLI интерфейс для querylex
//!
//! Загружает текст запроса из файла, строки или stdin и печатает токены.

use crate::common::{Config, Error, Result};
use crate::parser::{Lexer, Token, RULES};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Конфигурационный файл, который ищется в рабочей директории
pub const DEFAULT_CONFIG_FILE: &str = "querylex.toml";

/// querylex - лексический анализатор языка запросов
#[derive(Parser, Debug)]
#[command(name = "querylex")]
#[command(about = "querylex - a tokenizer for a small SQL-like query language")]
#[command(version)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Разбить текст на токены
    Tokenize {
        /// Файл с запросом (по умолчанию stdin)
        file: Option<PathBuf>,

        /// Текст запроса в командной строке
        #[arg(short = 'e', long = "expr", conflicts_with = "file")]
        expr: Option<String>,

        /// Формат вывода
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Распознавать ключевые слова как префиксы (select1 -> SELECT, INT)
        #[arg(long)]
        legacy_keywords: bool,
    },

    /// Показать таблицу правил в порядке проверки
    Rules,
}

/// Формат вывода токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Один токен на строку: <'text', KIND>
    Text,
    /// JSON массив токенов
    Json,
}

impl Cli {
    /// Загружает конфигурацию: файл, затем переменные окружения, затем аргументы
    pub fn load_config(&self) -> Result<Config> {
        self.load_config_with(|key| std::env::var(key).ok())
    }

    /// То же, что `load_config`, с подменяемым источником переменных окружения.
    /// Валидация выполняется один раз, после применения аргументов.
    pub fn load_config_with<F>(&self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match &self.config {
            Some(path) => Config::read_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Config::read_file(default_path)?
                } else {
                    Config::default()
                }
            }
        };

        let mut config = config.apply_env(lookup)?;

        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Commands::Tokenize {
            legacy_keywords: true,
            ..
        } = &self.command
        {
            config.lexer.strict_keywords = false;
        }

        config.validate()?;
        Ok(config)
    }

    /// Выполняет команду и возвращает текст для вывода
    pub fn execute(&self, config: &Config) -> Result<String> {
        match &self.command {
            Commands::Tokenize {
                file, expr, format, ..
            } => {
                let buffer = read_input(file.as_deref(), expr.as_deref())?;
                let mut lexer = Lexer::with_config(&buffer, &config.lexer);
                let tokens = lexer.tokenize()?;
                log::info!("Получено {} токенов", tokens.len());
                render_tokens(&tokens, *format)
            }
            Commands::Rules => Ok(render_rules()),
        }
    }
}

/// Читает буфер из строки, файла или stdin
pub fn read_input(file: Option<&Path>, expr: Option<&str>) -> Result<String> {
    if let Some(expr) = expr {
        return Ok(expr.to_string());
    }

    match file {
        Some(path) => {
            log::debug!("Чтение запроса из {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Форматирует токены для вывода
pub fn render_tokens(tokens: &[Token], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(tokens
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(tokens).map_err(Error::from),
    }
}

/// Форматирует таблицу правил
pub fn render_rules() -> String {
    RULES
        .iter()
        .enumerate()
        .map(|(index, rule)| format!("{:>2}  {:<10} {}", index, rule.kind, rule.pattern))
        .collect::<Vec<_>>()
        .join("\n")
}
