//! querylex - лексический анализатор для небольшого SQL-подобного языка запросов
//!
//! Превращает текст запроса в последовательность токенов для парсера. Правила
//! проверяются в фиксированном порядке, побеждает первое совпавшее в позиции курсора.
//!
//! ```
//! use querylex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("select name from users;");
//! let tokens = lexer.tokenize().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Select);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```

pub mod cli;
pub mod common;
pub mod parser;

pub use common::config::{Config, LexerConfig, LoggingConfig};
pub use common::error::{Error, LexicalError, Result};
pub use parser::{Lexer, Position, Token, TokenKind, Tokens};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
