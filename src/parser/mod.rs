//! Лексический анализ для querylex

pub mod lexer;
pub mod rules;
pub mod token;


// Переэкспортируем основные типы
pub use lexer::{Lexer, Tokens};
pub use rules::{Rule, RuleSet, RULES};
pub use token::{Position, Token, TokenKind};
