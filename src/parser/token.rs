//! Токены лексера querylex
//!
//! Определяет типы токенов, которые распознает лексический анализатор:
//! ключевые слова, идентификаторы, литералы, знаки пунктуации и маркер конца ввода.

use serde::Serialize;
use std::fmt;

/// Позиция токена в исходном тексте
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    /// Смещение в байтах от начала буфера
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }

    /// Сдвигает позицию на прочитанный фрагмент текста
    pub(crate) fn advance_over(&mut self, consumed: &str) {
        for ch in consumed.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset += consumed.len();
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Токен: вид, точный текст совпадения и позиция начала
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Совпавшая подстрока без изменений (для STRING вместе с кавычками)
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Маркер конца ввода. Текст всегда "EOF".
    pub fn eof(position: Position) -> Self {
        Self::new(TokenKind::Eof, "EOF", position)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Смещение сразу за совпавшим текстом
    pub fn end_offset(&self) -> usize {
        if self.is_eof() {
            self.position.offset
        } else {
            self.position.offset + self.text.len()
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<'{}', {}>", self.text, self.kind)
    }
}

/// Виды токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // === Ключевые слова ===
    #[serde(rename = "PRINT")]
    Print,
    #[serde(rename = "CREATE")]
    Create,
    #[serde(rename = "TABLE")]
    Table,
    #[serde(rename = "PRIMARY")]
    Primary,
    #[serde(rename = "KEY")]
    Key,
    #[serde(rename = "INSERT")]
    Insert,
    #[serde(rename = "INTO")]
    Into,
    #[serde(rename = "SET")]
    Set,
    #[serde(rename = "SELECT")]
    Select,
    #[serde(rename = "FROM")]
    From,
    #[serde(rename = "WHERE")]
    Where,

    // === Идентификаторы и литералы ===
    /// Идентификатор (имя таблицы, колонки)
    #[serde(rename = "ID")]
    Identifier,

    /// Целое число
    #[serde(rename = "INT")]
    IntegerLiteral,

    /// Строковый литерал в одинарных кавычках
    #[serde(rename = "STRING")]
    StringLiteral,

    // === Разделители ===
    #[serde(rename = "LPAREN")]
    LeftParen,     // (
    #[serde(rename = "RPAREN")]
    RightParen,    // )
    #[serde(rename = "COMMA")]
    Comma,         // ,
    #[serde(rename = "SEMICOLON")]
    Semicolon,     // ;
    #[serde(rename = "EQUALS")]
    Equals,        // =

    /// Конец ввода
    #[serde(rename = "EOF")]
    Eof,
}

impl TokenKind {
    /// Проверяет, является ли токен ключевым словом
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Print
                | TokenKind::Create
                | TokenKind::Table
                | TokenKind::Primary
                | TokenKind::Key
                | TokenKind::Insert
                | TokenKind::Into
                | TokenKind::Set
                | TokenKind::Select
                | TokenKind::From
                | TokenKind::Where
        )
    }

    /// Проверяет, является ли токен литералом
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::IntegerLiteral | TokenKind::StringLiteral)
    }

    /// Проверяет, является ли токен разделителем
    pub fn is_delimiter(&self) -> bool {
        matches!(
            self,
            TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::Equals
        )
    }

    /// Каноническое имя вида токена
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Print => "PRINT",
            TokenKind::Create => "CREATE",
            TokenKind::Table => "TABLE",
            TokenKind::Primary => "PRIMARY",
            TokenKind::Key => "KEY",
            TokenKind::Insert => "INSERT",
            TokenKind::Into => "INTO",
            TokenKind::Set => "SET",
            TokenKind::Select => "SELECT",
            TokenKind::From => "FROM",
            TokenKind::Where => "WHERE",
            TokenKind::Identifier => "ID",
            TokenKind::IntegerLiteral => "INT",
            TokenKind::StringLiteral => "STRING",
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Equals => "EQUALS",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
