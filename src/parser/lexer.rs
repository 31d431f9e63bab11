//! Лексический анализатор querylex
//!
//! Преобразует входной текст в последовательность токенов для парсера.
//! Токены выдаются по одному по запросу (`next_token`) или ленивым итератором
//! (`tokens`). Пробелы и комментарии `#` до конца строки пропускаются.

use crate::common::config::LexerConfig;
use crate::common::error::LexicalError;
use crate::parser::rules::{skip_prefix, RuleSet};
use crate::parser::token::{Position, Token};
use std::iter::FusedIterator;

/// Лексический анализатор
///
/// Курсор только растет и никогда не выходит за конец буфера. После токена
/// EOF каждый следующий вызов снова возвращает EOF.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Исходный текст
    input: &'a str,
    /// Текущая позиция курсора (строка, колонка, смещение)
    current_position: Position,
    /// Общий скомпилированный набор правил
    rules: &'static RuleSet,
}

impl<'a> Lexer<'a> {
    /// Создает лексер с конфигурацией по умолчанию
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, &LexerConfig::default())
    }

    pub fn with_config(input: &'a str, config: &LexerConfig) -> Self {
        Self {
            input,
            current_position: Position::start(),
            rules: RuleSet::for_config(config),
        }
    }

    /// Смещение курсора в байтах
    pub fn offset(&self) -> usize {
        self.current_position.offset
    }

    /// Строка и колонка курсора
    pub fn location(&self) -> Position {
        self.current_position
    }

    /// Возвращает следующий токен.
    ///
    /// Если ни одно правило не совпало, возвращает `LexicalError` с позицией
    /// курсора. Курсор при этом не сдвигается, повторный вызов вернет ту же ошибку.
    pub fn next_token(&mut self) -> Result<Token, LexicalError> {
        self.skip_ignored();

        if self.offset() >= self.input.len() {
            return Ok(Token::eof(self.current_position));
        }

        let input = self.input;
        let rest = &input[self.offset()..];
        let (kind, len) = match self.rules.match_prefix(rest) {
            Some(matched) => matched,
            None => {
                let err = LexicalError::no_valid_token(self.current_position);
                log::debug!("{} ({})", err, err.location);
                return Err(err);
            }
        };

        let start = self.current_position;
        let text = &rest[..len];
        self.current_position.advance_over(text);

        let token = Token::new(kind, text, start);
        log::trace!("{} at {}", token, start);
        Ok(token)
    }

    /// Ленивая последовательность токенов, заканчивающаяся EOF
    pub fn tokens(&mut self) -> Tokens<'_, 'a> {
        Tokens {
            lexer: self,
            finished: false,
        }
    }

    /// Возвращает все токены входного текста, включая EOF
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexicalError> {
        self.tokens().collect()
    }

    // === Вспомогательные методы ===

    /// Пропускает пробелы и комментарии, пока они идут подряд
    fn skip_ignored(&mut self) {
        let input = self.input;
        while let Some(len) = skip_prefix(&input[self.offset()..]) {
            let start = self.offset();
            self.current_position.advance_over(&input[start..start + len]);
        }
    }
}

/// Итератор токенов лексера.
///
/// Выдает EOF ровно один раз и завершается. Ошибка тоже выдается один раз,
/// после нее итератор пуст.
#[derive(Debug)]
pub struct Tokens<'l, 'a> {
    lexer: &'l mut Lexer<'a>,
    finished: bool,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Result<Token, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.lexer.next_token();
        if !matches!(&result, Ok(token) if !token.is_eof()) {
            self.finished = true;
        }
        Some(result)
    }
}

impl FusedIterator for Tokens<'_, '_> {}
