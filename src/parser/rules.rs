//! Таблица правил лексера
//!
//! Правила проверяются строго в порядке объявления: побеждает первое правило,
//! совпавшее в позиции курсора, а не самое длинное совпадение. Ключевые слова
//! объявлены раньше идентификатора, иначе идентификатор перекрыл бы их.

use crate::common::config::LexerConfig;
use crate::parser::token::TokenKind;
use lazy_static::lazy_static;
use regex::Regex;

/// Правило: шаблон и вид токена
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub pattern: &'static str,
    pub kind: TokenKind,
}

const fn rule(pattern: &'static str, kind: TokenKind) -> Rule {
    Rule { pattern, kind }
}

/// Упорядоченная таблица правил. Порядок менять нельзя.
pub const RULES: &[Rule] = &[
    rule("print", TokenKind::Print),
    rule("create", TokenKind::Create),
    rule("table", TokenKind::Table),
    rule("primary", TokenKind::Primary),
    rule("key", TokenKind::Key),
    rule("insert", TokenKind::Insert),
    rule("into", TokenKind::Into),
    rule("set", TokenKind::Set),
    rule("select", TokenKind::Select),
    rule("from", TokenKind::From),
    rule("where", TokenKind::Where),
    rule(r"[a-zA-Z_]+[0-9]*", TokenKind::Identifier),
    rule(r"[0-9]+", TokenKind::IntegerLiteral),
    rule(r"'[^']*'", TokenKind::StringLiteral),
    rule(r"\(", TokenKind::LeftParen),
    rule(r"\)", TokenKind::RightParen),
    rule(",", TokenKind::Comma),
    rule(";", TokenKind::Semicolon),
    rule("=", TokenKind::Equals),
];

lazy_static! {
    static ref STRICT_RULES: RuleSet =
        RuleSet::compile(RULES, true).expect("built-in lexer rules must compile");
    static ref PREFIX_RULES: RuleSet =
        RuleSet::compile(RULES, false).expect("built-in lexer rules must compile");
    // \s не включает разделители \x1c-\x1f, а входной язык считает их пробелами
    static ref WHITESPACE: Regex =
        Regex::new(r"\A[\s\x1c-\x1f]+").expect("whitespace pattern must compile");
    static ref COMMENT: Regex = Regex::new(r"\A#.*").expect("comment pattern must compile");
}

/// Скомпилированный набор правил: одна альтернатива с группой на каждое правило
#[derive(Debug)]
pub struct RuleSet {
    matcher: Regex,
    kinds: Vec<TokenKind>,
    strict_keywords: bool,
}

impl RuleSet {
    /// Собирает правила в один якорный шаблон.
    ///
    /// При `strict_keywords` ключевое слово совпадает только на границе слова,
    /// так что `selectx` достается идентификатору целиком.
    pub fn compile(rules: &[Rule], strict_keywords: bool) -> Result<Self, regex::Error> {
        let alternatives: Vec<String> = rules
            .iter()
            .map(|rule| {
                if strict_keywords && rule.kind.is_keyword() {
                    format!(r"({}\b)", rule.pattern)
                } else {
                    format!("({})", rule.pattern)
                }
            })
            .collect();
        let source = format!(r"\A(?:{})", alternatives.join("|"));
        log::debug!(
            "Компиляция {} правил лексера (strict_keywords = {})",
            rules.len(),
            strict_keywords
        );

        Ok(Self {
            matcher: Regex::new(&source)?,
            kinds: rules.iter().map(|rule| rule.kind).collect(),
            strict_keywords,
        })
    }

    /// Общий набор правил для конфигурации
    pub fn for_config(config: &LexerConfig) -> &'static RuleSet {
        if config.strict_keywords {
            &*STRICT_RULES
        } else {
            &*PREFIX_RULES
        }
    }

    pub fn strict_keywords(&self) -> bool {
        self.strict_keywords
    }

    /// Пытается сопоставить правила ровно с начала `rest`.
    /// Возвращает вид токена и длину совпадения в байтах.
    pub fn match_prefix(&self, rest: &str) -> Option<(TokenKind, usize)> {
        let captures = self.matcher.captures(rest)?;
        captures
            .iter()
            .skip(1)
            .zip(&self.kinds)
            .find_map(|(group, kind)| group.map(|m| (*kind, m.end())))
    }
}

/// Длина пропускаемого фрагмента (пробелы или комментарий `#` до конца строки)
/// в начале `rest`
pub fn skip_prefix(rest: &str) -> Option<usize> {
    WHITESPACE
        .find(rest)
        .or_else(|| COMMENT.find(rest))
        .map(|m| m.end())
}
