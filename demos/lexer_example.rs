//! Пример использования лексического анализатора querylex

use querylex::{Lexer, LexerConfig, TokenKind};

fn main() {
    println!("🔍 Демонстрация лексического анализатора querylex\n");

    // Тест 1: Простой запрос
    show_statement();

    // Тест 2: Граница ключевых слов
    show_keyword_boundary();

    // Тест 3: Ошибка разбора
    show_error();

    println!("✅ Демонстрация завершена успешно!");
}

fn show_statement() {
    println!("📝 1. Запрос insert");
    println!("===================");

    let sql = "insert into t set (id) = (1); # комментарий";
    let mut lexer = Lexer::new(sql);

    for token in lexer.tokens() {
        match token {
            Ok(token) => println!("   {} at {}", token, token.position),
            Err(err) => println!("   {}", err),
        }
    }
    println!();
}

fn show_keyword_boundary() {
    println!("🔗 2. Граница ключевых слов");
    println!("===========================");

    let sql = "select1 fromx";
    let legacy = LexerConfig {
        strict_keywords: false,
    };

    for (name, config) in [("strict", LexerConfig::default()), ("legacy", legacy)] {
        let mut lexer = Lexer::with_config(sql, &config);
        let kinds: Vec<String> = match lexer.tokenize() {
            Ok(tokens) => tokens
                .iter()
                .filter(|token| token.kind != TokenKind::Eof)
                .map(|token| format!("{}({})", token.kind, token.text))
                .collect(),
            Err(err) => vec![err.to_string()],
        };
        println!("   {:<7} {}", name, kinds.join(" "));
    }
    println!();
}

fn show_error() {
    println!("⚠️  3. Ошибка разбора");
    println!("=====================");

    let mut lexer = Lexer::new("select * from t;");
    match lexer.tokenize() {
        Ok(tokens) => println!("   Всего токенов: {}", tokens.len()),
        Err(err) => println!("   {} (строка {}, колонка {})", err, err.location.line, err.location.column),
    }
    println!();
}
