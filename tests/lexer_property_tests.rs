//! Property-тесты лексера querylex

use proptest::prelude::*;
use querylex::{Lexer, LexerConfig, TokenKind};

/// Пробелы и комментарии в произвольном порядке
fn ignorable_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::string::string_regex("[ \t\r\n]{1,4}").expect("valid regex"),
            prop::string::string_regex("#[^\n]{0,12}\n?").expect("valid regex"),
        ],
        0..8,
    )
    .prop_map(|pieces| pieces.concat())
}

/// Произвольный текст, в том числе с недопустимыми символами
fn source_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_ \t\n'(),;=#@!é]{0,60}").expect("valid regex")
}

fn lexeme_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "print", "create", "table", "primary", "key", "insert", "into", "set", "select",
            "from", "where", "(", ")", ",", ";", "=",
        ])
        .prop_map(str::to_string),
        prop::string::string_regex("[a-zA-Z_]{1,8}[0-9]{0,3}").expect("valid regex"),
        prop::string::string_regex("[0-9]{1,6}").expect("valid regex"),
        prop::string::string_regex("'[^'\n]{0,10}'").expect("valid regex"),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_ignorable_input_yields_only_eof(input in ignorable_strategy()) {
        let tokens = Lexer::new(&input).tokenize().unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Eof);
        prop_assert_eq!(tokens[0].position.offset, input.len());
    }

    #[test]
    fn prop_cursor_is_monotonic(input in source_strategy(), strict in any::<bool>()) {
        let config = LexerConfig { strict_keywords: strict };
        let mut lexer = Lexer::with_config(&input, &config);
        let mut previous_end = 0;

        for item in lexer.tokens() {
            match item {
                Ok(token) => {
                    prop_assert!(token.position.offset >= previous_end);
                    prop_assert!(token.end_offset() <= input.len());
                    if !token.is_eof() {
                        prop_assert!(token.end_offset() > token.position.offset);
                        prop_assert_eq!(
                            &input[token.position.offset..token.end_offset()],
                            token.text.as_str()
                        );
                    }
                    previous_end = token.end_offset();
                }
                Err(err) => {
                    prop_assert!(err.position >= previous_end);
                    prop_assert!(err.position < input.len());
                }
            }
        }
        prop_assert!(lexer.offset() <= input.len());
    }

    #[test]
    fn prop_eof_is_terminal(input in source_strategy()) {
        let mut lexer = Lexer::new(&input);
        if lexer.tokenize().is_ok() {
            for _ in 0..3 {
                let token = lexer.next_token().unwrap();
                prop_assert!(token.is_eof());
                prop_assert_eq!(token.text.as_str(), "EOF");
                prop_assert_eq!(lexer.offset(), input.len());
            }
        }
    }

    #[test]
    fn prop_separated_lexemes_are_recovered(lexemes in prop::collection::vec(lexeme_strategy(), 1..12)) {
        let input = lexemes.join(" ");
        let tokens = Lexer::new(&input).tokenize().unwrap();

        let texts: Vec<&str> = tokens
            .iter()
            .filter(|token| !token.is_eof())
            .map(|token| token.text.as_str())
            .collect();
        let expected: Vec<&str> = lexemes.iter().map(String::as_str).collect();
        prop_assert_eq!(texts, expected);
    }
}
