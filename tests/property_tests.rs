use proptest::collection::vec as prop_vec;
use proptest::prelude::*;
use proptest::sample::select;
use proptest::string::string_regex;
use recognizer::{
    check,
    errors::errors::ErrorImpl,
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    parser::parser::parse,
};

const LANGUAGE_CHARACTERS: &str = "+-*/()=>{} \t\n\r\x0B\x0C";

fn arbitrary_tokens() -> impl Strategy<Value = Vec<Token>> {
    prop_vec(select(TokenKind::ALL.to_vec()), 0..64).prop_map(|kinds| {
        kinds
            .into_iter()
            .map(|kind| Token::new(kind, kind.name()))
            .collect()
    })
}

// Property: recognition terminates on any token sequence and the cursor stays in bounds
proptest! {
    #[test]
    fn prop_recognition_terminates(tokens in arbitrary_tokens()) {
        let len = tokens.len();
        let (parser, result) = parse(tokens);

        prop_assert!(parser.get_position() <= len);
        if result.is_ok() {
            prop_assert_eq!(parser.get_position(), len);
        }
    }
}

// Property: scanning and recognizing carry no state between calls
proptest! {
    #[test]
    fn prop_checks_are_idempotent(source in string_regex("[a-z0-9+*/()=>{} -]{0,48}").unwrap()) {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
        prop_assert_eq!(check(&source), check(&source));
    }
}

// Property: whitespace never produces tokens
proptest! {
    #[test]
    fn prop_whitespace_only_is_empty(source in string_regex("[ \t\n\r]{0,32}").unwrap()) {
        prop_assert_eq!(tokenize(&source), Ok(vec![]));
    }
}

// Property: any character outside the language aborts scanning
proptest! {
    #[test]
    fn prop_invalid_character_is_reported(
        prefix in string_regex("[a-z0-9 =+]{0,16}").unwrap(),
        character in any::<char>().prop_filter("outside the language", |c| {
            !c.is_ascii_alphanumeric() && !LANGUAGE_CHARACTERS.contains(*c)
        }),
        suffix in string_regex("[a-z0-9 =+]{0,16}").unwrap(),
    ) {
        let source = format!("{}{}{}", prefix, character, suffix);
        let error = tokenize(&source).unwrap_err();

        prop_assert_eq!(error.kind(), &ErrorImpl::InvalidCharacter { character });
    }
}

// Property: identifier and integer tokens hold exactly the text they were scanned from
proptest! {
    #[test]
    fn prop_lexemes_round_trip(
        words in prop_vec(string_regex("[a-zA-Z][a-zA-Z0-9]{0,8}|[0-9]{1,8}").unwrap(), 0..16)
    ) {
        let tokens = tokenize(&words.join(" ")).unwrap();

        let values = tokens.iter().map(|token| token.value.clone()).collect::<Vec<_>>();
        prop_assert_eq!(values, words);
    }
}
