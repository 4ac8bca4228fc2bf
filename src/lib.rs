#![allow(clippy::module_inception)]

use crate::{
    errors::errors::{Error, Warning},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Program run by the binary when no source is given.
pub const SAMPLE_PROGRAM: &str = "
x = 3 + 5
if (x > 2) {
  y = 3
}else {
  y = 5
} ";

/// Tokenizes and recognizes `source` in one go.
///
/// Returns the warnings raised while matching factors when the source is
/// accepted, or the first lexical or syntax error otherwise.
pub fn check(source: &str) -> Result<Vec<Warning>, Error> {
    let tokens = tokenize(source)?;
    let (parser, result) = parse(tokens);

    result.map(|_| parser.into_warnings())
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::ErrorImpl;

    #[test]
    fn test_check_sample_program() {
        let warnings = super::check(super::SAMPLE_PROGRAM).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_check_reports_lexer_errors() {
        let error = super::check("x = 5;").unwrap_err();
        assert_eq!(error.kind(), &ErrorImpl::InvalidCharacter { character: ';' });
    }

    #[test]
    fn test_check_returns_factor_warnings() {
        let warnings = super::check("x = * 2").unwrap();
        assert_eq!(warnings.len(), 1);
    }
}
