use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The offending token of a syntax error. `None` for scanner errors and
    /// for syntax errors raised at the end of input.
    pub fn token(&self) -> Option<&Token> {
        match &self.internal_error {
            ErrorImpl::SyntaxError { found } => found.as_ref(),
            ErrorImpl::InvalidCharacter { .. } => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { character } => ErrorTip::Suggestion(format!(
                "`{}` is not part of the language, only letters, digits, whitespace and `+ - * / ( ) = > {{ }}` are",
                character.escape_default()
            )),
            ErrorImpl::SyntaxError { found: Some(token) } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}` ({})",
                token.value, token.kind
            )),
            ErrorImpl::SyntaxError { found: None } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Invalid character: {character}")]
    InvalidCharacter { character: char },
    #[error("Syntax error at token: {}", display_found(.found))]
    SyntaxError { found: Option<Token> },
}

/// A non-fatal mismatch inside a factor. Recognition continues past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub found: Option<Token>,
}

impl Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Syntax error at token: {}", display_found(&self.found))
    }
}

fn display_found(found: &Option<Token>) -> String {
    match found {
        Some(token) => token.to_string(),
        None => String::from("end of input"),
    }
}
