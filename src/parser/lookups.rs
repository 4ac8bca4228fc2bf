use std::collections::HashMap;

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<(), Error>;

// Lookup table inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;

/// Operators joining terms into an expression.
pub const ADDITIVE_OPERATORS: &[TokenKind] = &[
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::GreaterThan,
];

/// Operators joining factors into a term.
pub const MULTIPLICATIVE_OPERATORS: &[TokenKind] = &[TokenKind::Multiply, TokenKind::Divide];

pub const PRIMARY_TOKENS: &[TokenKind] = &[TokenKind::Integer, TokenKind::Identifier];

pub fn create_token_lookups(parser: &mut Parser) {
    parser.stmt(TokenKind::Identifier, parse_assignment_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
}
