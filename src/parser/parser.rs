//! Parser state and the top-level recognition loop.
//!
//! The parser owns the token stream and a cursor that only moves forward.
//! Statements are dispatched through a lookup table keyed on the first
//! token of the statement; expressions are matched by plain recursive
//! descent in `expr`.

use std::collections::HashMap;

use crate::{
    errors::errors::{Error, ErrorImpl, Warning},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// Deepest nesting of groups, negations and blocks accepted before
/// recognition gives up with a syntax error.
pub const MAX_DEPTH: usize = 256;

/// The main parser structure that maintains recognition state.
pub struct Parser {
    /// The list of tokens to recognize
    tokens: Vec<Token>,
    /// Index of the next unconsumed token, never past `tokens.len()`
    pos: usize,
    /// Lookup table for statement handlers
    stmt_lookup: StmtLookup,
    /// Soft factor mismatches seen so far
    warnings: Vec<Warning>,
    /// Current nesting of recursive rules
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            warnings: vec![],
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Advances past the current token and returns it.
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Consumes the current token if its kind is one of `expected`.
    ///
    /// Nothing is consumed on a mismatch, so the caller is free to try
    /// another alternative.
    pub fn match_kinds(&mut self, expected: &[TokenKind]) -> bool {
        match self.current_token() {
            Some(token) if token.is_one_of_many(expected) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Expects a token of the specified kind, failing with a syntax error
    /// that names whatever token is at the cursor instead.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        match self.current_token() {
            Some(token) if token.kind == expected_kind => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.syntax_error()),
        }
    }

    pub fn syntax_error(&self) -> Error {
        Error::new(ErrorImpl::SyntaxError {
            found: self.current_token().cloned(),
        })
    }

    /// Records a non-fatal mismatch at the cursor and logs it.
    pub fn warn(&mut self) {
        let warning = Warning {
            found: self.current_token().cloned(),
        };

        tracing::warn!(pos = self.pos, "{}", warning);
        self.warnings.push(warning);
    }

    /// Enters one level of nesting, failing once `MAX_DEPTH` is reached.
    pub fn descend(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_DEPTH {
            tracing::debug!(pos = self.pos, "nesting limit reached");
            return Err(self.syntax_error());
        }

        self.depth += 1;
        Ok(())
    }

    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    /// Checks if there are more tokens to recognize.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for the token that starts it.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the cursor.
    pub fn get_position(&self) -> usize {
        self.pos
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

/// Recognizes a stream of tokens.
///
/// Statements are matched until the stream is exhausted. The first syntax
/// error aborts recognition and is returned as is; nothing after it is
/// looked at.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (cursor and warnings after recognition)
/// - `Ok(())` if the tokens form a program, otherwise the syntax error
pub fn parse(tokens: Vec<Token>) -> (Parser, Result<(), Error>) {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    while parser.has_tokens() {
        if let Err(error) = parse_stmt(&mut parser) {
            return (parser, Err(error));
        }
    }

    (parser, Ok(()))
}
