//! Recognizer for the token stream.
//!
//! This module walks the tokens produced by the lexer against the grammar
//! with one token of lookahead and no backtracking:
//!
//! ```text
//! program     := statement*
//! statement   := assignment
//!              | "if" "(" expression ")" "{" statement "}" ["else" "{" statement "}"]
//! assignment  := ID "=" expression
//! expression  := term (("+" | "-" | ">") term)*
//! term        := factor (("*" | "/") factor)*
//! factor      := INTEGER | ID | "(" expression ")" | "-" factor
//! ```
//!
//! Statements fail hard on the first missing token. Factors only warn and
//! let recognition continue.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
