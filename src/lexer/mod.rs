//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a flat stream of tokens for the recognizer. It handles:
//!
//! - Tokenization using an anchored regex pattern table
//! - Recognition of the `if`/`else` keywords, identifiers and integers
//! - Single-character operators and delimiters
//! - Rejection of any character outside those classes

pub mod lexer;
pub mod tokens;
