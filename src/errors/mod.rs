//! Error types and error handling for the recognizer.
//!
//! - `InvalidCharacter` from the lexer, `SyntaxError` from the parser
//! - Human-facing error names and tips
//! - Non-fatal `Warning`s raised while matching factors

pub mod errors;
