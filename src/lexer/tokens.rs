use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Words that lex as keywords instead of identifiers.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map
    };
}

/// Every kind of token the language knows about.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Integer,
    Identifier,

    Plus,
    Minus,
    Multiply,
    Divide,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    Assignment,  // =
    GreaterThan, // >

    // Reserved
    If,
    Else,

    // Never produced by the lexer
    EndIf,
    Then,
    OpenBracket,
    CloseBracket,
    Comma,
    Dot,
}

impl TokenKind {
    pub const ALL: [TokenKind; 20] = [
        TokenKind::Integer,
        TokenKind::Identifier,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Multiply,
        TokenKind::Divide,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::Assignment,
        TokenKind::GreaterThan,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::EndIf,
        TokenKind::Then,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::Comma,
        TokenKind::Dot,
    ];

    /// The upper-case name used when printing tokens, e.g. `GREATER_THAN`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Integer => "INTEGER",
            TokenKind::Identifier => "ID",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::EndIf => "ENDIF",
            TokenKind::Then => "THEN",
            TokenKind::OpenBracket => "LBRACKET",
            TokenKind::CloseBracket => "RBRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single lexeme together with its kind. `value` is the exact source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.kind, self.value)
    }
}

/// Renders a token list as `[(ID, x) (ASSIGN, =) (INTEGER, 5)]`.
pub fn format_tokens(tokens: &[Token]) -> String {
    let tokens = tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<String>>();

    format!("[{}]", tokens.join(" "))
}
