use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::parse_expr, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<(), Error> {
    tracing::trace!(pos = parser.get_position(), "statement");

    let handler = parser
        .current_token_kind()
        .and_then(|kind| parser.get_stmt_lookup().get(&kind).copied());

    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.syntax_error()),
    }
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;
    parse_expr(parser)?;

    Ok(())
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::If)?;

    parser.expect(TokenKind::OpenParen)?;
    parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    parse_block_stmt(parser)?;

    if parser.match_kinds(&[TokenKind::Else]) {
        parse_block_stmt(parser)?;
    }

    Ok(())
}

/// `{ statement }`, exactly one statement between the braces.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.descend()?;

    parser.expect(TokenKind::OpenCurly)?;
    parse_stmt(parser)?;
    parser.expect(TokenKind::CloseCurly)?;

    parser.ascend();
    Ok(())
}
