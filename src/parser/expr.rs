use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    lookups::{ADDITIVE_OPERATORS, MULTIPLICATIVE_OPERATORS, PRIMARY_TOKENS},
    parser::Parser,
};

// A factor that cannot be matched is recorded as a warning and recognition
// carries on from the same token. The only hard failure here is nesting
// past `MAX_DEPTH`.

pub fn parse_expr(parser: &mut Parser) -> Result<(), Error> {
    parse_term(parser)?;

    while parser.match_kinds(ADDITIVE_OPERATORS) {
        parse_term(parser)?;
    }

    Ok(())
}

pub fn parse_term(parser: &mut Parser) -> Result<(), Error> {
    parse_factor(parser)?;

    while parser.match_kinds(MULTIPLICATIVE_OPERATORS) {
        parse_factor(parser)?;
    }

    Ok(())
}

pub fn parse_factor(parser: &mut Parser) -> Result<(), Error> {
    if parser.match_kinds(PRIMARY_TOKENS) {
        return Ok(());
    }

    if parser.match_kinds(&[TokenKind::OpenParen]) {
        parser.descend()?;
        parse_grouping_expr(parser)?;
        parser.ascend();
        return Ok(());
    }

    if parser.match_kinds(&[TokenKind::Minus]) {
        parser.descend()?;
        parse_factor(parser)?;
        parser.ascend();
        return Ok(());
    }

    parser.warn();
    Ok(())
}

/// The rest of `( expression )` once the opening paren is consumed.
fn parse_grouping_expr(parser: &mut Parser) -> Result<(), Error> {
    parse_expr(parser)?;

    if !parser.match_kinds(&[TokenKind::CloseParen]) {
        parser.warn();
    }

    Ok(())
}
