use std::iter::Peekable;

use thiserror::Error;

use crate::backend::builtins;
use crate::frontend::{
    ast::ASTExpr,
    lexer::{Ops, Token},
};

// Errors that can come out of parsing a token stream. Names are kept as the
// user wrote them.
#[derive(Error, PartialEq, Debug)]
pub enum ParserError {
    #[error("Expected a number, found {found}")]
    ExpectedNumber { found: String },

    #[error("Expected {expected}, found {found}")]
    ExpectedToken {
        expected: &'static str,
        found: String,
    },

    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),

    #[error("Unknown constant: {0}")]
    UnknownConstant(String),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Incorrect number of arguments passed to {name}, expected {expected}, got {actual}")]
    ArityMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

fn describe(token: Option<Token>) -> String {
    token.map_or_else(|| "end of input".to_owned(), |t| t.to_string())
}

/// Parses a complete expression. Every token has to be consumed.
pub fn parse<'src>(
    tokens: impl IntoIterator<Item = Token<'src>>,
) -> Result<ASTExpr, ParserError> {
    let mut tokens = tokens.into_iter().peekable();

    let expr = parse_expression(&mut tokens)?;

    match tokens.next() {
        None => Ok(expr),
        Some(trailing) => Err(ParserError::UnexpectedToken(trailing.to_string())),
    }
}

// Small alias for fallible returns of parsing expressions
type ExprParseResult = Result<ASTExpr, ParserError>;

fn binary(op: Ops, left: ASTExpr, right: ASTExpr) -> ASTExpr {
    ASTExpr::BinaryExpr {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn peek_operator<'src>(tokens: &mut Peekable<impl Iterator<Item = Token<'src>>>) -> Option<Ops> {
    match tokens.peek() {
        Some(Token::Operator(op)) => Some(*op),
        _ => None,
    }
}

/// expression ::= additive
fn parse_expression<'src>(
    tokens: &mut Peekable<impl Iterator<Item = Token<'src>>>,
) -> ExprParseResult {
    parse_additive(tokens)
}

/// additive ::= multiplicative (('+' | '-') multiplicative)*
fn parse_additive<'src>(
    tokens: &mut Peekable<impl Iterator<Item = Token<'src>>>,
) -> ExprParseResult {
    let mut lhs = parse_multiplicative(tokens)?;

    while let Some(op @ (Ops::Plus | Ops::Minus)) = peek_operator(tokens) {
        let _op = tokens.next();
        let rhs = parse_multiplicative(tokens)?;
        lhs = binary(op, lhs, rhs);
    }

    Ok(lhs)
}

/// multiplicative ::= unary (('*' | '/') unary)*
fn parse_multiplicative<'src>(
    tokens: &mut Peekable<impl Iterator<Item = Token<'src>>>,
) -> ExprParseResult {
    let mut lhs = parse_unary(tokens)?;

    while let Some(op @ (Ops::Mult | Ops::Div)) = peek_operator(tokens) {
        let _op = tokens.next();
        let rhs = parse_unary(tokens)?;
        lhs = binary(op, lhs, rhs);
    }

    Ok(lhs)
}

/// unary ::= ('+' | '-')? primary
///
/// A leading minus becomes `0 - primary`.
fn parse_unary<'src>(tokens: &mut Peekable<impl Iterator<Item = Token<'src>>>) -> ExprParseResult {
    match peek_operator(tokens) {
        Some(Ops::Plus) => {
            let _sign = tokens.next();
            parse_primary(tokens)
        }

        Some(Ops::Minus) => {
            let _sign = tokens.next();
            let operand = parse_primary(tokens)?;
            Ok(binary(Ops::Minus, ASTExpr::NumberExpr(0.0), operand))
        }

        _ => parse_primary(tokens),
    }
}

/// primary
///   ::= parenexpr
///   ::= identifierexpr
///   ::= number
fn parse_primary<'src>(
    tokens: &mut Peekable<impl Iterator<Item = Token<'src>>>,
) -> ExprParseResult {
    match tokens.next() {
        Some(Token::OpenParen) => parse_paren_expr(tokens),

        Some(Token::Identifier(name)) => parse_identifier_expr(name, tokens),

        Some(Token::Number(num)) => Ok(ASTExpr::NumberExpr(num)),

        unexpected => Err(ParserError::ExpectedNumber {
            found: describe(unexpected),
        }),
    }
}

/// parenexpr ::= '(' expression ')'
///
/// Expects the open parenthesis to be consumed already.
fn parse_paren_expr<'src>(
    tokens: &mut Peekable<impl Iterator<Item = Token<'src>>>,
) -> ExprParseResult {
    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some(Token::ClosedParen) => Ok(expr),
        unexpected => Err(ParserError::ExpectedToken {
            expected: "')'",
            found: describe(unexpected),
        }),
    }
}

/// identifierexpr
///   ::= identifier
///   ::= identifier '(' (expression (',' expression)*)? ')'
///
/// A single token of lookahead decides between a constant and a call.
/// Constants are folded into numbers here.
fn parse_identifier_expr<'src>(
    name: &'src str,
    tokens: &mut Peekable<impl Iterator<Item = Token<'src>>>,
) -> ExprParseResult {
    if !matches!(tokens.peek(), Some(Token::OpenParen)) {
        return builtins::constant(name)
            .map(ASTExpr::NumberExpr)
            .ok_or_else(|| ParserError::UnknownConstant(name.to_owned()));
    }

    let _open_paren = tokens.next();

    // Resolve before looking at the arguments so an unknown name is reported
    // even when the argument list is broken.
    let function =
        builtins::function(name).ok_or_else(|| ParserError::UnknownFunction(name.to_owned()))?;

    let mut args = vec![];

    if let Some(Token::ClosedParen) = tokens.peek() {
        let _closed_paren = tokens.next();
    } else {
        loop {
            args.push(parse_expression(tokens)?);

            match tokens.next() {
                Some(Token::Comma) => continue,
                Some(Token::ClosedParen) => break,
                unexpected => {
                    return Err(ParserError::ExpectedToken {
                        expected: "',' or ')'",
                        found: describe(unexpected),
                    })
                }
            }
        }
    }

    if args.len() != function.arity() {
        return Err(ParserError::ArityMismatch {
            name: name.to_owned(),
            expected: function.arity(),
            actual: args.len(),
        });
    }

    Ok(ASTExpr::CallExpr {
        name: name.to_lowercase(),
        args,
    })
}
