//! Expression parsing using Pratt parsing (precedence climbing).
//!
//! Every token kind maps to an optional prefix rule (how it begins an
//! expression) and, for the binary operators, an infix precedence. The
//! climb in [`Parser::parse_expression`] keeps consuming infix operators
//! while their precedence exceeds the caller's minimum, which groups
//! tighter operators lower in the tree and makes equal precedences
//! left-associate.

use super::{Context, Parser};
use crate::ast::{Expr, ExprKind, InfixOp, PrefixOp};
use crate::parser::error::ParseError;
use crate::parser::helpers::ends_statement;
use crate::token::TokenKind;

/// Operator precedence levels, in ascending binding strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    /// Non-operators.
    Lowest,
    /// `==` and `!=`.
    Equals,
    /// `<` and `>`.
    Compare,
    /// `+` and binary `-`.
    Sum,
    /// `*` and `/`.
    Product,
    /// Unary `!` and `-`.
    Prefix,
    /// The call opener `${`.
    Call,
}

impl Precedence {
    /// Returns the infix precedence of a token kind.
    ///
    /// Kinds that are not infix operators sit at [`Precedence::Lowest`].
    pub(super) fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Equal | TokenKind::NotEqual => Precedence::Equals,
            TokenKind::LessThan | TokenKind::GreaterThan => Precedence::Compare,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::DollarLBrace => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

/// Returns the infix operator for a token kind, if it is one.
fn infix_op(kind: TokenKind) -> Option<InfixOp> {
    let op = match kind {
        TokenKind::Plus => InfixOp::Add,
        TokenKind::Minus => InfixOp::Sub,
        TokenKind::Asterisk => InfixOp::Mul,
        TokenKind::Slash => InfixOp::Div,
        TokenKind::Equal => InfixOp::Equal,
        TokenKind::NotEqual => InfixOp::NotEqual,
        TokenKind::LessThan => InfixOp::LessThan,
        TokenKind::GreaterThan => InfixOp::GreaterThan,
        _ => return None,
    };

    Some(op)
}

impl<'src> Parser<'src> {
    /// Parses an expression at the given minimum precedence.
    ///
    /// The climb stops at end-of-statement tokens for the context, at end
    /// of file, and at `,` (which separates call arguments and never joins
    /// expressions). On return the cursor sits on the last token of the
    /// expression.
    pub(super) fn parse_expression(
        &mut self,
        min_prec: Precedence,
        ctx: Context,
    ) -> Result<Expr, ParseError> {
        let mut left = self.parse_prefix(ctx)?;

        while !ends_statement(self.peek.kind, ctx)
            && self.peek.kind != TokenKind::Eof
            && self.peek.kind != TokenKind::Comma
            && min_prec < Precedence::of(self.peek.kind)
        {
            // `${` carries call precedence but has no infix rule; stop on
            // anything that cannot join two expressions.
            let Some(op) = infix_op(self.peek.kind) else {
                break;
            };

            self.advance();
            left = self.parse_infix(op, left, ctx)?;
        }

        Ok(left)
    }

    /// Dispatches on the current token's prefix rule.
    fn parse_prefix(&mut self, ctx: Context) -> Result<Expr, ParseError> {
        match self.current.kind {
            TokenKind::Ident => Ok(Expr::new(
                ExprKind::Identifier(self.current.text.to_string()),
                self.current.span,
            )),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::True | TokenKind::False => Ok(Expr::new(
                ExprKind::BooleanLiteral(self.current.kind == TokenKind::True),
                self.current.span,
            )),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(ctx),
            TokenKind::LeftParen => self.parse_grouped_expression(ctx),
            TokenKind::If => self.parse_if_expression(ctx),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::DollarLBrace => self.parse_call_expression(),
            TokenKind::Comma | TokenKind::Newline | TokenKind::Semicolon => {
                Err(ParseError::stray_terminator(&self.current))
            }
            TokenKind::Illegal => Err(ParseError::illegal_token(&self.current)),
            _ => Err(ParseError::unexpected_token(&self.current)),
        }
    }

    /// Parses an integer literal from the current token's lexeme.
    ///
    /// The scanner only guarantees a digit run; the value may still exceed
    /// the `i64` range, which is a parse error.
    fn parse_integer_literal(&mut self) -> Result<Expr, ParseError> {
        let value: i64 = self
            .current
            .text
            .parse()
            .map_err(|_| ParseError::integer_out_of_range(&self.current))?;

        Ok(Expr::new(ExprKind::IntegerLiteral(value), self.current.span))
    }

    /// Parses a prefix operation: `!operand` or `-operand`.
    fn parse_prefix_expression(&mut self, ctx: Context) -> Result<Expr, ParseError> {
        let op_span = self.current.span;
        let op = if self.current.kind == TokenKind::Bang {
            PrefixOp::Not
        } else {
            PrefixOp::Neg
        };

        self.advance();
        let operand = self.parse_expression(Precedence::Prefix, ctx)?;
        let span = op_span.to(operand.span);

        Ok(Expr::new(
            ExprKind::Prefix {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// Parses an infix operation. The cursor sits on the operator; `left`
    /// has already been parsed.
    fn parse_infix(&mut self, op: InfixOp, left: Expr, ctx: Context) -> Result<Expr, ParseError> {
        let prec = Precedence::of(self.current.kind);

        self.advance();
        let right = self.parse_expression(prec, ctx)?;
        let span = left.span.to(right.span);

        Ok(Expr::new(
            ExprKind::Infix {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        ))
    }

    /// Parses a parenthesized expression: `( expr )`.
    ///
    /// Grouping resets the precedence floor but keeps the surrounding
    /// statement context, so a newline still terminates as it would
    /// outside the parentheses.
    fn parse_grouped_expression(&mut self, ctx: Context) -> Result<Expr, ParseError> {
        let open_span = self.current.span;

        self.advance();
        let mut inner = self.parse_expression(Precedence::Lowest, ctx)?;
        self.expect_peek(TokenKind::RightParen)?;

        // Widen the span to cover the parentheses.
        inner.span = open_span.to(self.current.span);
        Ok(inner)
    }

    /// Parses an if expression: `if expr block ('else' block)?`.
    fn parse_if_expression(&mut self, ctx: Context) -> Result<Expr, ParseError> {
        let if_span = self.current.span;

        self.advance();
        let condition = self.parse_expression(Precedence::Lowest, ctx)?;

        self.expect_peek(TokenKind::LeftBrace)?;
        let consequence = self.parse_block_statement()?;
        let mut span = if_span.to(consequence.span);

        let alternative = if self.peek.kind == TokenKind::Else {
            self.advance();
            self.expect_peek(TokenKind::LeftBrace)?;

            let block = self.parse_block_statement()?;
            span = if_span.to(block.span);
            Some(block)
        } else {
            None
        };

        Ok(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
            span,
        ))
    }

    /// Parses a function literal: `fn '(' params ')' block`.
    fn parse_function_literal(&mut self) -> Result<Expr, ParseError> {
        let fn_span = self.current.span;

        self.expect_peek(TokenKind::LeftParen)?;
        let params = self.parse_function_params()?;

        self.expect_peek(TokenKind::LeftBrace)?;
        let body = self.parse_block_statement()?;
        let span = fn_span.to(body.span);

        Ok(Expr::new(ExprKind::Function { params, body }, span))
    }

    /// Parses the comma-separated identifier list of a function literal.
    /// The cursor sits on `(` on entry and on `)` on success.
    fn parse_function_params(&mut self) -> Result<Vec<String>, ParseError> {
        let mut params = Vec::new();

        self.advance();
        while self.current.kind != TokenKind::RightParen && self.current.kind != TokenKind::Eof {
            if self.current.kind != TokenKind::Ident {
                return Err(ParseError::expected_identifier(&self.current));
            }

            params.push(self.current.text.to_string());
            self.advance();

            if self.current.kind == TokenKind::Comma {
                self.advance();
            }
        }

        if self.current.kind != TokenKind::RightParen {
            return Err(ParseError::expected_token(
                TokenKind::RightParen,
                &self.current,
            ));
        }

        Ok(params)
    }

    /// Parses a call expression: `'${' expr (','? expr)* '}'`.
    ///
    /// Inside the braces the context switches to [`Context::Call`], so `;`
    /// and newlines no longer terminate and the arguments may span lines.
    /// On success the cursor sits on the closing `}`.
    fn parse_call_expression(&mut self) -> Result<Expr, ParseError> {
        let open_span = self.current.span;

        self.advance();
        let args = self.parse_call_arguments(Context::Call)?;

        if self.current.kind != TokenKind::RightBrace {
            return Err(ParseError::unterminated_call(open_span));
        }

        let span = open_span.to(self.current.span);
        Ok(Expr::new(ExprKind::Call { args }, span))
    }
}
