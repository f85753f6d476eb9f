//! Statement and block parsing.
//!
//! Statement parsers share one convention: on success the cursor sits on
//! the statement's terminator (`;`, newline, `}` per context, or end of
//! file), and the caller skips separator runs before the next statement.

use super::{Context, Parser};
use crate::ast::{Block, Expr, ExprKind, Stmt, StmtKind};
use crate::parser::error::ParseError;
use crate::parser::expr::Precedence;
use crate::token::TokenKind;

impl<'src> Parser<'src> {
    /// Parses a single statement in the given context.
    ///
    /// # Grammar
    ///
    /// ```text
    /// stmt := let | return | expr_stmt
    /// ```
    pub(super) fn parse_statement(&mut self, ctx: Context) -> Result<Stmt, ParseError> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(ctx),
            TokenKind::Return => self.parse_return_statement(ctx),
            _ => self.parse_expression_statement(ctx),
        }
    }

    /// Parses a let statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// let := 'let' IDENT expr? END
    /// ```
    ///
    /// There is no `=`: the optional initializer follows the name directly.
    fn parse_let_statement(&mut self, ctx: Context) -> Result<Stmt, ParseError> {
        let let_span = self.current.span;

        if self.peek.kind != TokenKind::Ident {
            return Err(ParseError::expected_identifier(&self.peek));
        }
        self.advance();

        let name = self.current.text.to_string();
        let name_span = self.current.span;

        // Bare `let x` with no initializer.
        if self.peek_ends_statement(ctx) {
            self.advance();
            return Ok(Stmt::new(
                StmtKind::Let { name, init: None },
                let_span.to(name_span),
            ));
        }

        self.advance();
        let init = self.parse_expression(Precedence::Lowest, ctx)?;
        let span = let_span.to(init.span);

        self.require_end_of_statement(ctx)?;

        Ok(Stmt::new(
            StmtKind::Let {
                name,
                init: Some(init),
            },
            span,
        ))
    }

    /// Parses a return statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// return := 'return' expr? END
    /// ```
    fn parse_return_statement(&mut self, ctx: Context) -> Result<Stmt, ParseError> {
        let return_span = self.current.span;

        // Bare `return` with no value.
        if self.peek_ends_statement(ctx) {
            self.advance();
            return Ok(Stmt::new(StmtKind::Return(None), return_span));
        }

        self.advance();
        let value = self.parse_expression(Precedence::Lowest, ctx)?;
        let span = return_span.to(value.span);

        self.require_end_of_statement(ctx)?;

        Ok(Stmt::new(StmtKind::Return(Some(value)), span))
    }

    /// Parses an expression statement: the juxtaposed call form.
    ///
    /// # Grammar
    ///
    /// ```text
    /// expr_stmt := expr (','? expr)* END
    /// ```
    ///
    /// The expressions are collected into a call container. When the
    /// container holds exactly one expression that is not itself a call,
    /// and the statement did not end in `;`, the lone expression is
    /// promoted to be the statement directly — so `1 + 2` is an infix
    /// expression, not a one-argument call.
    fn parse_expression_statement(&mut self, ctx: Context) -> Result<Stmt, ParseError> {
        let start_span = self.current.span;
        let mut args = self.parse_call_arguments(ctx)?;

        let promote_single = args.len() == 1
            && !matches!(args[0].kind, ExprKind::Call { .. })
            && self.current.kind != TokenKind::Semicolon;

        if promote_single && let Some(expr) = args.pop() {
            let span = expr.span;
            return Ok(Stmt::new(StmtKind::Expr(expr), span));
        }

        let span = match (args.first(), args.last()) {
            (Some(first), Some(last)) => first.span.to(last.span),
            _ => start_span,
        };

        Ok(Stmt::new(
            StmtKind::Expr(Expr::new(ExprKind::Call { args }, span)),
            span,
        ))
    }

    /// Parses a sequence of expressions separated by optional commas, until
    /// the current token terminates a statement in the given context.
    ///
    /// Shared between expression statements (where `;`/newline/`}` end the
    /// sequence) and `${ … }` calls (where only `}` does). Inside a call,
    /// newlines separate arguments instead of terminating, so argument
    /// lists may span lines. On return the cursor sits on the terminator
    /// or at end of file.
    pub(super) fn parse_call_arguments(&mut self, ctx: Context) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();

        loop {
            if ctx == Context::Call {
                while self.current.kind == TokenKind::Newline {
                    self.advance();
                }
            }

            if self.current_ends_statement(ctx) || self.current.kind == TokenKind::Eof {
                break;
            }

            let arg = self.parse_expression(Precedence::Lowest, ctx)?;
            args.push(arg);

            self.advance();
            if self.current.kind == TokenKind::Comma {
                self.advance();
            }
        }

        Ok(args)
    }

    /// Parses a block statement: `'{' (stmt (';' | '\n')+)* '}'`.
    ///
    /// The cursor sits on `{` on entry and on `}` on success. Statements
    /// inside parse in [`Context::Block`], where `}` terminates.
    pub(super) fn parse_block_statement(&mut self) -> Result<Block, ParseError> {
        let open_span = self.current.span;
        self.advance();

        let mut statements = Vec::new();

        loop {
            self.skip_separators();

            match self.current.kind {
                TokenKind::RightBrace => break,
                TokenKind::Eof => return Err(ParseError::unterminated_block(open_span)),
                _ => {}
            }

            let stmt = self.parse_statement(Context::Block)?;
            statements.push(stmt);
        }

        let span = open_span.to(self.current.span);
        Ok(Block::new(statements, span))
    }
}
