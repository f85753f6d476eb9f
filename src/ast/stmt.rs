//! Statement and block nodes.

use std::fmt;

use crate::token::Span;

use super::expr::{Expr, ExprKind};

/// A statement in the Dang language.
#[derive(Debug, Clone)]
pub struct Stmt {
    /// What kind of statement this is, with its payload.
    pub kind: StmtKind,
    /// The source location of this statement.
    pub span: Span,
}

impl Stmt {
    /// Creates a new statement with the given kind and span.
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// The kind of a statement.
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// A `let` binding: `let name` or `let name initializer`.
    ///
    /// Note that Dang's `let` takes no `=`: the initializer expression
    /// follows the name directly, and is optional.
    Let {
        /// The bound name.
        name: String,
        /// The optional initializer expression.
        init: Option<Expr>,
    },

    /// A `return` statement with an optional value.
    Return(Option<Expr>),

    /// An expression evaluated for its value.
    Expr(Expr),
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Let { name, init } => {
                write!(f, "let {}", name)?;
                if let Some(init) = init {
                    write!(f, " {}", init)?;
                }
                Ok(())
            }
            StmtKind::Return(value) => {
                f.write_str("return")?;
                if let Some(value) = value {
                    write!(f, " {}", value)?;
                }
                Ok(())
            }
            // The call container re-renders in the juxtaposed statement
            // form, so that re-parsing rebuilds the same container shape
            // instead of nesting a second one.
            StmtKind::Expr(expr) => match &expr.kind {
                ExprKind::Call { args } if args.len() == 1 => {
                    if matches!(args[0].kind, ExprKind::Call { .. }) {
                        write!(f, "{}", args[0])
                    } else {
                        // A single non-call child is only kept boxed when
                        // the statement ended in ';'.
                        write!(f, "{};", args[0])
                    }
                }
                ExprKind::Call { args } if !args.is_empty() => {
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    Ok(())
                }
                _ => write!(f, "{}", expr),
            },
        }
    }
}

/// A braced statement sequence: the body of an `if` branch or a function
/// literal.
#[derive(Debug, Clone)]
pub struct Block {
    /// The statements in the block, in source order.
    pub statements: Vec<Stmt>,
    /// The source location of the block, from `{` to `}`.
    pub span: Span,
}

impl Block {
    /// Creates a new block with the given statements and span.
    pub fn new(statements: Vec<Stmt>, span: Span) -> Self {
        Block { statements, span }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{ }");
        }

        f.write_str("{ ")?;
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", stmt)?;
        }
        f.write_str(" }")
    }
}
