//! Abstract Syntax Tree definitions for the Dang language.
//!
//! This module defines the data structures that represent parsed Dang
//! programs. The AST is produced by the [`crate::parser`] and consumed by
//! the [`crate::evaluator`].
//!
//! # Structure
//!
//! The AST has a hierarchical structure:
//! - [`Program`] - The root node containing a sequence of statements
//! - [`Stmt`] - Statements: `let`, `return`, and expression statements
//! - [`Expr`] - Expressions: literals, identifiers, prefix/infix
//!   operations, `if` expressions, function literals, and `${ … }` calls
//! - [`Block`] - A braced statement sequence used by `if` and `fn`
//!
//! Each node kind is its own enum variant with typed payloads, so the
//! evaluator dispatches exhaustively and malformed shapes are
//! unrepresentable. Nodes carry [`Span`](crate::token::Span)s pointing back
//! into the source.
//!
//! # Rendering
//!
//! All nodes implement [`std::fmt::Display`], rendering themselves back to
//! source text that parses to a structurally equal tree. Operator
//! expressions render fully parenthesized, which makes the grouping chosen
//! by the parser visible in the output.
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::evaluator`] - Walks the AST to produce values

mod expr;
mod program;
mod stmt;


pub use expr::{Expr, ExprKind, InfixOp, PrefixOp};
pub use program::Program;
pub use stmt::{Block, Stmt, StmtKind};
