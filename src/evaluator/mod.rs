//! Tree-walking evaluator for the Dang language.
//!
//! This module walks the AST produced by the [`crate::parser`] and reduces
//! it to a [`Value`]. Evaluation is recursive descent with no side effects
//! beyond the [`Environment`] threaded through it.
//!
//! # Return propagation
//!
//! A `return` statement wraps its value in the internal
//! [`Value::Return`] marker. Statement sequences short-circuit as soon as
//! a statement yields the marker, and block statements pass it through
//! unchanged so outer scopes keep unwinding. The wrapper is removed at the
//! program exit and at call boundaries, so user code never observes it.
//!
//! # Failure
//!
//! Evaluation fails fast: the first [`EvalError`] aborts the walk. Errors
//! carry a message, a stable integer code, and the span of the offending
//! node.
//!
//! # Examples
//!
//! ```
//! use dang::evaluator::{self, Environment, Value};
//! use dang::parser::Parser;
//! use dang::scanner::Scanner;
//!
//! let program = Parser::new(Scanner::new("1 + 2 * 3")).parse_program().unwrap();
//! let mut env = Environment::new();
//! let value = evaluator::eval_program(&program, &mut env).unwrap();
//! assert_eq!(value, Value::Integer(7));
//! ```
//!
//! # See Also
//!
//! * [`crate::ast`] - The tree being walked
//! * [`crate::parser`] - Produces the tree

mod env;
mod error;
mod value;

#[cfg(test)]
mod tests;

pub use env::Environment;
pub use error::{EvalError, EvalErrorKind};
pub use value::Value;

use crate::ast::{Block, Expr, ExprKind, InfixOp, PrefixOp, Program, Stmt, StmtKind};
use crate::token::Span;

/// Evaluates a program to its final value.
///
/// Statements evaluate in order; a `return` short-circuits the rest. The
/// program exit is a call boundary, so a returned value comes back
/// unwrapped. An empty program evaluates to [`Value::Null`].
///
/// # Errors
///
/// Returns the first [`EvalError`] encountered; evaluation does not
/// recover.
pub fn eval_program(program: &Program, env: &mut Environment<'_>) -> Result<Value, EvalError> {
    let value = eval_statements(&program.statements, env)?;
    Ok(value.unwrap_return())
}

/// Evaluates a statement sequence, short-circuiting on a `Return` marker.
///
/// The marker propagates unchanged so enclosing blocks keep unwinding.
fn eval_statements(statements: &[Stmt], env: &mut Environment<'_>) -> Result<Value, EvalError> {
    let mut result = Value::Null;

    for stmt in statements {
        result = eval_statement(stmt, env)?;
        if result.is_return() {
            break;
        }
    }

    Ok(result)
}

fn eval_statement(stmt: &Stmt, env: &mut Environment<'_>) -> Result<Value, EvalError> {
    match &stmt.kind {
        StmtKind::Let { name, init } => {
            let value = match init {
                Some(init) => eval_expression(init, env)?,
                None => Value::Null,
            };

            // An initializer that hit a `return` keeps unwinding instead
            // of being bound.
            if value.is_return() {
                return Ok(value);
            }

            env.set(name.clone(), value);
            Ok(Value::Null)
        }
        StmtKind::Return(value) => {
            let inner = match value {
                Some(value) => eval_expression(value, env)?.unwrap_return(),
                None => Value::Null,
            };

            Ok(Value::Return(Box::new(inner)))
        }
        StmtKind::Expr(expr) => eval_expression(expr, env),
    }
}

fn eval_expression(expr: &Expr, env: &mut Environment<'_>) -> Result<Value, EvalError> {
    match &expr.kind {
        ExprKind::Identifier(name) => env
            .get(name)
            .ok_or_else(|| EvalError::undefined_identifier(name, expr.span)),
        ExprKind::IntegerLiteral(value) => Ok(Value::Integer(*value)),
        ExprKind::BooleanLiteral(value) => Ok(Value::Boolean(*value)),
        ExprKind::Prefix { op, operand } => {
            let value = eval_expression(operand, env)?;
            eval_prefix(*op, value, expr.span)
        }
        ExprKind::Infix { op, left, right } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            eval_infix(*op, left, right, expr.span)
        }
        ExprKind::If {
            condition,
            consequence,
            alternative,
        } => {
            let condition = eval_expression(condition, env)?;

            if condition.truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Ok(Value::Null)
            }
        }
        ExprKind::Function { .. } => Err(EvalError::unsupported("function literals", expr.span)),
        // Placeholder call semantics: the first child's value, unwrapped at
        // the call boundary. Real application is future work.
        ExprKind::Call { args } => match args.first() {
            Some(first) => Ok(eval_expression(first, env)?.unwrap_return()),
            None => Ok(Value::Null),
        },
    }
}

/// Evaluates a block's statements.
///
/// Blocks share the caller's environment; only call boundaries introduce
/// new scopes.
fn eval_block(block: &Block, env: &mut Environment<'_>) -> Result<Value, EvalError> {
    eval_statements(&block.statements, env)
}

fn eval_prefix(op: PrefixOp, value: Value, span: Span) -> Result<Value, EvalError> {
    match op {
        PrefixOp::Not => Ok(Value::Boolean(!value.truthy())),
        PrefixOp::Neg => match value {
            Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
            other => Err(EvalError::minus_operand(other.type_name(), span)),
        },
    }
}

fn eval_infix(op: InfixOp, left: Value, right: Value, span: Span) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Integer(left), Value::Integer(right)) => {
            eval_integer_infix(op, left, right, span)
        }
        (Value::Boolean(left), Value::Boolean(right)) => {
            eval_boolean_infix(op, left, right, span)
        }
        // A boolean on either side coerces the other operand by
        // truthiness and compares as booleans.
        (Value::Boolean(left), right) => eval_boolean_infix(op, left, right.truthy(), span),
        (left, Value::Boolean(right)) => eval_boolean_infix(op, left.truthy(), right, span),
        (left, right) => Err(EvalError::infix_unsupported(
            op,
            left.type_name(),
            right.type_name(),
            span,
        )),
    }
}

fn eval_integer_infix(op: InfixOp, left: i64, right: i64, span: Span) -> Result<Value, EvalError> {
    let value = match op {
        InfixOp::Add => Value::Integer(left.wrapping_add(right)),
        InfixOp::Sub => Value::Integer(left.wrapping_sub(right)),
        InfixOp::Mul => Value::Integer(left.wrapping_mul(right)),
        InfixOp::Div => {
            if right == 0 {
                return Err(EvalError::division_by_zero(span));
            }
            Value::Integer(left.wrapping_div(right))
        }
        InfixOp::LessThan => Value::Boolean(left < right),
        InfixOp::GreaterThan => Value::Boolean(left > right),
        InfixOp::Equal => Value::Boolean(left == right),
        InfixOp::NotEqual => Value::Boolean(left != right),
    };

    Ok(value)
}

fn eval_boolean_infix(op: InfixOp, left: bool, right: bool, span: Span) -> Result<Value, EvalError> {
    match op {
        InfixOp::Equal => Ok(Value::Boolean(left == right)),
        InfixOp::NotEqual => Ok(Value::Boolean(left != right)),
        _ => Err(EvalError::boolean_operator(op, span)),
    }
}
