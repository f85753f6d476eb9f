//! The program root node.

use std::fmt;

use super::stmt::Stmt;

/// The root node of a parsed Dang program: a sequence of statements.
///
/// A `Program` owns its whole statement tree; dropping it frees the AST.
///
/// # Examples
///
/// ```
/// use dang::parser::Parser;
/// use dang::scanner::Scanner;
///
/// let program = Parser::new(Scanner::new("let x 5")).parse_program().unwrap();
/// assert_eq!(program.statements.len(), 1);
/// assert_eq!(program.to_string(), "let x 5");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Program {
    /// The top-level statements, in source order.
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Creates an empty program.
    pub fn new() -> Self {
        Program {
            statements: Vec::new(),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
