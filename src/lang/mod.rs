//! Logo interpreter — source text → tokens → AST → turtle commands.

pub mod ast;
pub mod env;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod position;
pub mod render;
pub mod token;

pub use ast::*;
pub use error::{ErrorKind, LogoError};
pub use eval::Evaluator;
pub use position::FilePosition;

use crate::config::InterpreterConfig;
use crate::turtle::Turtle;
use parser::Parser;

/// Runs Logo programs.
///
/// Each [`run`](Interpreter::run) starts from an empty root scope.
#[derive(Debug, Clone)]
pub struct Interpreter {
    max_call_depth: usize,
}

impl Interpreter {
    pub fn new(config: &InterpreterConfig) -> Self {
        Self {
            max_call_depth: config.max_call_depth,
        }
    }

    /// Parse source into the top-level block.
    pub fn parse(source: &str) -> Result<Block, LogoError> {
        Parser::new(source).parse()
    }

    /// Parse and execute `source`, driving `turtle`.
    ///
    /// Nothing runs if the source fails to parse. A runtime error stops
    /// execution; commands already issued stay issued.
    pub fn run<T: Turtle + ?Sized>(&self, source: &str, turtle: &mut T) -> Result<(), LogoError> {
        let program = Self::parse(source)?;
        tracing::debug!(instructions = program.len(), "parsed program");
        Evaluator::new(turtle)
            .with_max_call_depth(self.max_call_depth)
            .run(&program)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(&InterpreterConfig::default())
    }
}
