//! Tree-walking evaluator.
//!
//! Executes a parsed [`Block`] against a [`Turtle`], binding procedures and
//! arguments in an [`Environment`].

use std::rc::Rc;

use super::ast::*;
use super::env::{Binding, Environment, ScopeId};
use super::error::{ErrorKind, LogoError};
use crate::turtle::Turtle;

pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

pub struct Evaluator<'t, T: Turtle + ?Sized> {
    env: Environment,
    turtle: &'t mut T,
    max_call_depth: usize,
    call_depth: usize,
}

impl<'t, T: Turtle + ?Sized> Evaluator<'t, T> {
    pub fn new(turtle: &'t mut T) -> Self {
        Self {
            env: Environment::new(),
            turtle,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            call_depth: 0,
        }
    }

    pub fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }

    /// The environment, with root bindings left by previous runs.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Execute a program in the root scope.
    pub fn run(&mut self, program: &Block) -> Result<(), LogoError> {
        let root = self.env.root();
        self.exec_block(program, root)
    }

    fn exec_block(&mut self, block: &Block, scope: ScopeId) -> Result<(), LogoError> {
        for node in &block.body {
            self.exec(node, scope)?;
        }
        Ok(())
    }

    fn exec(&mut self, node: &Node, scope: ScopeId) -> Result<(), LogoError> {
        match node {
            Node::Forward(n) => {
                let distance = self.eval_expr(n, scope)?;
                self.turtle.forward(distance);
            }
            Node::Backward(n) => {
                let distance = self.eval_expr(n, scope)?;
                self.turtle.backward(distance);
            }
            Node::Rotate(n) => {
                let angle = self.eval_expr(n, scope)?;
                self.turtle.left(angle);
            }
            Node::PenUp => self.turtle.pen_up(),
            Node::PenDown => self.turtle.pen_down(),
            Node::Block(block) => self.exec_block(block, scope)?,
            Node::Repeat { times, block } => {
                // `as` truncates toward zero, saturates, and maps NaN to 0.
                let count = self.eval_expr(times, scope)? as i64;
                for _ in 0..count {
                    self.exec(block, scope)?;
                }
            }
            Node::Procedure(procedure) => {
                tracing::debug!(
                    name = %procedure.name,
                    arity = procedure.arity(),
                    "procedure defined"
                );
                self.env.set(
                    scope,
                    procedure.name.clone(),
                    Binding::Procedure(Rc::clone(procedure)),
                );
            }
            Node::ProcedureCall(call) => self.call(call, scope)?,
        }
        Ok(())
    }

    fn eval_expr(&self, expr: &Expr, scope: ScopeId) -> Result<f64, LogoError> {
        match expr {
            Expr::Number(n) => Ok(*n),
            Expr::Symbol(name) => match self.env.resolve(scope, name) {
                Some(Binding::Number(value)) => Ok(*value),
                Some(Binding::Procedure(_)) => Err(LogoError::internal(format!(
                    "symbol '{name}' is bound to a procedure"
                ))),
                None => Err(LogoError::runtime(
                    ErrorKind::UnboundSymbol,
                    format!("unbound symbol '{name}'"),
                )),
            },
        }
    }

    fn call(&mut self, call: &ProcedureCall, scope: ScopeId) -> Result<(), LogoError> {
        let name = &call.procedure_name;
        let procedure = match self.env.resolve(scope, name) {
            Some(Binding::Procedure(procedure)) => Rc::clone(procedure),
            Some(Binding::Number(_)) => {
                return Err(LogoError::internal(format!(
                    "'{name}' is bound to a number, not a procedure"
                )));
            }
            None => {
                return Err(LogoError::runtime(
                    ErrorKind::UndefinedProcedure,
                    format!("cannot find the procedure '{name}'"),
                ));
            }
        };

        if procedure.arity() != call.arguments.len() {
            return Err(LogoError::runtime(
                ErrorKind::ArityMismatch,
                format!(
                    "wrong number of arguments for the procedure '{}' (needed {}, passed {})",
                    procedure.name,
                    procedure.arity(),
                    call.arguments.len()
                ),
            ));
        }

        if self.call_depth >= self.max_call_depth {
            return Err(LogoError::runtime(
                ErrorKind::RecursionLimit,
                format!(
                    "maximum call depth of {} exceeded calling '{name}'",
                    self.max_call_depth
                ),
            ));
        }

        let values = call
            .arguments
            .iter()
            .map(|arg| self.eval_expr(arg, scope))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(name = %name, args = ?values, depth = self.call_depth + 1, "call");

        let child = self.env.create_child(scope);
        for (param, value) in procedure.arguments.iter().zip(values) {
            self.env.set(child, param.clone(), Binding::Number(value));
        }

        self.call_depth += 1;
        let result = self.exec_block(&procedure.body, child);
        self.call_depth -= 1;
        self.env.release(child);
        result
    }
}
