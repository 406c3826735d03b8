//! Abstract Syntax Tree for the Logo language.
//!
//! Nodes are plain values compared structurally. Procedure definitions are
//! reference counted so the environment can bind them without copying bodies.

use std::rc::Rc;

/// An argument expression: a literal or a `:name` reference.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Symbol(String),
}

/// A single executable instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Forward(Expr),
    Backward(Expr),
    Rotate(Expr),
    PenUp,
    PenDown,
    Block(Block),
    Repeat { times: Expr, block: Box<Node> },
    Procedure(Rc<Procedure>),
    ProcedureCall(ProcedureCall),
}

/// An ordered instruction sequence. Order is execution order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub body: Vec<Node>,
}

impl Block {
    pub fn new(body: Vec<Node>) -> Self {
        Self { body }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }
}

/// A `to ... end` definition. Arity is `arguments.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Procedure {
    pub name: String,
    pub arguments: Vec<String>,
    pub body: Block,
}

impl Procedure {
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureCall {
    pub procedure_name: String,
    pub arguments: Vec<Expr>,
}
