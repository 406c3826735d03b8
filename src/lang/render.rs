//! Canonical source rendering.
//!
//! Renders AST nodes back to program text with lowercase keywords, one
//! top-level instruction per line, and `[ ... ]` only where the parser saw
//! brackets. Parsing the output yields an equal tree.

use std::fmt;

use super::ast::*;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Symbol(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Forward(n) => write!(f, "forward {n}"),
            Node::Backward(n) => write!(f, "backward {n}"),
            Node::Rotate(n) => write!(f, "rotate {n}"),
            Node::PenUp => f.write_str("penup"),
            Node::PenDown => f.write_str("pendown"),
            Node::Block(block) => {
                f.write_str("[")?;
                for node in &block.body {
                    write!(f, " {node}")?;
                }
                f.write_str(" ]")
            }
            Node::Repeat { times, block } => write!(f, "repeat {times} {block}"),
            Node::Procedure(procedure) => write!(f, "{procedure}"),
            Node::ProcedureCall(call) => {
                f.write_str(&call.procedure_name)?;
                for arg in &call.arguments {
                    write!(f, " {arg}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "to {}", self.name)?;
        for arg in &self.arguments {
            write!(f, " {arg}")?;
        }
        for node in &self.body.body {
            write!(f, " {node}")?;
        }
        f.write_str(" end")
    }
}

/// A program: one instruction per line.
impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.body {
            writeln!(f, "{node}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::lang::parser::Parser;

    fn canonical(src: &str) -> String {
        Parser::new(src).parse().unwrap().to_string()
    }

    #[test]
    fn render_lowercases_keywords() {
        assert_eq!(canonical("FORWARD 10 PenUp"), "forward 10\npenup\n");
    }

    #[test]
    fn render_numbers() {
        assert_eq!(canonical("rotate -2.50 forward 007"), "rotate -2.5\nforward 7\n");
    }

    #[test]
    fn render_repeat_keeps_bracket_choice() {
        assert_eq!(
            canonical("repeat 4 [forward 10 rotate 90] repeat 2 penup"),
            "repeat 4 [ forward 10 rotate 90 ]\nrepeat 2 penup\n"
        );
    }

    #[test]
    fn render_procedure_and_call() {
        assert_eq!(
            canonical("to Tri :a :b\n repeat 3 [ forward :a rotate :b ]\nend\nTri 10 120"),
            "to Tri :a :b repeat 3 [ forward :a rotate :b ] end\nTri 10 120\n"
        );
    }

    #[test]
    fn rendered_text_reparses_to_same_tree() {
        let src = "to sq :s repeat 4 [ forward :s rotate 90 ] end\n\
                   repeat 6 [ sq 25.5 rotate 60 ] penup backward 3";
        let first = Parser::new(src).parse().unwrap();
        let second = Parser::new(&first.to_string()).parse().unwrap();
        assert_eq!(first, second);
    }
}
