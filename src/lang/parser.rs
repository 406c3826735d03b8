//! Parser for the Logo language.
//!
//! Recursive descent directly over the [`Lexer`]'s token stream. Lookahead is
//! limited to the lexer's single pushback slot, so every decision is made on
//! the next token alone. The first syntax error aborts the parse.

use std::rc::Rc;

use super::ast::*;
use super::error::LogoError;
use super::lexer::Lexer;
use super::token::{Token, TokenKind};

pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self {
            lexer: Lexer::new(source),
        }
    }

    /// Parse instructions until end of input into the top-level block.
    pub fn parse(&mut self) -> Result<Block, LogoError> {
        let mut body = Vec::new();
        while self.lexer.maybe_match(TokenKind::Eof)?.is_none() {
            body.push(self.expect_instruction()?);
        }
        Ok(Block::new(body))
    }

    /// Parse a bracketed instruction list, or a single bare instruction.
    pub fn parse_block(&mut self) -> Result<Node, LogoError> {
        if self.lexer.maybe_match(TokenKind::LBrace)?.is_none() {
            return self.expect_instruction();
        }

        let mut body = Vec::new();
        while self.lexer.maybe_match(TokenKind::RBrace)?.is_none() {
            body.push(self.expect_instruction()?);
        }
        Ok(Node::Block(Block::new(body)))
    }

    /// Parse a number or symbol. Leaves any other token unconsumed.
    pub fn parse_expression(&mut self) -> Result<Option<Expr>, LogoError> {
        if let Some(token) = self.lexer.maybe_match(TokenKind::Number)? {
            return parse_number(&token).map(|n| Some(Expr::Number(n)));
        }
        if let Some(token) = self.lexer.maybe_match(TokenKind::Symbol)? {
            return Ok(Some(Expr::Symbol(token.text().to_string())));
        }
        Ok(None)
    }

    /// Parse one instruction, or `None` if the next token starts none.
    pub fn parse_instruction(&mut self) -> Result<Option<Node>, LogoError> {
        if self.lexer.maybe_match(TokenKind::To)?.is_some() {
            return self.parse_procedure().map(Some);
        }
        if self.lexer.maybe_match(TokenKind::Rotate)?.is_some() {
            let n = self.expect_expression(TokenKind::Rotate)?;
            return Ok(Some(Node::Rotate(n)));
        }
        if self.lexer.maybe_match(TokenKind::Forward)?.is_some() {
            let n = self.expect_expression(TokenKind::Forward)?;
            return Ok(Some(Node::Forward(n)));
        }
        if self.lexer.maybe_match(TokenKind::Backward)?.is_some() {
            let n = self.expect_expression(TokenKind::Backward)?;
            return Ok(Some(Node::Backward(n)));
        }
        if self.lexer.maybe_match(TokenKind::PenDown)?.is_some() {
            return Ok(Some(Node::PenDown));
        }
        if self.lexer.maybe_match(TokenKind::PenUp)?.is_some() {
            return Ok(Some(Node::PenUp));
        }
        if self.lexer.maybe_match(TokenKind::Repeat)?.is_some() {
            let times = self.expect_expression(TokenKind::Repeat)?;
            let block = self.parse_block()?;
            return Ok(Some(Node::Repeat {
                times,
                block: Box::new(block),
            }));
        }
        if let Some(name) = self.lexer.maybe_match(TokenKind::Identifier)? {
            let mut arguments = Vec::new();
            while let Some(expr) = self.parse_expression()? {
                arguments.push(expr);
            }
            return Ok(Some(Node::ProcedureCall(ProcedureCall {
                procedure_name: name.text().to_string(),
                arguments,
            })));
        }
        Ok(None)
    }

    /// `to <name> <:arg>* <instruction>* end`, with `to` already consumed.
    fn parse_procedure(&mut self) -> Result<Node, LogoError> {
        let name = self.lexer.match_token(TokenKind::Identifier)?;

        let mut arguments = Vec::new();
        while let Some(symbol) = self.lexer.maybe_match(TokenKind::Symbol)? {
            arguments.push(symbol.text().to_string());
        }

        let mut body = Vec::new();
        while self.lexer.maybe_match(TokenKind::End)?.is_none() {
            body.push(self.expect_instruction()?);
        }

        Ok(Node::Procedure(Rc::new(Procedure {
            name: name.text().to_string(),
            arguments,
            body: Block::new(body),
        })))
    }

    fn expect_instruction(&mut self) -> Result<Node, LogoError> {
        match self.parse_instruction()? {
            Some(node) => Ok(node),
            None => {
                let token = self.lexer.pop()?;
                Err(unexpected(&token))
            }
        }
    }

    fn expect_expression(&mut self, after: TokenKind) -> Result<Expr, LogoError> {
        match self.parse_expression()? {
            Some(expr) => Ok(expr),
            None => {
                let token = self.lexer.peek()?;
                Err(LogoError::syntax(
                    format!("expecting a number or symbol after '{after}' got '{token}'"),
                    token.position,
                ))
            }
        }
    }
}

fn parse_number(token: &Token) -> Result<f64, LogoError> {
    let value: f64 = token.text().parse().map_err(|_| {
        LogoError::syntax(format!("invalid number '{}'", token.text()), token.position)
    })?;
    if !value.is_finite() {
        return Err(LogoError::syntax(
            format!("number out of range '{}'", token.text()),
            token.position,
        ));
    }
    Ok(value)
}

fn unexpected(token: &Token) -> LogoError {
    LogoError::syntax(format!("unexpected '{token}'"), token.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::position::FilePosition;

    fn parse(src: &str) -> Block {
        Parser::new(src).parse().unwrap()
    }

    #[test]
    fn parse_forward() {
        assert_eq!(
            parse("forward 10"),
            Block::new(vec![Node::Forward(Expr::Number(10.0))])
        );
    }

    #[test]
    fn parse_movement_and_pen() {
        let block = parse("backward :d rotate -45.5 penup pendown");
        assert_eq!(
            block.body,
            vec![
                Node::Backward(Expr::Symbol(":d".to_string())),
                Node::Rotate(Expr::Number(-45.5)),
                Node::PenUp,
                Node::PenDown,
            ]
        );
    }

    #[test]
    fn parse_repeat_bracketed() {
        let block = parse("repeat 4 [ forward 10 rotate 90 ]");
        assert_eq!(
            block.body,
            vec![Node::Repeat {
                times: Expr::Number(4.0),
                block: Box::new(Node::Block(Block::new(vec![
                    Node::Forward(Expr::Number(10.0)),
                    Node::Rotate(Expr::Number(90.0)),
                ]))),
            }]
        );
    }

    #[test]
    fn parse_repeat_single_instruction_body() {
        let block = parse("repeat 3 forward 5 penup");
        assert_eq!(block.len(), 2);
        assert_eq!(
            block.body[0],
            Node::Repeat {
                times: Expr::Number(3.0),
                block: Box::new(Node::Forward(Expr::Number(5.0))),
            }
        );
        assert_eq!(block.body[1], Node::PenUp);
    }

    #[test]
    fn parse_nested_repeat() {
        let block = parse("repeat 2 [ repeat 3 [ forward 1 ] rotate 180 ]");
        let Node::Repeat { block: outer, .. } = &block.body[0] else {
            panic!("expected repeat, got {:?}", block.body[0]);
        };
        let Node::Block(inner) = outer.as_ref() else {
            panic!("expected block, got {outer:?}");
        };
        assert_eq!(inner.len(), 2);
        assert!(matches!(inner.body[0], Node::Repeat { .. }));
    }

    #[test]
    fn parse_empty_program() {
        assert!(parse("  # nothing here\n").is_empty());
    }

    #[test]
    fn parse_procedure_definition() {
        let block = parse("to square :s repeat 4 [ forward :s rotate 90 ] end");
        let Node::Procedure(proc) = &block.body[0] else {
            panic!("expected procedure, got {:?}", block.body[0]);
        };
        assert_eq!(proc.name, "square");
        assert_eq!(proc.arguments, vec![":s".to_string()]);
        assert_eq!(proc.arity(), 1);
        assert_eq!(proc.body.len(), 1);
    }

    #[test]
    fn parse_procedure_without_arguments() {
        let block = parse("TO dot penup END");
        let Node::Procedure(proc) = &block.body[0] else {
            panic!("expected procedure");
        };
        assert_eq!(proc.arity(), 0);
        assert_eq!(proc.body.body, vec![Node::PenUp]);
    }

    #[test]
    fn parse_call_greedy_arguments() {
        let block = parse("poly 5 :len 72 forward 1");
        assert_eq!(
            block.body[0],
            Node::ProcedureCall(ProcedureCall {
                procedure_name: "poly".to_string(),
                arguments: vec![
                    Expr::Number(5.0),
                    Expr::Symbol(":len".to_string()),
                    Expr::Number(72.0),
                ],
            })
        );
        assert_eq!(block.body[1], Node::Forward(Expr::Number(1.0)));
    }

    #[test]
    fn parse_consecutive_calls() {
        let block = parse("star flower 3");
        assert_eq!(block.len(), 2);
        let Node::ProcedureCall(first) = &block.body[0] else {
            panic!("expected call");
        };
        assert!(first.arguments.is_empty());
    }

    #[test]
    fn missing_expression_is_error() {
        let err = Parser::new("forward penup").parse().unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(err.position, Some(FilePosition::new(1, 8)));
    }

    #[test]
    fn unclosed_bracket_is_error() {
        let err = Parser::new("repeat 2 [ forward 1").parse().unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(err.message, "unexpected 'EOF'");
    }

    #[test]
    fn stray_closing_bracket_is_error() {
        let err = Parser::new("forward 1\n]").parse().unwrap_err();
        assert_eq!(err.message, "unexpected ']'");
        assert_eq!(err.position, Some(FilePosition::new(2, 0)));
    }

    #[test]
    fn procedure_name_must_be_identifier() {
        let err = Parser::new("to forward end").parse().unwrap_err();
        assert_eq!(err.message, "expecting 'IDENTIFIER' got 'FORWARD'");
    }

    #[test]
    fn missing_end_is_error() {
        let err = Parser::new("to sq forward 1").parse().unwrap_err();
        assert!(err.is_syntax());
    }

    #[test]
    fn oversized_number_is_error() {
        let src = format!("forward {}", "9".repeat(400));
        let err = Parser::new(&src).parse().unwrap_err();
        assert!(err.is_syntax());
        assert!(err.message.starts_with("number out of range '999"));
        assert_eq!(err.position, Some(FilePosition::new(1, 8)));
    }

    #[test]
    fn lexer_errors_propagate() {
        let err = Parser::new("forward 12.").parse().unwrap_err();
        assert!(err.is_syntax());
    }
}
