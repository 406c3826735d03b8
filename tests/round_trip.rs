//! Render → re-parse round-trip over generated programs.

use proptest::prelude::*;

use turtle_logo::lang::token::TokenKind;
use turtle_logo::lang::*;

fn expr() -> impl Strategy<Value = Expr> {
    prop_oneof![
        (-1.0e6..1.0e6f64).prop_map(Expr::Number),
        (0u32..500).prop_map(|n| Expr::Number(f64::from(n))),
        symbol().prop_map(Expr::Symbol),
    ]
}

fn symbol() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,5}".prop_map(|s| format!(":{s}"))
}

fn name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,6}"
        .prop_filter("keywords are not names", |s| {
            TokenKind::keyword(&s.to_lowercase()).is_none()
        })
}

fn leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        expr().prop_map(Node::Forward),
        expr().prop_map(Node::Backward),
        expr().prop_map(Node::Rotate),
        Just(Node::PenUp),
        Just(Node::PenDown),
        (name(), prop::collection::vec(expr(), 0..3)).prop_map(|(procedure_name, arguments)| {
            Node::ProcedureCall(ProcedureCall {
                procedure_name,
                arguments,
            })
        }),
    ]
}

fn node() -> impl Strategy<Value = Node> {
    leaf().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            (expr(), prop::collection::vec(inner.clone(), 0..4)).prop_map(|(times, body)| {
                Node::Repeat {
                    times,
                    block: Box::new(Node::Block(Block::new(body))),
                }
            }),
            (expr(), inner.clone()).prop_map(|(times, single)| Node::Repeat {
                times,
                block: Box::new(single),
            }),
            (
                name(),
                prop::collection::vec(symbol(), 0..3),
                prop::collection::vec(inner, 0..4)
            )
                .prop_map(|(name, arguments, body)| {
                    Node::Procedure(std::rc::Rc::new(Procedure {
                        name,
                        arguments,
                        body: Block::new(body),
                    }))
                }),
        ]
    })
}

proptest! {
    #[test]
    fn rendered_program_reparses_equal(body in prop::collection::vec(node(), 0..6)) {
        let program = Block::new(body);
        let text = program.to_string();
        let reparsed = Interpreter::parse(&text);
        prop_assert!(reparsed.is_ok(), "failed to reparse {:?}: {:?}", text, reparsed);
        prop_assert_eq!(program, reparsed.unwrap());
    }
}

#[test]
fn parsed_sample_round_trips() {
    let src = "to flower :n :len repeat :n [ repeat 4 [ forward :len rotate 90 ] rotate 30 ] end\n\
               penup backward 20 pendown flower 12 40";
    let first = Interpreter::parse(src).unwrap();
    let second = Interpreter::parse(&first.to_string()).unwrap();
    assert_eq!(first, second);
}
