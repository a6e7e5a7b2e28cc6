//! Programs bundled with the interpreter, each with the outcome it must reach.

use crate::err::{DriverError, Result};
use simple_dynamics::Env;
use simple_syntax::{Node, build::*};

pub struct Program {
    pub name: &'static str,
    pub about: &'static str,
    pub node: Node,
    pub env: Env,
    /// the node the run must end on
    pub result: Node,
    /// bindings that must hold once the run is over; others are not checked
    pub expect: Env,
}

fn env<const N: usize>(bindings: [(&str, Node); N]) -> Env {
    bindings.into_iter().collect()
}

pub fn library() -> Vec<Program> {
    vec![
        Program {
            name: "arith",
            about: "nested arithmetic folds to a number",
            node: mul(num(2), add(num(2), num(3))),
            env: Env::new(),
            result: num(10),
            expect: Env::new(),
        },
        Program {
            name: "compare",
            about: "comparison yields a boolean",
            node: lt(num(2), add(num(2), num(3))),
            env: Env::new(),
            result: bool(true),
            expect: Env::new(),
        },
        Program {
            name: "variables",
            about: "variables are looked up in the environment",
            node: add(var("x"), var("y")),
            env: env([("x", num(3)), ("y", num(4))]),
            result: num(7),
            expect: Env::new(),
        },
        Program {
            name: "assign",
            about: "assignment rebinds a variable",
            node: assign("x", add(var("x"), num(1))),
            env: env([("x", num(2))]),
            result: do_nothing(),
            expect: env([("x", num(3))]),
        },
        Program {
            name: "if",
            about: "a true condition picks the consequence",
            node: if_(var("x"), assign("y", num(1)), assign("y", num(2))),
            env: env([("x", bool(true))]),
            result: do_nothing(),
            expect: env([("x", bool(true)), ("y", num(1))]),
        },
        Program {
            name: "sequence",
            about: "statements run in order and see earlier assignments",
            node: seq(assign("x", add(num(1), num(1))), assign("y", add(var("x"), num(3)))),
            env: Env::new(),
            result: do_nothing(),
            expect: env([("x", num(2)), ("y", num(5))]),
        },
        Program {
            name: "while",
            about: "a loop triples x until it reaches 5",
            node: while_(lt(var("x"), num(5)), assign("x", mul(var("x"), num(3)))),
            env: env([("x", num(1))]),
            result: do_nothing(),
            expect: env([("x", num(9))]),
        },
        Program {
            name: "factorial",
            about: "5! by counting n down to 1",
            node: block([
                assign("acc", num(1)),
                while_(
                    lt(num(1), var("n")),
                    block([
                        assign("acc", mul(var("acc"), var("n"))),
                        assign("n", add(var("n"), num(-1))),
                    ]),
                ),
            ]),
            env: env([("n", num(5))]),
            result: do_nothing(),
            expect: env([("acc", num(120)), ("n", num(1))]),
        },
    ]
}

pub fn find(name: &str) -> Result<Program> {
    library()
        .into_iter()
        .find(|program| program.name == name)
        .ok_or_else(|| DriverError::UnknownProgram(name.to_string()))
}
