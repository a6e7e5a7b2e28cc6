//! End-to-end runs of small programs through the machine.

use pretty_assertions::assert_eq;
use simple_dynamics::{Env, Eval, EvalError, Machine, run};
use simple_syntax::build::*;
use simple_tests::utils::env;

#[test]
fn add_evaluates() {
    let res = add(num(2), num(3)).evaluate(Env::new()).unwrap();
    assert_eq!(res, (num(5), Env::new()));
}

#[test]
fn increment_through_machine() {
    let program = assign("x", add(var("x"), num(1)));
    let (node, e) = run(program, env([("x", num(2))])).unwrap();
    assert_eq!(node, do_nothing());
    assert_eq!(e, env([("x", num(3))]));
}

#[test]
fn if_takes_consequence() {
    let program = if_(var("x"), assign("y", num(1)), assign("y", num(2)));
    let (_, e) = run(program, env([("x", bool(true))])).unwrap();
    assert_eq!(e.get("y"), Some(&num(1)));
}

#[test]
fn while_triples_until_five() {
    let program = while_(lt(var("x"), num(5)), assign("x", mul(var("x"), num(3))));
    let (node, e) = run(program, env([("x", num(1))])).unwrap();
    assert_eq!(node, do_nothing());
    assert_eq!(e, env([("x", num(9))]));
}

#[test]
fn sequence_evaluates() {
    let program = seq(assign("x", add(num(1), num(1))), assign("y", add(var("x"), num(3))));
    let (node, e) = program.evaluate(Env::new()).unwrap();
    assert_eq!(node, do_nothing());
    assert_eq!(e, env([("x", num(2)), ("y", num(5))]));
}

#[test]
fn while_trace() {
    let program = while_(lt(var("x"), num(5)), assign("x", mul(var("x"), num(3))));
    let mut out = Vec::new();
    let mut machine = Machine::traced(program, &mut out);
    machine.run(env([("x", num(1))])).unwrap();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.first(), Some(&"while («x < 5») { «x = «x * 3»» }"));
    assert_eq!(
        lines[1],
        "if («x < 5») { ««x = «x * 3»»; while («x < 5») { «x = «x * 3»» }» } else { do-nothing }"
    );
    assert_eq!(lines.last(), Some(&"do-nothing"));
}

// Variables resolve all the way to a value, and an unbound name is an error
// rather than a placeholder.
#[test]
fn unbound_variable_aborts_run() {
    let program = seq(assign("x", num(1)), assign("y", var("z")));
    assert_eq!(run(program, Env::new()), Err(EvalError::UnboundVariable("z".into())));
}

#[test]
fn variable_bound_to_expression() {
    let program = assign("y", var("x"));
    let (_, e) = run(program, env([("x", mul(num(6), num(7)))])).unwrap();
    assert_eq!(e["y"], num(42));
}
