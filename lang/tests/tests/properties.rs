//! Laws every run must obey.

use pretty_assertions::assert_eq;
use rayon::prelude::*;
use simple_dynamics::{Env, Eval, run};
use simple_syntax::{Node, VarName, build::*};
use simple_tests::utils::env;

fn envs() -> Vec<Env> {
    vec![Env::new(), env([("x", num(1))]), env([("x", bool(false)), ("y", num(-3))])]
}

#[test]
fn terminal_reduce_is_identity() {
    for e in envs() {
        for t in [num(0), num(-12), bool(true), bool(false), do_nothing()] {
            assert!(!t.is_reducible());
            assert_eq!(t.clone().reduce(e.clone()), Ok((t, e.clone())));
        }
    }
}

#[test]
fn merge_is_right_biased() {
    let a = env([("x", num(1)), ("y", num(2))]);
    let b = env([("y", num(20)), ("z", num(30))]);
    let merged = a.merge(&b);
    for (k, v) in b.bindings() {
        assert_eq!(merged.get(k.plain()), Some(v));
    }
    assert_eq!(merged["x"], num(1));
    assert_eq!(a, env([("x", num(1)), ("y", num(2))]));
    assert_eq!(b, env([("y", num(20)), ("z", num(30))]));

    let wide = env([("x", num(1)), ("y", num(2)), ("z", num(3)), ("w", num(4))]);
    let wider = wide.clone() + [(VarName::from("v"), num(5)), (VarName::from("x"), num(-1))];
    for overlay in [env([("x", num(-1))]), env([("x", num(-1)), ("q", num(0))]), wider] {
        for (left, right) in [(&wide, &overlay), (&a, &overlay), (&overlay, &wide)] {
            let merged = left.merge(right);
            for (k, v) in right.bindings() {
                assert_eq!(merged.get(k.plain()), Some(v));
            }
            for (k, v) in left.bindings() {
                if right.get(k.plain()).is_none() {
                    assert_eq!(merged.get(k.plain()), Some(v));
                }
            }
        }
    }
}

#[test]
fn reassignment_survives_other_bindings() {
    let program = while_(lt(var("x"), num(5)), assign("x", add(var("x"), num(1))));
    let (node, e) = run(program, env([("x", num(0)), ("y", num(0))])).unwrap();
    assert_eq!(node, do_nothing());
    assert_eq!(e, env([("x", num(5)), ("y", num(0))]));
    let (_, e) = run(assign("x", num(7)), env([("x", num(1)), ("y", num(2))])).unwrap();
    assert_eq!(e, env([("x", num(7)), ("y", num(2))]));
}

#[test]
fn evaluate_agrees_with_stepping() {
    let e = env([("x", num(4)), ("y", num(9))]);
    let exprs: Vec<Node> = vec![
        add(num(2), num(3)),
        mul(var("x"), add(var("y"), num(1))),
        lt(mul(var("x"), var("x")), add(var("y"), var("y"))),
        add(add(add(num(1), num(2)), num(3)), add(num(4), var("x"))),
    ];
    for expr in exprs {
        let evaluated = expr.clone().evaluate(e.clone()).unwrap();
        let (mut node, mut env) = (expr, e.clone());
        while node.is_reducible() {
            (node, env) = node.reduce(env).unwrap();
        }
        assert_eq!((node, env), evaluated);
    }
}

#[test]
fn assignment_changes_one_binding() {
    let before = env([("x", num(5)), ("y", num(6)), ("z", bool(true))]);
    let (node, after) = run(assign("y", add(var("x"), var("y"))), before.clone()).unwrap();
    assert_eq!(node, do_nothing());
    assert_eq!(after, before.extended("y".into(), num(11)));
}

#[test]
fn sequence_elides_in_one_step() {
    for second in [assign("x", num(1)), while_(bool(false), do_nothing()), num(3)] {
        let (node, e) = seq(do_nothing(), second.clone()).reduce(Env::new()).unwrap();
        assert_eq!(node, second);
        assert_eq!(e, Env::new());
    }
}

#[test]
fn while_desugars_in_one_step() {
    let cases = [
        (bool(true), do_nothing()),
        (lt(var("i"), num(10)), assign("i", add(var("i"), num(1)))),
        (var("go"), seq(assign("go", bool(false)), do_nothing())),
    ];
    for (cond, body) in cases {
        let stmt = while_(cond.clone(), body.clone());
        let (node, _) = stmt.clone().reduce(Env::new()).unwrap();
        assert_eq!(node, if_(cond, seq(body, stmt), do_nothing()));
    }
}

#[test]
fn parallel_runs_are_isolated() {
    let results: Vec<_> = (1..=64i64)
        .into_par_iter()
        .map(|n| {
            let program = while_(lt(var("x"), num(n)), assign("x", add(var("x"), num(1))));
            run(program, env([("x", num(0))])).unwrap().1
        })
        .collect();
    for (n, e) in (1..=64i64).zip(results) {
        assert_eq!(e, env([("x", num(n))]));
    }
}
