use crate::{env::Env, err::*, eval::Eval, syntax::*};
use std::io::Write;

/// Drives a program to an irreducible node, one rewrite at a time.
pub struct Machine<'rt> {
    node: Node,
    steps: usize,
    /// receives one line per visited state when present
    trace: Option<&'rt mut dyn Write>,
}

impl<'rt> Machine<'rt> {
    pub fn new(node: impl Into<Node>) -> Self {
        Machine { node: node.into(), steps: 0, trace: None }
    }
    pub fn traced(node: impl Into<Node>, out: &'rt mut dyn Write) -> Self {
        Machine { node: node.into(), steps: 0, trace: Some(out) }
    }
    pub fn node(&self) -> &Node {
        &self.node
    }
    pub fn into_node(self) -> Node {
        self.node
    }
    /// Number of rewrites performed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }
    pub fn is_done(&self) -> bool {
        !self.node.is_reducible()
    }

    /// One rewrite. A finished machine is left alone and the count stays put.
    pub fn step(&mut self, env: Env) -> Result<Env> {
        if self.is_done() {
            return Ok(env);
        }
        let (node, env) = self.node.clone().reduce(env)?;
        self.node = node;
        self.steps += 1;
        Ok(env)
    }

    /// Step until done. A program that never gets there keeps this running.
    pub fn run(&mut self, env: Env) -> Result<Env> {
        self.run_until(env, None)
    }

    /// Like [`Machine::run`], but gives up with [`EvalError::StepLimit`]
    /// after `limit` rewrites.
    pub fn run_bounded(&mut self, env: Env, limit: usize) -> Result<Env> {
        self.run_until(env, Some(limit))
    }

    fn run_until(&mut self, mut env: Env, limit: Option<usize>) -> Result<Env> {
        let start = self.steps;
        while !self.is_done() {
            if let Some(limit) = limit {
                if self.steps - start >= limit {
                    Err(EvalError::StepLimit(limit))?
                }
            }
            self.emit(&env);
            env = self.step(env)?;
        }
        self.emit(&env);
        Ok(env)
    }

    fn emit(&mut self, env: &Env) {
        log::trace!("[{}] {}: {} | {}", self.steps, self.node.kind(), self.node, env);
        if let Some(out) = &mut self.trace {
            let _ = writeln!(out, "{}", self.node);
        }
    }
}

/// Run `node` to completion from `env`, returning the final node and bindings.
pub fn run(node: impl Into<Node>, env: Env) -> Result<(Node, Env)> {
    let mut machine = Machine::new(node);
    let env = machine.run(env)?;
    Ok((machine.into_node(), env))
}
