//! Runs bundled SIMPLE programs under a configuration.

pub mod conf;
pub mod err;
pub mod library;


pub use conf::Conf;
pub use err::*;
pub use library::{Program, find, library};

use simple_dynamics::{Env, Machine};
use simple_syntax::Node;
use std::io::Write;

/// What a finished run leaves behind.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub node: Node,
    pub env: Env,
    pub steps: usize,
}

#[derive(Default)]
pub struct Driver {
    pub conf: Conf,
}

impl Driver {
    pub fn new(conf: Conf) -> Self {
        Driver { conf }
    }

    /// Run `program`, writing trace lines to `out` if tracing is on.
    pub fn run(&self, program: &Program, out: &mut dyn Write) -> Result<Outcome> {
        log::info!("Running program: {}", program.name);
        let mut machine = match self.conf.trace {
            | true => Machine::traced(program.node.clone(), out),
            | false => Machine::new(program.node.clone()),
        };
        let env = match self.conf.step_limit {
            | Some(limit) => machine.run_bounded(program.env.clone(), limit)?,
            | None => machine.run(program.env.clone())?,
        };
        let steps = machine.steps();
        let node = machine.into_node();
        log::info!("Program {} finished after {} steps", program.name, steps);
        Ok(Outcome { node, env, steps })
    }

    /// Run `program` silently and check it ends where it says it does.
    pub fn test(&self, program: &Program, aloud: bool) -> Result<Outcome> {
        let outcome = self.run(program, &mut std::io::sink())?;
        if outcome.node != program.result {
            let err = format!("expected to end on `{}`, got `{}`", program.result, outcome.node);
            Err(DriverError::TestFailed(err))?
        }
        for (name, value) in program.expect.bindings() {
            match outcome.env.get(name.plain()) {
                | Some(found) if found == value => {}
                | Some(found) => {
                    let err = format!("expected `{}` to be `{}`, got `{}`", name, value, found);
                    Err(DriverError::TestFailed(err))?
                }
                | None => {
                    let err = format!("expected `{}` to be `{}`, but it is unbound", name, value);
                    Err(DriverError::TestFailed(err))?
                }
            }
        }
        if aloud {
            let mut out = std::io::stdout();
            use colored::Colorize;
            let _ = writeln!(out, "test {} ... {}", program.name, "ok".green());
        }
        Ok(outcome)
    }
}
