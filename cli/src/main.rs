mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use simple_driver::{Conf, Driver, Result, find, library};
use simple_syntax::Formatter;

fn main() {
    let Cli { command, verbose } = Cli::parse();
    let filter = if verbose { "trace" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
    if let Err(err) = launch(command) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn launch(command: Commands) -> Result<()> {
    match command {
        | Commands::List => {
            for program in library() {
                println!("{:<12} {}", program.name.bold(), program.about);
            }
        }
        | Commands::Show { name, width } => {
            let program = find(&name)?;
            println!("{}", Formatter::with_width(width).render(&program.node));
            println!("{} {}", "with".dimmed(), program.env);
        }
        | Commands::Run { name, config, trace, limit, unbounded } => {
            let mut conf = Conf::load_or_default(config.as_deref())?;
            conf.trace |= trace;
            if let Some(limit) = limit {
                conf.step_limit = Some(limit);
            }
            if unbounded {
                conf.step_limit = None;
            }
            let program = find(&name)?;
            let outcome = Driver::new(conf).run(&program, &mut std::io::stdout())?;
            println!("{} {}", "=>".green(), outcome.node);
            println!("{} {}", "env".dimmed(), outcome.env);
            println!("{} {}", "steps".dimmed(), outcome.steps);
        }
        | Commands::Test { config } => {
            let driver = Driver::new(Conf::load_or_default(config.as_deref())?);
            let programs = library();
            let mut err_names = Vec::new();
            for program in &programs {
                if let Err(err) = driver.test(program, true) {
                    println!("test {} ... {}\n\t{}", program.name, "FAILED".red(), err);
                    err_names.push(program.name);
                }
            }
            println!(
                "Conclusion: {} / {} tests passed",
                programs.len() - err_names.len(),
                programs.len()
            );
            if !err_names.is_empty() {
                Err(simple_driver::DriverError::TestFailed(err_names.join(", ")))?
            }
        }
    }
    Ok(())
}
