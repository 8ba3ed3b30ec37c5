//! logicalc - a propositional logic calculator
//!
//! Usage:
//!   logicalc              Start interactive REPL
//!   logicalc -c "1 ^ 0"   Evaluate a single line of actions
//!   logicalc script.lc    Execute a script file

mod cli;
mod rcfile;
mod repl;
mod terminal;

use cli::{execute_command, execute_script, parse_args, print_help, print_version};
use rcfile::load_config;
use repl::run_repl;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args);

    let mut logger = env_logger::Builder::from_default_env();
    if cli.trace {
        logger.filter_level(log::LevelFilter::Trace);
    }
    logger.init();

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    if let Some(cmd) = cli.command {
        return execute_command(&cmd, cli.config.as_deref());
    }

    if let Some(script) = cli.script {
        return execute_script(&script, cli.config.as_deref());
    }

    let config = load_config(cli.config.as_deref());
    match run_repl(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("REPL error: {}", e);
            ExitCode::FAILURE
        }
    }
}
