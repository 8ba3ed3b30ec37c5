use crate::rcfile::load_config;
use crate::terminal::{execute_line, Screen};
use logicalc::{Action, Session};
use std::fs;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
#[derive(Debug, Default, PartialEq)]
pub(crate) struct CliArgs {
    pub(crate) command: Option<String>,
    pub(crate) script: Option<String>,
    pub(crate) config: Option<String>,
    pub(crate) help: bool,
    pub(crate) version: bool,
    pub(crate) trace: bool,
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "--trace" => {
                cli.trace = true;
            }
            "--config" => {
                if i + 1 < args.len() {
                    cli.config = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "-c" => {
                // Everything after -c is the command
                if i + 1 < args.len() {
                    cli.command = Some(args[i + 1..].join(" "));
                    break;
                }
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            path => {
                // Assume it's a script file if not a flag
                if !path.starts_with('-') {
                    cli.script = Some(path.to_string());
                }
            }
        }
        i += 1;
    }

    cli
}

pub(crate) fn print_help() {
    println!(
        r#"logicalc {} - propositional logic calculator

USAGE:
    logicalc                    Start interactive REPL
    logicalc -c <actions>       Run actions, evaluate, print the result
    logicalc <script>           Run a file of action lines
    logicalc --config <path>    Use a specific config file
    logicalc --trace            Log every lexer/converter/evaluator step
    logicalc --help             Show this help message
    logicalc --version          Show version

CONFIG:
    ~/.logicalc.toml            Loaded on startup (or $LOGICALC_CONFIG)
    LOGICALC_BANNER=1           Show startup banner
    RUST_LOG=debug              Log accepted/rejected tokens to stderr

SYMBOLS (tightest first):
    0 1                         Literals (false, true)
    ( )                         Grouping
    ~       NOT
    ^       AND
    v  ⊕    OR, XOR
    -> <->  IMPLIES, BICOND

ACTIONS:
    0 1 ( )                     Append a literal or grouping mark
    AND OR XOR NOT IMPLIES BICOND
                                Append a connective (names or symbols)
    del, delete                 Remove the last token
    C, clear                    Start over
    =, eval, evaluate           Evaluate the expression

    Several actions fit on one line, and symbols may be run together:
        1 AND ( 0 OR 1 ) =
        (1v0)^0=

    A token that cannot follow the current expression is ignored in the REPL
    and is an error in scripts and -c.

REPL COMMANDS:
    .help, .h                   Show this help
    .state, .s                  Show session state
    exit, quit                  Exit the REPL
"#,
        VERSION
    );
}

pub(crate) fn print_version() {
    println!("logicalc {}", VERSION);
}

/// Run a single action line, evaluating at the end if the line does not
pub(crate) fn execute_command(cmd: &str, config_path: Option<&str>) -> ExitCode {
    let config = load_config(config_path);
    let screen = Screen::default();
    let mut session = Session::with_config(screen.clone(), &config);

    let mut line = cmd.to_string();
    let ends_in_evaluate = matches!(
        Action::parse_line(cmd).map(|actions| actions.last().copied()),
        Ok(Some(Action::Evaluate))
    );
    if !ends_in_evaluate {
        line.push_str(" =");
    }

    match execute_line(&mut session, &line, true) {
        Ok(()) => {
            println!("{}", screen.text());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", screen.text());
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Execute a script file. Each line continues the same session; the display
/// is printed after every line.
pub(crate) fn execute_script(path: &str, config_path: Option<&str>) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let config = load_config(config_path);
    let screen = Screen::default();
    let mut session = Session::with_config(screen.clone(), &config);

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Err(e) = execute_line(&mut session, trimmed, true) {
            println!("{}", screen.text());
            eprintln!("Error at line {}: {}", line_num + 1, e);
            return ExitCode::FAILURE;
        }
        println!("{}", screen.text());
    }

    ExitCode::SUCCESS
}
