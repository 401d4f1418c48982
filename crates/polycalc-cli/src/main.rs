//! Command-line front end for the polycalc stack calculator.
//!
//! Runs command lines given with `-e`, a script file, piped standard input,
//! or an interactive session when standard input is a terminal.

mod config;
mod repl;

use std::fs;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use polycalc_stack::{Calculator, Output};
use serde::Deserialize;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use config::CliConfig;

/// Verbosity level
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Verbosity {
    /// Results only
    Quiet,
    /// Results and banners
    Normal,
    /// Informational logging
    Verbose,
    /// Debug logging, including every stack operation
    Debug,
    /// Trace logging
    Trace,
}

/// Stack calculator for polynomials with rational coefficients
#[derive(Parser, Debug, Clone)]
#[command(name = "polycalc")]
#[command(version)]
#[command(about = "A postfix calculator for exact rational polynomials")]
pub(crate) struct Args {
    /// Script file with one command line per line. Reads stdin if omitted.
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,

    /// Execute a command line (repeatable), e.g. -e "x+1 x-1 mul p"
    #[arg(short, long = "eval", value_name = "COMMANDS")]
    eval: Vec<String>,

    /// Verbosity level
    #[arg(short, long, value_enum, default_value = "normal")]
    verbosity: Verbosity,

    /// Enable quiet mode (equivalent to --verbosity quiet)
    #[arg(short, long)]
    quiet: bool,

    /// Configuration file (YAML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Interactive history file
    #[arg(long, value_name = "FILE")]
    history_file: Option<PathBuf>,

    /// Do not load or save interactive history
    #[arg(long)]
    no_history: bool,
}

impl Args {
    fn effective_verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            self.verbosity
        }
    }
}

fn init_tracing(verbosity: Verbosity) -> Result<(), String> {
    let level = match verbosity {
        Verbosity::Quiet | Verbosity::Normal => return Ok(()),
        Verbosity::Verbose => Level::INFO,
        Verbosity::Debug => Level::DEBUG,
        Verbosity::Trace => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| format!("Failed to set tracing subscriber: {e}"))
}

fn print_outputs(outputs: &[Output]) {
    for output in outputs {
        println!("{output}");
    }
}

/// Runs lines until the first failure, which is returned with its line
/// number.
fn run_lines<I>(calc: &mut Calculator, source: &str, lines: I) -> Result<(), String>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    for (number, line) in lines.into_iter().enumerate() {
        let line = line.map_err(|e| format!("{source}: read error: {e}"))?;
        let outputs = calc
            .execute_line(&line)
            .map_err(|e| format!("{source}:{}: {e}", number + 1))?;
        print_outputs(&outputs);
    }
    Ok(())
}

fn exit_with(result: Result<(), String>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let mut args = Args::parse();

    let config = match CliConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    config.merge_with_args(&mut args);

    let verbosity = args.effective_verbosity();
    if let Err(e) = init_tracing(verbosity) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let mut calc = Calculator::new();

    if !args.eval.is_empty() {
        info!(lines = args.eval.len(), "running command-line input");
        let lines = args.eval.iter().cloned().map(Ok);
        return exit_with(run_lines(&mut calc, "-e", lines));
    }

    if let Some(path) = &args.script {
        info!(path = %path.display(), "running script");
        let result = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))
            .and_then(|contents| {
                let lines = contents.lines().map(|l| Ok(l.to_owned()));
                run_lines(&mut calc, &path.display().to_string(), lines)
            });
        return exit_with(result);
    }

    if io::stdin().is_terminal() {
        let result = repl::run_interactive(&mut calc, &args, verbosity).map_err(|e| {
            warn!(error = %e, "interactive session failed");
            e.to_string()
        });
        exit_with(result)
    } else {
        exit_with(run_lines(&mut calc, "<stdin>", io::stdin().lock().lines()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_quiet_overrides_verbosity() {
        let args = Args::parse_from(["polycalc", "-q", "--verbosity", "trace"]);
        assert_eq!(args.effective_verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_repeated_eval() {
        let args = Args::parse_from(["polycalc", "-e", "x+1", "-e", "p"]);
        assert_eq!(args.eval, ["x+1", "p"]);
        assert!(args.script.is_none());
    }

    #[test]
    fn test_run_lines_stops_at_first_error() {
        let mut calc = Calculator::new();
        let lines = ["x+1", "add", "x"].map(|l| Ok(l.to_owned()));
        assert_eq!(
            run_lines(&mut calc, "test", lines),
            Err("test:2: stack underflow: needs 2 element(s), has 1".to_owned())
        );
        assert_eq!(calc.stack().len(), 1);
    }

    #[test]
    fn test_run_lines_success() {
        let mut calc = Calculator::new();
        let lines = ["x+1 x-1", "mul"].map(|l| Ok(l.to_owned()));
        assert_eq!(run_lines(&mut calc, "test", lines), Ok(()));
        assert_eq!(calc.stack().peek().unwrap().to_string(), "x^2-1");
    }
}
