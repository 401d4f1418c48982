//! Interactive session for the calculator.
//!
//! Reads command lines with line editing and history, printing what each
//! line produces. Errors are reported and the session continues with the
//! stack as it was before the failing command.

use std::path::PathBuf;

use polycalc_stack::{Calculator, Output};
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use tracing::debug;

use crate::{print_outputs, Args, Verbosity};

const HISTORY_FILE: &str = ".polycalc_history";

const HELP: &str = "\
Words are read left to right; anything that is not a command is pushed.
  x^2-1  push <poly>      push a polynomial
  add +  sub -  mul *     combine the top two (second op top)
  div /                   truncated quotient
  diff d  integ i         derivative, antiderivative
  dup  swap  pop  clear   stack manipulation
  eval <x>                evaluate the top at x
  defint <a> <b>          integral of the top from a to b
  print p  stack s        show the top, show the whole stack
  help  quit              this text, leave";

fn history_path(args: &Args) -> Option<PathBuf> {
    if args.no_history {
        return None;
    }
    let path = args
        .history_file
        .clone()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(HISTORY_FILE));
    Some(path)
}

/// Run the interactive REPL mode
pub(crate) fn run_interactive(
    calc: &mut Calculator,
    args: &Args,
    verbosity: Verbosity,
) -> Result<(), ReadlineError> {
    let config = Config::builder().auto_add_history(true).build();
    let mut rl = DefaultEditor::with_config(config)?;

    let history = history_path(args);
    if let Some(path) = &history {
        if let Err(e) = rl.load_history(path) {
            debug!(path = %path.display(), error = %e, "no history loaded");
        }
    }

    if verbosity >= Verbosity::Normal {
        println!("polycalc v{}", env!("CARGO_PKG_VERSION"));
        println!("Type help for commands, quit to leave.");
        println!();
    }

    loop {
        match rl.readline("poly> ") {
            Ok(input) => {
                let input = input.trim();
                if input.is_empty() {
                    continue;
                }
                match input {
                    "quit" | "exit" => break,
                    "help" => {
                        println!("{HELP}");
                        continue;
                    }
                    _ => {}
                }

                match calc.execute_line(input) {
                    Ok(outputs) if outputs.is_empty() => {
                        // show where the line left us
                        if let Ok(top) = calc.stack().peek() {
                            println!("{}", Output::Poly(top.clone()));
                        }
                    }
                    Ok(outputs) => print_outputs(&outputs),
                    Err(e) => eprintln!("Error: {e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                if verbosity >= Verbosity::Normal {
                    println!("CTRL-C");
                }
                break;
            }
            Err(ReadlineError::Eof) => {
                if verbosity >= Verbosity::Normal {
                    println!("CTRL-D");
                }
                break;
            }
            Err(err) => return Err(err),
        }
    }

    if let Some(path) = &history {
        if let Err(e) = rl.save_history(path) {
            debug!(path = %path.display(), error = %e, "history not saved");
        }
    }
    Ok(())
}
