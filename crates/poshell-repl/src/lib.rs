//! Interactive loop for the poshell interpreter.

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use poshell_kernel::{CommandResult, Interpreter};

/// Run the interactive REPL until EOF or an exit command.
pub fn run() -> Result<()> {
    let rt = tokio::runtime::Runtime::new().context("creating tokio runtime")?;
    let mut interp = Interpreter::new();
    let mut editor = DefaultEditor::new().context("initializing line editor")?;

    println!(
        "PoShell v{} — simulated PowerShell session. Type 'exit' to quit.\n",
        env!("CARGO_PKG_VERSION")
    );

    loop {
        match editor.readline(&interp.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
                    break;
                }
                if let Err(e) = editor.add_history_entry(trimmed) {
                    tracing::warn!("failed to record history entry: {e}");
                }

                let result = rt.block_on(interp.execute_command(trimmed));
                print_result(&result);
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C clears the line, like every shell.
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("reading input"),
        }
    }

    Ok(())
}

/// Execute a single command string and print its result.
///
/// Used by `poshell -c <command>`. Returns the command's success flag
/// so main can map it to an exit code.
pub fn run_command(command: &str) -> Result<bool> {
    let rt = tokio::runtime::Runtime::new().context("creating tokio runtime")?;
    let mut interp = Interpreter::new();
    let result = rt.block_on(interp.execute_command(command));
    print_result(&result);
    Ok(result.success)
}

fn print_result(result: &CommandResult) {
    if result.success {
        if !result.output.is_empty() {
            println!("{}", result.output);
        }
    } else if let Some(error) = &result.error {
        eprintln!("{error}");
    }
}
