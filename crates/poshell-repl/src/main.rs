//! poshell CLI entry point.
//!
//! Usage:
//!   poshell                Interactive REPL
//!   poshell -c <command>   Execute one command and exit

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    // Respects RUST_LOG for kernel dispatch/pipeline traces.
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None => {
            poshell_repl::run()?;
            Ok(ExitCode::SUCCESS)
        }

        Some("--help" | "-h") => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }

        Some("--version" | "-V") => {
            println!("poshell {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }

        Some("-c") => {
            let command = args.get(2).context("-c requires a command argument")?;
            let ok = poshell_repl::run_command(command)?;
            Ok(if ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Some(unknown) => {
            eprintln!("Unknown option: {unknown}");
            eprintln!("Run 'poshell --help' for usage.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_help() {
    println!(
        r#"poshell v{} — simulated PowerShell session

Usage:
  poshell                  Interactive REPL
  poshell -c <command>     Execute one command and exit

Options:
  -c <command>             Command string to execute
  -h, --help               Show this help
  -V, --version            Show version

Examples:
  poshell
  poshell -c 'Get-Process chrome'
  poshell -c 'Get-Process | Sort-Object'
"#,
        env!("CARGO_PKG_VERSION")
    );
}
