//! poshell-kernel: a simulated PowerShell session engine.
//!
//! This crate provides:
//!
//! - **Lexer**: quote-aware tokenization of command lines
//! - **Session**: location, variables, aliases, and loaded modules
//! - **Cmdlets**: the `Cmdlet` trait, registry, and built-in catalog
//! - **Pipeline**: sequential stage execution with last-stage output
//! - **Interpreter**: the `execute_command` façade and `CommandResult`
//!
//! Everything is simulated and in-memory: item, process, and network
//! cmdlets answer from fixed demo data behind capability traits.
//!
//! ```no_run
//! use poshell_kernel::Interpreter;
//!
//! # async fn demo() {
//! let mut interp = Interpreter::new();
//! let result = interp.execute_command("Get-Process chrome").await;
//! assert!(result.success);
//! # }
//! ```

pub mod backend;
pub mod dispatch;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod pipeline;
pub mod render;
pub mod result;
pub mod session;
pub mod tools;
pub mod value;

pub use error::ShellError;
pub use interpreter::{Interpreter, InterpreterConfig};
pub use result::{CommandResult, OutputShape};
pub use session::SessionState;
pub use value::Value;
