//! Cmdlet system.
//!
//! Every built-in command implements the same `Cmdlet` trait and is
//! registered in the `CmdletRegistry` at interpreter construction.
//!
//! ```text
//! CmdletRegistry
//! └── Builtins (Get-ChildItem, Set-Location, Get-Process, ...)
//! ```

pub mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::register_builtins;
pub use context::ExecContext;
pub use registry::CmdletRegistry;
pub use traits::{Args, Cmdlet, CmdletOutput, CmdletSchema, ParamSchema};
