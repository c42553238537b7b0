//! Command dispatch — the single execution path for one command.
//!
//! ```text
//! tokens ──▶ alias resolution ──▶ registry lookup ──▶ cmdlet.run()
//! ```
//!
//! The unrecognized-command error carries the token the user actually
//! typed, not the alias-resolved form, so typos stay visible.

use crate::error::ShellError;
use crate::tools::{Args, CmdletOutput, CmdletRegistry, ExecContext};

/// Resolve and execute one command.
///
/// `typed` is the first token as the user wrote it; `arg_tokens` are
/// the remaining tokens of the stage.
pub async fn dispatch(
    registry: &CmdletRegistry,
    ctx: &mut ExecContext,
    typed: &str,
    arg_tokens: &[String],
) -> Result<CmdletOutput, ShellError> {
    let canonical = ctx.session.resolve_alias(typed);
    tracing::debug!(typed, canonical = %canonical, "dispatching command");

    let cmdlet = registry
        .get(&canonical)
        .ok_or_else(|| ShellError::UnrecognizedCommand {
            command: typed.to_string(),
        })?;

    let args = Args::new(arg_tokens.to_vec());
    cmdlet.run(&args, ctx).await
}
