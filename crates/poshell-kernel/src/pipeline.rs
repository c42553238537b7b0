//! Pipeline execution.
//!
//! Stages are split on the literal `" | "` separator and executed left
//! to right through the ordinary tokenize→resolve→dispatch path. Only
//! the last stage's output is reported; earlier stages run for their
//! session-state effects and their text is discarded. Inter-stage data
//! flow is intentionally absent — hosts depend on the discard
//! behavior, so it must not be upgraded to real pipe semantics here.

use crate::error::ShellError;
use crate::lexer::tokenize;
use crate::tools::{CmdletOutput, CmdletRegistry, ExecContext};

/// The stage separator: a pipe with one space on each side.
pub const PIPE_SEPARATOR: &str = " | ";

/// Execute every stage of `line`, returning the last stage's output.
///
/// The first failing stage aborts the pipeline with its error; later
/// stages do not run.
pub async fn run_pipeline(
    registry: &CmdletRegistry,
    ctx: &mut ExecContext,
    line: &str,
) -> Result<CmdletOutput, ShellError> {
    let stages: Vec<&str> = line.split(PIPE_SEPARATOR).collect();
    tracing::debug!(stages = stages.len(), "running pipeline");

    let mut last = CmdletOutput::text("");
    for stage in stages {
        let tokens = tokenize(stage);
        let Some((typed, arg_tokens)) = tokens.split_first() else {
            // An empty stage contributes nothing.
            continue;
        };
        last = crate::dispatch::dispatch(registry, ctx, typed, arg_tokens).await?;
    }
    Ok(last)
}
