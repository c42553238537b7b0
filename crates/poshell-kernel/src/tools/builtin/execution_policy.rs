//! Get-ExecutionPolicy — report the stored policy.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext};

/// Get-ExecutionPolicy: the policy string seeded into the session.
pub struct GetExecutionPolicy;

#[async_trait]
impl Cmdlet for GetExecutionPolicy {
    fn name(&self) -> &str {
        "Get-ExecutionPolicy"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new(
            "Get-ExecutionPolicy",
            "Display the effective execution policy",
        )
    }

    async fn run(&self, _args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let policy = ctx
            .session
            .variables
            .get("ExecutionPolicy")
            .map(|v| v.render())
            .unwrap_or_else(|| "Restricted".to_string());
        Ok(CmdletOutput::text(policy))
    }
}
