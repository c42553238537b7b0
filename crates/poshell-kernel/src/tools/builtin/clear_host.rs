//! Clear-Host — clear the host display.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext};

/// Clear-Host: empty output; clearing the screen is the host's job.
pub struct ClearHost;

#[async_trait]
impl Cmdlet for ClearHost {
    fn name(&self) -> &str {
        "Clear-Host"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Clear-Host", "Clear the host display")
    }

    async fn run(&self, _args: &Args, _ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        Ok(CmdletOutput::text(""))
    }
}
