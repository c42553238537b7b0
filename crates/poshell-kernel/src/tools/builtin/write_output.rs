//! Write-Output — echo arguments back as text.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext, ParamSchema};

/// Write-Output: the joined arguments, verbatim.
pub struct WriteOutput;

#[async_trait]
impl Cmdlet for WriteOutput {
    fn name(&self) -> &str {
        "Write-Output"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Write-Output", "Write the given values to the output stream")
            .param(ParamSchema::optional("InputObject", "Values to write"))
    }

    async fn run(&self, args: &Args, _ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        Ok(CmdletOutput::text(args.join_all()))
    }
}
