//! Invoke-WebRequest — simulated HTTP request.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext, ParamSchema};

/// Invoke-WebRequest: canned response block for a required URI.
///
/// One of the two async seams in the catalog: the net capability
/// suspends cooperatively before answering from fixed data.
pub struct InvokeWebRequest;

#[async_trait]
impl Cmdlet for InvokeWebRequest {
    fn name(&self) -> &str {
        "Invoke-WebRequest"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Invoke-WebRequest", "Send a simulated HTTP request")
            .param(ParamSchema::required("-Uri", "Target URI"))
    }

    async fn run(&self, args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let uri = args
            .flag_value("-Uri")
            .or_else(|| args.bare(0))
            .ok_or(ShellError::missing("Invoke-WebRequest", "Uri"))?
            .to_string();

        let body = ctx.net.fetch(&uri).await;
        Ok(CmdletOutput::object(body))
    }
}
