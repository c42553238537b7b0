//! Test-Connection — simulated connectivity check.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::render::render_table;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext, ParamSchema};

/// Test-Connection: canned echo reply, target defaults to localhost.
pub struct TestConnection;

#[async_trait]
impl Cmdlet for TestConnection {
    fn name(&self) -> &str {
        "Test-Connection"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Test-Connection", "Send a simulated echo request").param(
            ParamSchema::optional("-ComputerName", "Target host; defaults to localhost"),
        )
    }

    async fn run(&self, args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let target = args
            .flag_value("-ComputerName")
            .or_else(|| args.bare(0))
            .unwrap_or("localhost");

        let reply = ctx.net.ping(target).await;
        let row = vec![
            reply.source,
            reply.destination,
            reply.address,
            reply.bytes.to_string(),
            reply.time_ms.to_string(),
        ];

        Ok(CmdletOutput::table(render_table(
            &["Source", "Destination", "IPV4Address", "Bytes", "Time(ms)"],
            &[row],
        )))
    }
}
