//! Get-ComputerInfo — simulated machine information.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext};

/// Get-ComputerInfo: fixed descriptive block from the system capability.
pub struct GetComputerInfo;

#[async_trait]
impl Cmdlet for GetComputerInfo {
    fn name(&self) -> &str {
        "Get-ComputerInfo"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new(
            "Get-ComputerInfo",
            "Display system and operating system properties",
        )
    }

    async fn run(&self, _args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        Ok(CmdletOutput::object(ctx.system.computer_info()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::OutputShape;

    #[tokio::test]
    async fn reports_the_fixed_block() {
        let mut ctx = ExecContext::simulated();
        let out = GetComputerInfo
            .run(&Args::default(), &mut ctx)
            .await
            .unwrap();
        assert_eq!(out.shape, OutputShape::Object);
        assert!(out.text.contains("WindowsProductName"));
        assert!(out.text.contains("OsArchitecture"));
    }
}
