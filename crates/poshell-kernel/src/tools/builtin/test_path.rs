//! Test-Path — check whether a path exists on the simulated drive.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext, ParamSchema};

/// Test-Path: `"True"` or `"False"` against the known path set.
pub struct TestPath;

#[async_trait]
impl Cmdlet for TestPath {
    fn name(&self) -> &str {
        "Test-Path"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Test-Path", "Check whether a path exists")
            .param(ParamSchema::required("Path", "Path to test"))
    }

    async fn run(&self, args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let path = args
            .bare(0)
            .ok_or(ShellError::missing("Test-Path", "Path"))?;
        let exists = ctx.files.path_exists(path);
        Ok(CmdletOutput::text(if exists { "True" } else { "False" }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Args {
        Args::new(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[tokio::test]
    async fn known_prefix_is_true() {
        let mut ctx = ExecContext::simulated();
        let out = TestPath.run(&args(&["C:\\"]), &mut ctx).await.unwrap();
        assert_eq!(out.text, "True");
    }

    #[tokio::test]
    async fn unknown_drive_is_false() {
        let mut ctx = ExecContext::simulated();
        let out = TestPath
            .run(&args(&["Q:\\doesnotexist"]), &mut ctx)
            .await
            .unwrap();
        assert_eq!(out.text, "False");
    }

    #[tokio::test]
    async fn missing_path_is_an_error() {
        let mut ctx = ExecContext::simulated();
        let err = TestPath.run(&Args::default(), &mut ctx).await.unwrap_err();
        assert_eq!(err, ShellError::missing("Test-Path", "Path"));
    }
}
