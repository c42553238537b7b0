//! Get-Content — read the content of an item.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext, ParamSchema};

/// Get-Content: canned body selected by filename pattern.
pub struct GetContent;

#[async_trait]
impl Cmdlet for GetContent {
    fn name(&self) -> &str {
        "Get-Content"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Get-Content", "Read the content of an item")
            .param(ParamSchema::required("Path", "Item to read"))
    }

    async fn run(&self, args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let path = args
            .bare(0)
            .ok_or(ShellError::missing("Get-Content", "Path"))?;
        Ok(CmdletOutput::text(ctx.files.read_content(path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Args {
        Args::new(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[tokio::test]
    async fn readme_pattern_gets_the_readme_body() {
        let mut ctx = ExecContext::simulated();
        let out = GetContent
            .run(&args(&["README.md"]), &mut ctx)
            .await
            .unwrap();
        assert!(out.text.contains("Readme"));
    }

    #[tokio::test]
    async fn script_pattern_gets_the_script_body() {
        let mut ctx = ExecContext::simulated();
        let out = GetContent
            .run(&args(&["deploy.ps1"]), &mut ctx)
            .await
            .unwrap();
        assert!(out.text.contains("Write-Host"));
    }

    #[tokio::test]
    async fn missing_path_is_an_error() {
        let mut ctx = ExecContext::simulated();
        let err = GetContent.run(&Args::default(), &mut ctx).await.unwrap_err();
        assert_eq!(err, ShellError::missing("Get-Content", "Path"));
    }
}
