//! New-Item / Copy-Item / Move-Item / Remove-Item — simulated item ops.
//!
//! All four delegate to the `FileOps` capability and return its
//! confirmation line; nothing touches a real filesystem.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext, ParamSchema};

/// New-Item: create an item, defaulting to a `File`.
pub struct NewItem;

#[async_trait]
impl Cmdlet for NewItem {
    fn name(&self) -> &str {
        "New-Item"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("New-Item", "Create a new item")
            .param(ParamSchema::required("Path", "Path of the item to create"))
            .param(ParamSchema::optional("-ItemType", "File or Directory; defaults to File"))
    }

    async fn run(&self, args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let path = args.bare(0).ok_or(ShellError::missing("New-Item", "Path"))?;
        let item_type = args.flag_value("-ItemType").unwrap_or("File");
        Ok(CmdletOutput::text(ctx.files.create(path, item_type)))
    }
}

/// Copy-Item: copy source to destination.
pub struct CopyItem;

#[async_trait]
impl Cmdlet for CopyItem {
    fn name(&self) -> &str {
        "Copy-Item"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Copy-Item", "Copy an item to a new location")
            .param(ParamSchema::required("Path", "Source path"))
            .param(ParamSchema::required("Destination", "Destination path"))
    }

    async fn run(&self, args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let source = args.get(0).ok_or(ShellError::missing("Copy-Item", "Path"))?;
        let destination = args
            .get(1)
            .ok_or(ShellError::missing("Copy-Item", "Destination"))?;
        Ok(CmdletOutput::text(ctx.files.copy(source, destination)))
    }
}

/// Move-Item: move source to destination.
pub struct MoveItem;

#[async_trait]
impl Cmdlet for MoveItem {
    fn name(&self) -> &str {
        "Move-Item"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Move-Item", "Move an item to a new location")
            .param(ParamSchema::required("Path", "Source path"))
            .param(ParamSchema::required("Destination", "Destination path"))
    }

    async fn run(&self, args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let source = args.get(0).ok_or(ShellError::missing("Move-Item", "Path"))?;
        let destination = args
            .get(1)
            .ok_or(ShellError::missing("Move-Item", "Destination"))?;
        Ok(CmdletOutput::text(ctx.files.rename(source, destination)))
    }
}

/// Remove-Item: remove the item at a path.
pub struct RemoveItem;

#[async_trait]
impl Cmdlet for RemoveItem {
    fn name(&self) -> &str {
        "Remove-Item"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Remove-Item", "Remove an item")
            .param(ParamSchema::required("Path", "Path of the item to remove"))
    }

    async fn run(&self, args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let path = args
            .bare(0)
            .ok_or(ShellError::missing("Remove-Item", "Path"))?;
        Ok(CmdletOutput::text(ctx.files.remove(path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Args {
        Args::new(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[tokio::test]
    async fn new_item_defaults_to_file() {
        let mut ctx = ExecContext::simulated();
        let out = NewItem.run(&args(&["notes.txt"]), &mut ctx).await.unwrap();
        assert!(out.text.contains("File"));
        assert!(out.text.contains("notes.txt"));
    }

    #[tokio::test]
    async fn new_item_honors_item_type() {
        let mut ctx = ExecContext::simulated();
        let out = NewItem
            .run(&args(&["build", "-ItemType", "Directory"]), &mut ctx)
            .await
            .unwrap();
        assert!(out.text.contains("Directory"));
    }

    #[tokio::test]
    async fn copy_without_destination_names_the_parameter() {
        let mut ctx = ExecContext::simulated();
        let err = CopyItem
            .run(&args(&["onlyOneArg"]), &mut ctx)
            .await
            .unwrap_err();
        assert_eq!(err, ShellError::missing("Copy-Item", "Destination"));
        assert!(err.to_string().contains("Destination"));
    }

    #[tokio::test]
    async fn move_confirms_both_paths() {
        let mut ctx = ExecContext::simulated();
        let out = MoveItem
            .run(&args(&["a.txt", "b.txt"]), &mut ctx)
            .await
            .unwrap();
        assert!(out.text.contains("a.txt"));
        assert!(out.text.contains("b.txt"));
    }

    #[tokio::test]
    async fn remove_requires_a_path() {
        let mut ctx = ExecContext::simulated();
        let err = RemoveItem.run(&Args::default(), &mut ctx).await.unwrap_err();
        assert_eq!(err, ShellError::missing("Remove-Item", "Path"));
    }
}
