//! Get-ChildItem — list items at the current location.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::render::render_table;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext, ParamSchema};

/// Get-ChildItem: directory listing of the current location.
pub struct GetChildItem;

#[async_trait]
impl Cmdlet for GetChildItem {
    fn name(&self) -> &str {
        "Get-ChildItem"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Get-ChildItem", "List the items in a location").param(
            ParamSchema::optional("Path", "Location to list; defaults to the current location"),
        )
    }

    async fn run(&self, args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let location = args
            .bare(0)
            .map(str::to_string)
            .unwrap_or_else(|| ctx.session.current_location.clone());

        let rows: Vec<Vec<String>> = ctx
            .files
            .list_items(&location)
            .into_iter()
            .map(|e| vec![e.mode, e.last_write_time, e.length, e.name])
            .collect();

        Ok(CmdletOutput::table(render_table(
            &["Mode", "LastWriteTime", "Length", "Name"],
            &rows,
        )))
    }
}
