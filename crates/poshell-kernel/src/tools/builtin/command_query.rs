//! Get-Command — list the registered cmdlets.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::render::render_table;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext, ParamSchema};

/// Get-Command: table of every registered cmdlet, built from the
/// schema list so the output tracks the registry automatically.
pub struct GetCommand;

#[async_trait]
impl Cmdlet for GetCommand {
    fn name(&self) -> &str {
        "Get-Command"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Get-Command", "List the commands available in the session").param(
            ParamSchema::optional("-Name", "Case-insensitive name substring to filter by"),
        )
    }

    async fn run(&self, args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let filter = args.flag_value("-Name").map(str::to_lowercase);

        let rows: Vec<Vec<String>> = ctx
            .schemas
            .iter()
            .filter(|s| match &filter {
                Some(f) => s.name.to_lowercase().contains(f),
                None => true,
            })
            .map(|s| {
                vec![
                    "Cmdlet".to_string(),
                    s.name.clone(),
                    "1.0.0.0".to_string(),
                ]
            })
            .collect();

        Ok(CmdletOutput::table(render_table(
            &["CommandType", "Name", "Version"],
            &rows,
        )))
    }
}
