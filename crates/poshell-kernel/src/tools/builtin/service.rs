//! Get-Service — list simulated services.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::render::render_table;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext, ParamSchema};

/// Get-Service: fixed service table, filterable by name substring.
pub struct GetService;

#[async_trait]
impl Cmdlet for GetService {
    fn name(&self) -> &str {
        "Get-Service"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Get-Service", "List the services on the machine").param(
            ParamSchema::optional("Name", "Case-insensitive name substring to filter by"),
        )
    }

    async fn run(&self, args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let filter = args.bare(0).map(str::to_lowercase);

        let rows: Vec<Vec<String>> = ctx
            .system
            .services()
            .into_iter()
            .filter(|s| match &filter {
                Some(f) => s.name.to_lowercase().contains(f),
                None => true,
            })
            .map(|s| vec![s.status, s.name, s.display_name])
            .collect();

        Ok(CmdletOutput::table(render_table(
            &["Status", "Name", "DisplayName"],
            &rows,
        )))
    }
}
