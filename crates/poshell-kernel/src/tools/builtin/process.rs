//! Get-Process — list simulated processes.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::render::render_table;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext, ParamSchema};

/// Get-Process: fixed process table, filterable by name substring.
pub struct GetProcess;

#[async_trait]
impl Cmdlet for GetProcess {
    fn name(&self) -> &str {
        "Get-Process"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Get-Process", "List the processes running on the machine").param(
            ParamSchema::optional("Name", "Case-insensitive name substring to filter by"),
        )
    }

    async fn run(&self, args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let filter = args.bare(0).map(str::to_lowercase);

        let rows: Vec<Vec<String>> = ctx
            .system
            .processes()
            .into_iter()
            .filter(|p| match &filter {
                Some(f) => p.name.to_lowercase().contains(f),
                None => true,
            })
            .map(|p| {
                vec![
                    p.handles.to_string(),
                    p.npm_kb.to_string(),
                    p.pm_kb.to_string(),
                    p.ws_kb.to_string(),
                    format!("{:.2}", p.cpu_seconds),
                    p.id.to_string(),
                    p.name,
                ]
            })
            .collect();

        Ok(CmdletOutput::table(render_table(
            &["Handles", "NPM(K)", "PM(K)", "WS(K)", "CPU(s)", "Id", "ProcessName"],
            &rows,
        )))
    }
}
