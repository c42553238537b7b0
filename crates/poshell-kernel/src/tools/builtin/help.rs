//! Get-Help — topic help, with schema detail for known cmdlets.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext, ParamSchema};

const OVERVIEW: &str = "\
TOPIC
    PoShell Help System

SHORT DESCRIPTION
    Displays help about PoShell cmdlets and concepts.

LONG DESCRIPTION
    Get-Help <cmdlet-name> shows help for a specific cmdlet, for
    example: Get-Help Get-Process.

    Get-Command lists every available cmdlet. Commands may be chained
    with the pipe operator, for example:
    Get-Process | Sort-Object | Select-Object";

/// Get-Help: overview without arguments, per-topic body with one.
pub struct GetHelp;

#[async_trait]
impl Cmdlet for GetHelp {
    fn name(&self) -> &str {
        "Get-Help"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Get-Help", "Display help about cmdlets and concepts")
            .param(ParamSchema::optional("Name", "Cmdlet or topic to describe"))
    }

    async fn run(&self, args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let Some(topic) = args.bare(0) else {
            return Ok(CmdletOutput::text(OVERVIEW));
        };

        let body = match find_schema(&ctx.schemas, topic) {
            Some(schema) => format_cmdlet_help(schema),
            None => format!(
                "TOPIC\n    {topic}\n\nDESCRIPTION\n    No detailed help is available for \
                 '{topic}'. Use Get-Command to list the available cmdlets."
            ),
        };
        Ok(CmdletOutput::text(body))
    }
}

fn find_schema<'a>(schemas: &'a [CmdletSchema], topic: &str) -> Option<&'a CmdletSchema> {
    schemas
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(topic))
}

fn format_cmdlet_help(schema: &CmdletSchema) -> String {
    let mut out = format!(
        "NAME\n    {}\n\nSYNOPSIS\n    {}",
        schema.name, schema.description
    );
    if !schema.params.is_empty() {
        out.push_str("\n\nPARAMETERS");
        for param in &schema.params {
            let req = if param.required { " (required)" } else { "" };
            out.push_str(&format!(
                "\n    {}{}\n        {}",
                param.name, req, param.description
            ));
        }
    }
    out
}
