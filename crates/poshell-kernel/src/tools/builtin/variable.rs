//! Get-Variable / Set-Variable — session variable access.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::render::render_table;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext, ParamSchema};
use crate::value::Value;

/// Get-Variable: table of every session variable.
pub struct GetVariable;

#[async_trait]
impl Cmdlet for GetVariable {
    fn name(&self) -> &str {
        "Get-Variable"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Get-Variable", "List the variables in the current session")
    }

    async fn run(&self, _args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let rows: Vec<Vec<String>> = ctx
            .session
            .variables
            .iter()
            .map(|(name, value)| vec![name.clone(), value.render()])
            .collect();

        Ok(CmdletOutput::table(render_table(&["Name", "Value"], &rows)))
    }
}

/// Set-Variable: store a value under a name.
///
/// Everything after the name joins into one string value, so quoted
/// and unquoted multi-token values behave alike.
pub struct SetVariable;

#[async_trait]
impl Cmdlet for SetVariable {
    fn name(&self) -> &str {
        "Set-Variable"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Set-Variable", "Set a session variable")
            .param(ParamSchema::required("Name", "Variable name"))
            .param(ParamSchema::required("Value", "Value to store"))
    }

    async fn run(&self, args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let name = args
            .get(0)
            .ok_or(ShellError::missing("Set-Variable", "Name"))?
            .to_string();
        if args.len() < 2 {
            return Err(ShellError::missing("Set-Variable", "Value"));
        }
        let value = args.join_from(1);

        ctx.session.variables.insert(name, Value::String(value));
        Ok(CmdletOutput::text(""))
    }
}
