//! Get-Host — host identity and version information.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext};
use crate::value::Value;

/// Get-Host: fixed descriptive block with the host name and the
/// contents of the seeded version table.
pub struct GetHost;

#[async_trait]
impl Cmdlet for GetHost {
    fn name(&self) -> &str {
        "Get-Host"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Get-Host", "Display information about the host program")
    }

    async fn run(&self, _args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let version = ctx
            .session
            .variables
            .get("PSVersionTable")
            .and_then(|v| match v {
                Value::Object(obj) => obj
                    .get("PSVersion")
                    .and_then(|p| p.as_str())
                    .map(str::to_string),
                _ => None,
            })
            .unwrap_or_else(|| "5.1".to_string());

        let block = format!(
            concat!(
                "Name             : {name}\n",
                "Version          : {version}\n",
                "CurrentCulture   : en-US\n",
                "CurrentUICulture : en-US\n",
                "IsRunspacePushed : False",
            ),
            name = ctx.session.host_name,
            version = version,
        );
        Ok(CmdletOutput::object(block))
    }
}
