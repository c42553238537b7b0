//! Get-Module / Import-Module — loaded module tracking.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::render::render_table;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext, ParamSchema};

/// Get-Module: table of currently loaded modules.
pub struct GetModule;

#[async_trait]
impl Cmdlet for GetModule {
    fn name(&self) -> &str {
        "Get-Module"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Get-Module", "List the modules loaded in the session")
    }

    async fn run(&self, _args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let rows: Vec<Vec<String>> = ctx
            .session
            .loaded_modules
            .iter()
            .map(|name| {
                let module_type = if name.starts_with("Microsoft.") {
                    "Manifest"
                } else {
                    "Script"
                };
                vec![
                    module_type.to_string(),
                    "1.0.0".to_string(),
                    name.clone(),
                ]
            })
            .collect();

        Ok(CmdletOutput::table(render_table(
            &["ModuleType", "Version", "Name"],
            &rows,
        )))
    }
}

/// Import-Module: add a module name to the loaded set.
pub struct ImportModule;

#[async_trait]
impl Cmdlet for ImportModule {
    fn name(&self) -> &str {
        "Import-Module"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Import-Module", "Load a module into the session")
            .param(ParamSchema::required("Name", "Module to load"))
    }

    async fn run(&self, args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let name = args
            .bare(0)
            .ok_or(ShellError::missing("Import-Module", "Name"))?
            .to_string();

        ctx.session.loaded_modules.insert(name.clone());
        Ok(CmdletOutput::text(format!("Module '{name}' imported.")))
    }
}
