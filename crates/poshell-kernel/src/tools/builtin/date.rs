//! Get-Date — current date and time.

use async_trait::async_trait;
use chrono::Local;

use crate::error::ShellError;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext};

/// Get-Date: the current local time in the long display format.
pub struct GetDate;

#[async_trait]
impl Cmdlet for GetDate {
    fn name(&self) -> &str {
        "Get-Date"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Get-Date", "Display the current date and time")
    }

    async fn run(&self, _args: &Args, _ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let now = Local::now();
        Ok(CmdletOutput::text(
            now.format("%A, %B %-d, %Y %-I:%M:%S %p").to_string(),
        ))
    }
}
