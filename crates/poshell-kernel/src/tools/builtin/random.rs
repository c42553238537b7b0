//! Get-Random — uniform integer in an inclusive range.

use async_trait::async_trait;
use rand::Rng;

use crate::error::ShellError;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext, ParamSchema};

/// Get-Random: `-Minimum`/`-Maximum` bounded integer, defaults 0..=100.
pub struct GetRandom;

#[async_trait]
impl Cmdlet for GetRandom {
    fn name(&self) -> &str {
        "Get-Random"
    }

    fn schema(&self) -> CmdletSchema {
        CmdletSchema::new("Get-Random", "Generate a random integer")
            .param(ParamSchema::optional("-Minimum", "Inclusive lower bound; defaults to 0"))
            .param(ParamSchema::optional("-Maximum", "Inclusive upper bound; defaults to 100"))
    }

    async fn run(&self, args: &Args, _ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError> {
        let minimum = parse_bound(args, "-Minimum", 0)?;
        let maximum = parse_bound(args, "-Maximum", 100)?;
        if minimum > maximum {
            return Err(ShellError::InvalidArgument {
                cmdlet: "Get-Random",
                message: format!("-Minimum ({minimum}) must not exceed -Maximum ({maximum})"),
            });
        }

        let value = rand::thread_rng().gen_range(minimum..=maximum);
        Ok(CmdletOutput::text(value.to_string()))
    }
}

fn parse_bound(args: &Args, flag: &'static str, default: i64) -> Result<i64, ShellError> {
    match args.flag_value(flag) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ShellError::InvalidArgument {
            cmdlet: "Get-Random",
            message: format!("{flag} expects an integer, got '{raw}'"),
        }),
    }
}
