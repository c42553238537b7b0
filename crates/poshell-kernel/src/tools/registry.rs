//! Cmdlet registry.
//!
//! The dispatch table is data, not a switch: every built-in registers
//! itself under its lowercase canonical name at interpreter
//! construction, and lookup is case-insensitive from then on.

use std::collections::HashMap;
use std::sync::Arc;

use super::traits::{Cmdlet, CmdletSchema};

/// Maps lowercase canonical names to cmdlet handlers.
#[derive(Default)]
pub struct CmdletRegistry {
    cmdlets: HashMap<String, Arc<dyn Cmdlet>>,
}

impl CmdletRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cmdlet under its canonical name.
    pub fn register(&mut self, cmdlet: impl Cmdlet + 'static) {
        self.cmdlets
            .insert(cmdlet.name().to_lowercase(), Arc::new(cmdlet));
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Cmdlet>> {
        self.cmdlets.get(&name.to_lowercase()).cloned()
    }

    /// Schemas of every registered cmdlet, sorted by name.
    pub fn schemas(&self) -> Vec<CmdletSchema> {
        let mut schemas: Vec<CmdletSchema> =
            self.cmdlets.values().map(|c| c.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    pub fn len(&self) -> usize {
        self.cmdlets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmdlets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;
    use crate::tools::{Args, CmdletOutput, ExecContext};
    use async_trait::async_trait;

    struct Probe;

    #[async_trait]
    impl Cmdlet for Probe {
        fn name(&self) -> &str {
            "Get-Probe"
        }

        fn schema(&self) -> CmdletSchema {
            CmdletSchema::new("Get-Probe", "Test fixture")
        }

        async fn run(
            &self,
            _args: &Args,
            _ctx: &mut ExecContext,
        ) -> Result<CmdletOutput, ShellError> {
            Ok(CmdletOutput::text("probed"))
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut registry = CmdletRegistry::new();
        registry.register(Probe);
        assert!(registry.get("get-probe").is_some());
        assert!(registry.get("GET-PROBE").is_some());
        assert!(registry.get("Get-Probe").is_some());
        assert!(registry.get("Get-Missing").is_none());
    }

    #[test]
    fn schemas_are_sorted_by_name() {
        struct Second;

        #[async_trait]
        impl Cmdlet for Second {
            fn name(&self) -> &str {
                "Add-Probe"
            }
            fn schema(&self) -> CmdletSchema {
                CmdletSchema::new("Add-Probe", "Test fixture")
            }
            async fn run(
                &self,
                _args: &Args,
                _ctx: &mut ExecContext,
            ) -> Result<CmdletOutput, ShellError> {
                Ok(CmdletOutput::text(""))
            }
        }

        let mut registry = CmdletRegistry::new();
        registry.register(Probe);
        registry.register(Second);
        let names: Vec<String> = registry.schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Add-Probe", "Get-Probe"]);
    }
}
