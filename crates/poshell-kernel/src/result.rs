//! CommandResult — the structured outcome of every `execute_command` call.
//!
//! One `CommandResult` is built fresh per call and handed to the host.
//! The serialized form uses the camelCase field names the host-side
//! renderer expects (`executionTimeMs`, `outputShape`).

use serde::Serialize;

/// Rendering hint attached to command output.
///
/// Advisory only: `Table` promises nothing beyond "the text is already
/// aligned with a header and separator row".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputShape {
    #[default]
    Text,
    Object,
    Table,
}

/// The outcome of one top-level command execution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    /// False only when dispatch or a cmdlet raised an error.
    pub success: bool,
    /// Textual output; empty when the command produced none, and
    /// always empty on failure.
    pub output: String,
    /// Human-readable failure message, present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Wall-clock duration of the call, measured by the façade.
    pub execution_time_ms: u64,
    /// Rendering hint for the host.
    pub output_shape: OutputShape,
}

impl CommandResult {
    /// Build a successful result.
    pub fn succeeded(output: impl Into<String>, shape: OutputShape, elapsed_ms: u64) -> Self {
        Self {
            success: true,
            output: output.into(),
            error: None,
            execution_time_ms: elapsed_ms,
            output_shape: shape,
        }
    }

    /// Build a failed result. Output is always empty on failure.
    pub fn failed(error: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(error.into()),
            execution_time_ms: elapsed_ms,
            output_shape: OutputShape::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_implies_empty_output() {
        let result = CommandResult::failed("boom", 3);
        assert!(!result.success);
        assert!(result.output.is_empty());
        assert_eq!(result.error.as_deref(), Some("boom"));
    }

    #[test]
    fn serializes_with_host_field_names() {
        let result = CommandResult::succeeded("hi", OutputShape::Table, 7);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["outputShape"], "table");
        assert_eq!(json["executionTimeMs"], 7);
        assert_eq!(json["success"], true);
        assert!(json.get("error").is_none());
    }
}
