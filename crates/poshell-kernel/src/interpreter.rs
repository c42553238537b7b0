//! The Interpreter — the public façade over the whole subsystem.
//!
//! One `Interpreter` owns one session. `execute_command` is the only
//! way commands enter the engine; it times each call, routes to the
//! pipeline executor when a stage separator is present, and folds
//! every failure into a `CommandResult` so nothing below the façade
//! ever reaches the host as an error value.
//!
//! ```text
//! line ──▶ trim ──▶ [" | " present?] ──▶ run_pipeline ─┐
//!                   └──▶ tokenize ──▶ dispatch ────────┴──▶ CommandResult
//! ```

use std::sync::Arc;
use std::time::Instant;

use crate::lexer::tokenize;
use crate::pipeline::{run_pipeline, PIPE_SEPARATOR};
use crate::result::{CommandResult, OutputShape};
use crate::session::SessionState;
use crate::tools::{register_builtins, CmdletOutput, CmdletRegistry, ExecContext};
use crate::value::Value;

/// Construction-time knobs for an interpreter session.
#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    /// Home path: the initial location and the target of `~`.
    pub home: String,
    /// Host display name reported by `Get-Host`.
    pub host_name: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            home: "C:\\Users\\Guest".to_string(),
            host_name: "PoShell Console Host".to_string(),
        }
    }
}

/// A single interpreter session: registry plus exclusively owned state.
pub struct Interpreter {
    registry: Arc<CmdletRegistry>,
    ctx: ExecContext,
}

impl Interpreter {
    /// Build an interpreter with the default configuration.
    pub fn new() -> Self {
        Self::with_config(InterpreterConfig::default())
    }

    /// Build an interpreter with the given configuration.
    pub fn with_config(config: InterpreterConfig) -> Self {
        let mut registry = CmdletRegistry::new();
        register_builtins(&mut registry);
        let registry = Arc::new(registry);

        let session = SessionState::new(config.home, config.host_name);
        let mut ctx = ExecContext::with_session(session);
        ctx.set_schemas(registry.schemas());

        Self { registry, ctx }
    }

    /// Execute one command line and report the outcome.
    ///
    /// Whitespace-only input succeeds immediately with empty text. A
    /// line containing the `" | "` separator runs as a pipeline.
    pub async fn execute_command(&mut self, command_line: &str) -> CommandResult {
        let started = Instant::now();
        let trimmed = command_line.trim();

        if trimmed.is_empty() {
            return CommandResult::succeeded("", OutputShape::Text, elapsed_ms(started));
        }

        let outcome = if trimmed.contains(PIPE_SEPARATOR) {
            run_pipeline(&self.registry, &mut self.ctx, trimmed).await
        } else {
            let tokens = tokenize(trimmed);
            match tokens.split_first() {
                // Quote-only input tokenizes to nothing; treat as blank.
                None => Ok(CmdletOutput::text("")),
                Some((typed, arg_tokens)) => {
                    crate::dispatch::dispatch(&self.registry, &mut self.ctx, typed, arg_tokens)
                        .await
                }
            }
        };

        match outcome {
            Ok(output) => CommandResult::succeeded(output.text, output.shape, elapsed_ms(started)),
            Err(err) => {
                tracing::debug!(error = %err, "command failed");
                CommandResult::failed(err.to_string(), elapsed_ms(started))
            }
        }
    }

    /// Read-only snapshot of the session's current location.
    pub fn current_location(&self) -> &str {
        &self.ctx.session.current_location
    }

    /// Display prompt for the host: `PS <location>> `.
    pub fn prompt(&self) -> String {
        format!("PS {}> ", self.ctx.session.current_location)
    }

    /// Read a session variable without going through command text.
    pub fn variable_value(&self, name: &str) -> Option<&Value> {
        self.ctx.session.variables.get(name)
    }

    /// Seed or overwrite a session variable from the host.
    pub fn set_variable_value(&mut self, name: impl Into<String>, value: Value) {
        self.ctx.session.variables.insert(name.into(), value);
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn whitespace_only_input_succeeds_with_empty_text() {
        let mut interp = Interpreter::new();
        for input in ["", "   ", "\t \t"] {
            let result = interp.execute_command(input).await;
            assert!(result.success);
            assert_eq!(result.output, "");
            assert_eq!(result.output_shape, OutputShape::Text);
        }
    }

    #[tokio::test]
    async fn unknown_command_fails_with_the_name_in_the_error() {
        let mut interp = Interpreter::new();
        let result = interp.execute_command("Get-Widgetz arg1 arg2").await;
        assert!(!result.success);
        assert!(result.output.is_empty());
        assert!(result.error.unwrap().contains("Get-Widgetz"));
    }

    #[tokio::test]
    async fn alias_and_canonical_listing_are_equivalent() {
        let mut interp = Interpreter::new();
        let via_alias = interp.execute_command("ls").await;
        let via_canonical = interp.execute_command("Get-ChildItem").await;
        assert_eq!(via_alias.output_shape, OutputShape::Table);
        assert_eq!(via_alias.output, via_canonical.output);
    }

    #[tokio::test]
    async fn quoted_argument_survives_as_one_unit() {
        let mut interp = Interpreter::new();
        let result = interp.execute_command(r#"echo "hello world""#).await;
        assert!(result.success);
        assert!(result.output.contains("hello world"));
    }

    #[tokio::test]
    async fn variable_round_trip_shows_in_table_and_accessor() {
        let mut interp = Interpreter::new();
        let set = interp.execute_command("Set-Variable Foo Bar").await;
        assert!(set.success);

        let get = interp.execute_command("Get-Variable").await;
        let row = get
            .output
            .lines()
            .find(|l| l.contains("Foo"))
            .expect("Foo row present");
        assert!(row.contains("Bar"));

        assert_eq!(interp.variable_value("Foo"), Some(&Value::from("Bar")));
    }

    #[tokio::test]
    async fn copy_item_without_destination_fails() {
        let mut interp = Interpreter::new();
        let result = interp.execute_command("Copy-Item onlyOneArg").await;
        assert!(!result.success);
        assert!(result.error.unwrap().contains("Destination"));
    }

    #[tokio::test]
    async fn test_path_truthiness() {
        let mut interp = Interpreter::new();
        let known = interp.execute_command("Test-Path C:\\").await;
        assert_eq!(known.output, "True");
        let unknown = interp.execute_command("Test-Path Q:\\doesnotexist").await;
        assert_eq!(unknown.output, "False");
    }

    #[tokio::test]
    async fn pipeline_discards_earlier_stage_output() {
        let mut interp = Interpreter::new();
        let piped = interp.execute_command("Get-Process | Sort-Object").await;
        let standalone = interp.execute_command("Sort-Object").await;
        assert_eq!(piped.output, standalone.output);
    }

    #[tokio::test]
    async fn random_with_pinned_bounds_is_deterministic() {
        let mut interp = Interpreter::new();
        for _ in 0..20 {
            let result = interp
                .execute_command("Get-Random -Minimum 5 -Maximum 5")
                .await;
            assert_eq!(result.output, "5");
        }
    }

    #[tokio::test]
    async fn timing_is_reported_for_success_and_failure() {
        let mut interp = Interpreter::new();
        let ok = interp.execute_command("Get-Date").await;
        let err = interp.execute_command("nope").await;
        // u64 is always >= 0; the interesting property is that both
        // paths produce a populated result at all.
        assert!(ok.success);
        assert!(!err.success);
        assert!(ok.execution_time_ms < 60_000);
        assert!(err.execution_time_ms < 60_000);
    }

    #[tokio::test]
    async fn set_location_updates_prompt_and_accessor() {
        let mut interp = Interpreter::new();
        assert_eq!(interp.prompt(), "PS C:\\Users\\Guest> ");

        interp.execute_command("cd Documents").await;
        assert_eq!(interp.current_location(), "C:\\Users\\Guest\\Documents");
        assert_eq!(interp.prompt(), "PS C:\\Users\\Guest\\Documents> ");
    }

    #[tokio::test]
    async fn host_seeded_variable_is_visible_to_commands() {
        let mut interp = Interpreter::new();
        interp.set_variable_value("Injected", Value::from("by-host"));
        let result = interp.execute_command("Get-Variable").await;
        assert!(result.output.contains("Injected"));
        assert!(result.output.contains("by-host"));
    }

    #[tokio::test]
    async fn web_request_without_uri_fails_with_parameter_name() {
        let mut interp = Interpreter::new();
        let result = interp.execute_command("Invoke-WebRequest").await;
        assert!(!result.success);
        assert!(result.error.unwrap().contains("Uri"));
    }

    #[tokio::test]
    async fn custom_config_changes_home_and_host() {
        let mut interp = Interpreter::with_config(InterpreterConfig {
            home: "D:\\Home".to_string(),
            host_name: "Embedded Host".to_string(),
        });
        assert_eq!(interp.current_location(), "D:\\Home");
        let host = interp.execute_command("Get-Host").await;
        assert!(host.output.contains("Embedded Host"));
    }
}
