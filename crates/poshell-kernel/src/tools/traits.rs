//! Core cmdlet traits and argument handling.

use async_trait::async_trait;

use crate::error::ShellError;
use crate::result::OutputShape;

use super::context::ExecContext;

/// Schema for one cmdlet parameter.
#[derive(Debug, Clone)]
pub struct ParamSchema {
    /// Parameter name as typed (e.g. `-Minimum`, `Path`).
    pub name: String,
    /// Whether the cmdlet fails without it.
    pub required: bool,
    /// Description for help text.
    pub description: String,
}

impl ParamSchema {
    /// Create a required parameter.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            description: description.into(),
        }
    }

    /// Create an optional parameter.
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            description: description.into(),
        }
    }
}

/// Schema describing a cmdlet's interface. Feeds `Get-Command` and
/// `Get-Help`.
#[derive(Debug, Clone)]
pub struct CmdletSchema {
    pub name: String,
    pub description: String,
    pub params: Vec<ParamSchema>,
}

impl CmdletSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter to the schema.
    pub fn param(mut self, param: ParamSchema) -> Self {
        self.params.push(param);
        self
    }
}

/// Argument tokens for one cmdlet invocation.
///
/// Accessors are deliberately lenient and order-sensitive: a flag's
/// value is simply the token that follows it, and `bare` counts every
/// token that does not start with `-`. No stricter flag grammar exists.
#[derive(Debug, Clone, Default)]
pub struct Args {
    tokens: Vec<String>,
}

impl Args {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Raw token at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// All tokens in order.
    pub fn all(&self) -> &[String] {
        &self.tokens
    }

    /// All tokens joined with single spaces.
    pub fn join_all(&self) -> String {
        self.tokens.join(" ")
    }

    /// Tokens from `index` onward joined with single spaces.
    pub fn join_from(&self, index: usize) -> String {
        self.tokens[index.min(self.tokens.len())..].join(" ")
    }

    /// The nth token that does not look like a flag.
    pub fn bare(&self, n: usize) -> Option<&str> {
        self.tokens
            .iter()
            .filter(|t| !t.starts_with('-'))
            .nth(n)
            .map(String::as_str)
    }

    /// The token following `flag` (case-insensitive match on the flag
    /// token itself).
    pub fn flag_value(&self, flag: &str) -> Option<&str> {
        let lower = flag.to_lowercase();
        self.tokens
            .iter()
            .position(|t| t.to_lowercase() == lower)
            .and_then(|i| self.tokens.get(i + 1))
            .map(String::as_str)
    }

    /// Whether `flag` appears anywhere in the token list.
    pub fn has_flag(&self, flag: &str) -> bool {
        let lower = flag.to_lowercase();
        self.tokens.iter().any(|t| t.to_lowercase() == lower)
    }
}

/// Output of one cmdlet: text plus a rendering hint.
#[derive(Debug, Clone, PartialEq)]
pub struct CmdletOutput {
    pub text: String,
    pub shape: OutputShape,
}

impl CmdletOutput {
    /// Plain text output.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shape: OutputShape::Text,
        }
    }

    /// Pre-formatted property-block output.
    pub fn object(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shape: OutputShape::Object,
        }
    }

    /// Pre-formatted aligned table output.
    pub fn table(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shape: OutputShape::Table,
        }
    }
}

/// A built-in cmdlet.
#[async_trait]
pub trait Cmdlet: Send + Sync {
    /// Canonical name used for registration and dispatch.
    fn name(&self) -> &str;

    /// Interface schema for help and command discovery.
    fn schema(&self) -> CmdletSchema;

    /// Execute against the session in `ctx`.
    async fn run(&self, args: &Args, ctx: &mut ExecContext) -> Result<CmdletOutput, ShellError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Args {
        Args::new(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn bare_skips_flag_tokens() {
        let a = args(&["-Name", "chrome", "filter"]);
        // Lenient on purpose: the flag's value still counts as bare.
        assert_eq!(a.bare(0), Some("chrome"));
        assert_eq!(a.bare(1), Some("filter"));
    }

    #[test]
    fn flag_value_is_the_following_token() {
        let a = args(&["-Minimum", "5", "-Maximum", "10"]);
        assert_eq!(a.flag_value("-minimum"), Some("5"));
        assert_eq!(a.flag_value("-Maximum"), Some("10"));
        assert_eq!(a.flag_value("-Missing"), None);
    }

    #[test]
    fn flag_at_end_has_no_value() {
        let a = args(&["path", "-ItemType"]);
        assert_eq!(a.flag_value("-ItemType"), None);
    }

    #[test]
    fn join_from_clamps_out_of_range() {
        let a = args(&["a", "b"]);
        assert_eq!(a.join_from(1), "b");
        assert_eq!(a.join_from(5), "");
    }
}
