//! Session variable values.

use serde::Serialize;

/// A value stored in the session variable table.
///
/// Primitives render as themselves; structured values render as the
/// placeholder tag PowerShell shows for hashtables, since the table
/// view has no column layout for nested data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
    Object(serde_json::Value),
}

impl Value {
    /// Textual cell for `Get-Variable` output.
    pub fn render(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Int(i) => i.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Object(_) => "System.Collections.Hashtable".to_string(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitives_render_verbatim() {
        assert_eq!(Value::from("Bar").render(), "Bar");
        assert_eq!(Value::Int(42).render(), "42");
        assert_eq!(Value::Bool(true).render(), "true");
    }

    #[test]
    fn objects_render_as_placeholder_tag() {
        let v = Value::Object(json!({"PSVersion": "5.1"}));
        assert_eq!(v.render(), "System.Collections.Hashtable");
    }
}
