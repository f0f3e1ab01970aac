//! Launch variables.
//!
//! The launch endpoint takes the variables as a JSON *string* under the
//! `extra_vars` key, not as a nested object:
//!
//! ```json
//! {"extra_vars": "{\"version\":\"1.2\"}"}
//! ```

use crate::framework::{ClientError, Result};
use serde_json::{json, Map, Value};

/// Variables passed to a job at launch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtraVars {
    vars: Map<String, Value>,
}

impl ExtraVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(vars: Map<String, Value>) -> Self {
        Self { vars }
    }

    /// Parses a JSON object; blank text gives an empty set.
    pub fn parse(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::new());
        }
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Object(vars) => Ok(Self { vars }),
            other => Err(ClientError::NotAnObject {
                kind: "ExtraVars".to_string(),
                found: match other {
                    Value::Array(_) => "array",
                    Value::String(_) => "string",
                    Value::Number(_) => "number",
                    Value::Bool(_) => "boolean",
                    _ => "null",
                },
            }),
        }
    }

    pub fn insert(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.vars
    }

    /// The POST body for a launch, or `None` when there is nothing to send.
    pub fn to_body(&self) -> Option<String> {
        if self.vars.is_empty() {
            return None;
        }
        let encoded = Value::Object(self.vars.clone()).to_string();
        Some(json!({ "extra_vars": encoded }).to_string())
    }
}

impl From<Map<String, Value>> for ExtraVars {
    fn from(vars: Map<String, Value>) -> Self {
        Self::from_map(vars)
    }
}
