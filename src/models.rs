//! Frontend Models
//!
//! Data structures matching the complaints API wire format.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Server-assigned complaint identifier (the API may send a number or a string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComplaintId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplaintId::Number(n) => write!(f, "{}", n),
            ComplaintId::Text(s) => f.write_str(s),
        }
    }
}

/// Complaint as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Complaint {
    pub id: ComplaintId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Save request body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewComplaint {
    pub title: String,
    pub body: String,
}

/// Save endpoint response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaveResponse {
    #[serde(rename = "Success", default, deserialize_with = "truthy")]
    pub success: bool,
}

/// Reads any JSON value as a flag: `false`, `null`, `0` and `""` are false.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
