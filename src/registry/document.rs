//! API document
//!
//! The registry serves the document as YAML (JSON is accepted too, being a
//! subset). Its shape is not controlled by this service, so it is kept as a
//! dynamic tree and re-emitted as JSON.

use serde::Serialize;
use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;

use super::errors::{RegistryError, RegistryResult};

/// Parsed API document. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ApiDocument(Value);

impl ApiDocument {
    /// Parse a YAML document whose top level is a mapping.
    pub fn from_yaml_str(content: &str) -> RegistryResult<Self> {
        let yaml: YamlValue = serde_yaml::from_str(content)?;
        if !yaml.is_mapping() {
            return Err(RegistryError::Parse(
                "top level of the document must be a mapping".into(),
            ));
        }

        yaml_to_json(yaml).map(Self).map_err(RegistryError::Parse)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// `info.title`, when the document is an OpenAPI description
    pub fn title(&self) -> Option<&str> {
        self.0.pointer("/info/title").and_then(Value::as_str)
    }

    /// `info.version`, when the document is an OpenAPI description
    pub fn version(&self) -> Option<&str> {
        self.0.pointer("/info/version").and_then(Value::as_str)
    }
}

fn yaml_to_json(value: YamlValue) -> Result<Value, String> {
    Ok(match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => yaml_number(&n),
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<_, _>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(mapping_key(key)?, yaml_to_json(value)?);
            }
            Value::Object(object)
        }
        // Tags carry no meaning in JSON
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        Value::Number(u.into())
    } else {
        // NaN and infinities have no JSON form
        n.as_f64()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

/// OpenAPI documents routinely key responses by bare status codes, which
/// YAML reads as integers.
fn mapping_key(key: YamlValue) -> Result<String, String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => mapping_key(tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => {
            Err("mapping keys must be scalars".to_string())
        }
    }
}
