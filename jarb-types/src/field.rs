//! The renderer-owned shapes this crate annotates: form fields and form options.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flag in a field's `data` bag that opts the field out of constraint annotation.
pub const IGNORE_CONSTRAINTS_FLAG: &str = "ignoreJarbConstraints";

/// A form field as the renderer defines it.
///
/// Only `key`, `data` and `templateOptions` are interpreted; every other
/// member (`id`, `type`, wrappers, expressions, ...) passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Property name of the edited entity this field binds to.
    pub key: String,
    /// Context flags.
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
    /// Presentation options the renderer reads (`required`, `maxlength`, `pattern`, ...).
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Map::is_empty")]
    pub template_options: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldDescriptor {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            data: Map::new(),
            template_options: Map::new(),
            extra: Map::new(),
        }
    }

    /// Parses a renderer field definition. A definition without a string `key`
    /// is rejected.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| Error::InvalidArgument(format!("malformed field descriptor: {e}")))
    }

    pub fn with_data(mut self, flag: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(flag.into(), value.into());
        self
    }

    pub fn with_template_option(mut self, option: impl Into<String>, value: impl Into<Value>) -> Self {
        self.template_options.insert(option.into(), value.into());
        self
    }

    /// Adds or overwrites a presentation option.
    pub fn set_template_option(&mut self, option: impl Into<String>, value: impl Into<Value>) {
        self.template_options.insert(option.into(), value.into());
    }

    pub fn template_option(&self, option: &str) -> Option<&Value> {
        self.template_options.get(option)
    }

    /// Whether `data.ignoreJarbConstraints` is exactly `true`.
    pub fn ignores_constraints(&self) -> bool {
        self.data.get(IGNORE_CONSTRAINTS_FLAG) == Some(&Value::Bool(true))
    }
}

/// Form-level options naming the entity a form section edits.
///
/// ```json
/// { "data": { "entityName": "Hero" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityContext {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub data: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EntityContext {
    pub fn for_entity(entity_name: impl Into<String>) -> Self {
        let mut data = Map::new();
        data.insert("entityName".to_string(), Value::String(entity_name.into()));
        Self {
            data,
            extra: Map::new(),
        }
    }

    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| Error::InvalidArgument(format!("malformed form options: {e}")))
    }

    /// The edited entity's name; `None` when absent, empty or not a string.
    pub fn entity_name(&self) -> Option<&str> {
        self.data
            .get("entityName")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }
}
