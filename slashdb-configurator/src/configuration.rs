use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ConfiguratorResult;

/// Source configuration of the SlashDB adapter.
///
/// Only `deltaField` is owned here. `None` means no change marker is set and
/// the adapter runs a full extraction instead of a delta one. Any other
/// attributes the integration framework stored alongside it are kept in
/// `extra` and written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    pub delta_field: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Configuration {
    /// The shape used when no configuration exists yet: `{"deltaField": null}`.
    pub fn default_shape() -> Self {
        Self::default()
    }

    /// A configuration with `deltaField` set.
    pub fn with_delta_field(field: &str) -> Self {
        Self {
            delta_field: Some(field.into()),
            extra: Map::new(),
        }
    }

    /// Every configuration is complete: an unset `deltaField` is a legitimate
    /// choice, not a missing one.
    pub fn is_valid(&self) -> bool {
        true
    }

    pub fn delta_field(&self) -> Option<&str> {
        self.delta_field.as_deref()
    }

    pub fn from_value(value: Value) -> ConfiguratorResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json(json: &str) -> ConfiguratorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_value(&self) -> ConfiguratorResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
