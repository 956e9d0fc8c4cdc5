use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{FieldDescriptor, SchemaError, SchemaResult};

/// JSON key of the root node.
pub const SOURCE_KEY: &str = "Source";
/// JSON key of a node's child mapping.
pub const CHILDREN_KEY: &str = "children";
/// JSON key of a node's field descriptor.
pub const FIELD_KEY: &str = "field";

/// Schema of one SlashDB data source as reported by the adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "Source")]
    pub source: SourceNode,
}

/// Root of the tree. Child keys are unique; their order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceNode {
    pub children: HashMap<String, SchemaNode>,
}

/// A field of the source, possibly with nested sub-fields.
///
/// Nested children are never delta candidates, so they are read leniently:
/// a `null` or non-object `children` is treated as empty, and nested nodes
/// that do not parse (no `field`, say) are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    pub field: FieldDescriptor,
    #[serde(
        default,
        deserialize_with = "lenient_children",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub children: HashMap<String, SchemaNode>,
}

impl SchemaNode {
    /// Shorthand for a node with no nested children.
    pub fn leaf(field: FieldDescriptor) -> Self {
        Self {
            field,
            children: HashMap::new(),
        }
    }

    /// Adds a nested child under `key`.
    #[must_use]
    pub fn with_child(mut self, key: &str, child: SchemaNode) -> Self {
        self.children.insert(key.into(), child);
        self
    }
}

impl Schema {
    /// Builds a flat schema, keying every node by its field name.
    pub fn from_fields(fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        let children = fields
            .into_iter()
            .map(|field| (field.field_name.clone(), SchemaNode::leaf(field)))
            .collect();
        Self {
            source: SourceNode { children },
        }
    }

    /// Parses a raw schema, reporting which required part is missing.
    ///
    /// A `null` value for `Source`, `children` or `field` counts as missing.
    pub fn from_value(value: &Value) -> SchemaResult<Self> {
        let source = present(value, SOURCE_KEY).ok_or(SchemaError::MissingSource)?;
        let children = present(source, CHILDREN_KEY).ok_or(SchemaError::MissingChildren)?;
        let children = children.as_object().ok_or_else(|| {
            SchemaError::InvalidShape(format!("`{SOURCE_KEY}.{CHILDREN_KEY}` must be an object"))
        })?;

        if let Some((key, _)) = children
            .iter()
            .find(|(_, node)| present(node, FIELD_KEY).is_none())
        {
            return Err(SchemaError::MissingField { node: key.clone() });
        }

        Ok(serde_json::from_value(value.clone())?)
    }

    /// Parses a schema from JSON text. See [`Schema::from_value`].
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Field descriptors of the direct children of `Source`, in map order.
    ///
    /// Nested descendants are not included.
    pub fn top_level_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.source.children.values().map(|node| &node.field)
    }

    /// Number of direct children of `Source`.
    pub fn len(&self) -> usize {
        self.source.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.children.is_empty()
    }
}

fn lenient_children<'de, D>(deserializer: D) -> Result<HashMap<String, SchemaNode>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(raw) = Value::deserialize(deserializer)? else {
        return Ok(HashMap::new());
    };
    Ok(raw
        .into_iter()
        .filter_map(|(key, node)| {
            serde_json::from_value::<SchemaNode>(node)
                .ok()
                .map(|node| (key, node))
        })
        .collect())
}

fn present<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !v.is_null())
}
