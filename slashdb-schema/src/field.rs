use serde::{Deserialize, Serialize};

/// The field a schema node stands for.
///
/// `field_label` is whatever human-friendly name the source reports. It is
/// frequently identical to `field_name`, empty, or missing entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub field_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_label: Option<String>,
}

impl FieldDescriptor {
    /// A field with a display label.
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            field_name: name.into(),
            field_label: Some(label.into()),
        }
    }

    /// A field with no label at all.
    pub fn unlabeled(name: &str) -> Self {
        Self {
            field_name: name.into(),
            field_label: None,
        }
    }

    /// The label, treating an empty string the same as a missing one.
    pub fn label(&self) -> Option<&str> {
        self.field_label.as_deref().filter(|label| !label.is_empty())
    }
}
