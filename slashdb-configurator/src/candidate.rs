//! Delta candidates: the fields a user may pick as the change marker.
//!
//! A candidate list is derived fresh from every schema the host supplies.
//! It always starts with the "no selection" entry; the remaining entries
//! are the top-level schema fields in [`locale_cmp`] order, so the list
//! is stable no matter how the schema's child map happens to iterate.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use slashdb_schema::{FieldDescriptor, Schema};
use tracing::{debug, warn};

use crate::{ConfiguratorResult, locale_cmp};

/// Wire value of the "no selection" entry.
pub const NO_SELECTION_VALUE: &str = "--noSelection--";
/// Display label of the "no selection" entry.
pub const NO_SELECTION_LABEL: &str = "-- None --";

/// What picking a candidate means.
///
/// Serialized as a plain string: the field name, or [`NO_SELECTION_VALUE`].
/// `NoSelection` orders before every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CandidateValue {
    NoSelection,
    Field(String),
}

impl CandidateValue {
    pub fn as_str(&self) -> &str {
        match self {
            Self::NoSelection => NO_SELECTION_VALUE,
            Self::Field(name) => name,
        }
    }

    pub fn is_no_selection(&self) -> bool {
        matches!(self, Self::NoSelection)
    }
}

impl From<String> for CandidateValue {
    fn from(value: String) -> Self {
        if value == NO_SELECTION_VALUE {
            Self::NoSelection
        } else {
            Self::Field(value)
        }
    }
}

impl From<&str> for CandidateValue {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<CandidateValue> for String {
    fn from(value: CandidateValue) -> Self {
        match value {
            CandidateValue::NoSelection => NO_SELECTION_VALUE.to_owned(),
            CandidateValue::Field(name) => name,
        }
    }
}

impl fmt::Display for CandidateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Ord for CandidateValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::NoSelection, Self::NoSelection) => Ordering::Equal,
            (Self::NoSelection, Self::Field(_)) => Ordering::Less,
            (Self::Field(_), Self::NoSelection) => Ordering::Greater,
            (Self::Field(a), Self::Field(b)) => locale_cmp(a, b),
        }
    }
}

impl PartialOrd for CandidateValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One selectable option, ready for a list or dropdown widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub value: CandidateValue,
    pub label: String,
}

impl Candidate {
    /// The "no selection" entry.
    pub fn no_selection() -> Self {
        Self {
            value: CandidateValue::NoSelection,
            label: NO_SELECTION_LABEL.to_owned(),
        }
    }

    /// The entry for a schema field.
    pub fn for_field(field: &FieldDescriptor) -> Self {
        Self {
            value: CandidateValue::Field(field.field_name.clone()),
            label: pretty_label(&field.field_name, field.label()),
        }
    }
}

/// Display text for a field: `"name (label)"`, or just `name` when the
/// label is missing, empty, or the same as the name.
pub fn pretty_label(name: &str, label: Option<&str>) -> String {
    match label {
        Some(label) if !label.is_empty() && label != name => format!("{name} ({label})"),
        _ => name.to_owned(),
    }
}

/// Derives the ordered candidate list for a schema.
///
/// With no schema there is nothing to choose from yet and the list is empty.
/// Otherwise the list holds the "no selection" entry followed by one entry
/// per top-level field with a non-empty name. Nested fields are never
/// candidates.
pub fn derive_candidates(schema: Option<&Schema>) -> Vec<Candidate> {
    let Some(schema) = schema else {
        debug!("No schema set, no delta candidates");
        return Vec::new();
    };

    let mut candidates = Vec::with_capacity(schema.len() + 1);
    candidates.push(Candidate::no_selection());

    for field in schema.top_level_fields() {
        if field.field_name.is_empty() {
            debug!("Skipping schema child with an empty field name");
            continue;
        }
        if field.field_name == NO_SELECTION_VALUE {
            warn!(field = %field.field_name, "Schema field collides with the no-selection value, skipping");
            continue;
        }
        candidates.push(Candidate::for_field(field));
    }

    candidates.sort_by(|a, b| a.value.cmp(&b.value));
    debug!(
        children = schema.len(),
        candidates = candidates.len(),
        "Derived delta candidates"
    );
    candidates
}

/// Like [`derive_candidates`], for a schema that has not been parsed yet.
///
/// `None` and JSON `null` both mean "no schema". A value missing `Source`,
/// `children` or a child's `field` is an error.
pub fn derive_candidates_from_value(schema: Option<&Value>) -> ConfiguratorResult<Vec<Candidate>> {
    match schema {
        None | Some(Value::Null) => Ok(derive_candidates(None)),
        Some(value) => {
            let schema = Schema::from_value(value)?;
            Ok(derive_candidates(Some(&schema)))
        }
    }
}
