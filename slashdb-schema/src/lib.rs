//! Source schema model for the SlashDB adapter.
//!
//! Defines the tree the adapter reports for a data source:
//! - [`Schema`] — the root, holding the `Source` node
//! - [`SourceNode`] — the named top-level children of the source
//! - [`SchemaNode`] — one field plus any nested descendants
//! - [`FieldDescriptor`] — the `fieldName` / `fieldLabel` pair of a node
//!
//! The JSON shape matches what the integration framework hands to
//! configurators: `{"Source": {"children": {"<key>": {"field": {...}}}}}`.
//! Use [`Schema::from_value`] to get typed errors for a malformed tree.

mod error;
mod field;
mod schema;

pub use error::{SchemaError, SchemaResult};
pub use field::FieldDescriptor;
pub use schema::{CHILDREN_KEY, FIELD_KEY, SOURCE_KEY, Schema, SchemaNode, SourceNode};
