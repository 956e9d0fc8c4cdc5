//! Delta-field configuration for the SlashDB source adapter.
//!
//! Given the schema of a source, this crate derives the list of fields a
//! user may pick as the "last modified" marker for delta extraction, and
//! records the pick in the adapter's [`Configuration`]:
//! - [`derive_candidates`] — schema to ordered [`Candidate`] list, "no
//!   selection" first
//! - [`apply_selection`] — writes `deltaField` and returns a
//!   [`ConfigurationChanged`] event
//! - [`Configurator`] — the capability contract a host drives, implemented
//!   by [`SourceConfigurator`]
//!
//! Nothing here performs I/O. Rendering the candidates and persisting the
//! configuration belong to the host.

mod candidate;
mod collation;
mod configuration;
mod configurator;
mod notify;
mod selection;

pub use candidate::{
    Candidate, CandidateValue, NO_SELECTION_LABEL, NO_SELECTION_VALUE, derive_candidates,
    derive_candidates_from_value, pretty_label,
};
pub use collation::locale_cmp;
pub use configuration::Configuration;
pub use configurator::{Configurator, SourceConfigurator};
pub use notify::{ChangeNotifier, ConfigurationChanged, NoopNotifier};
pub use selection::{Selection, apply_selection};

pub use slashdb_schema::{FieldDescriptor, Schema, SchemaError, SchemaNode};

/// Result type alias using the crate's error type.
pub type ConfiguratorResult<T> = std::result::Result<T, ConfiguratorError>;

/// Errors surfaced to the host.
#[derive(Debug, thiserror::Error)]
pub enum ConfiguratorError {
    #[error("malformed schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
