use tracing::debug;

use crate::{CandidateValue, Configuration, ConfigurationChanged};

/// A user's pick, as parsed from the raw value a picker widget reports.
pub type Selection = CandidateValue;

/// Stores `selected` as the configuration's `deltaField`.
///
/// The "no selection" value clears the field; anything else is stored as-is.
/// The value is not checked against the last candidate list, since callers
/// only ever pass values taken from it. Returns the event the host should be
/// notified with.
pub fn apply_selection(configuration: &mut Configuration, selected: &str) -> ConfigurationChanged {
    configuration.delta_field = match Selection::from(selected) {
        Selection::NoSelection => None,
        Selection::Field(name) => Some(name),
    };
    debug!(delta_field = ?configuration.delta_field, "Delta field selected");

    ConfigurationChanged {
        delta_field: configuration.delta_field.clone(),
    }
}
