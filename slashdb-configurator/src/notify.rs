use serde::{Deserialize, Serialize};

/// Emitted after a selection changed the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationChanged {
    /// The `deltaField` now stored, `None` for no selection.
    pub delta_field: Option<String>,
}

/// Receives configuration-changed events so the host can persist or
/// propagate the new configuration.
///
/// Delivery is fire-and-forget: the configurator does not wait on, or
/// inspect the outcome of, whatever the notifier does.
pub trait ChangeNotifier {
    fn configuration_updated(&self, event: &ConfigurationChanged);
}

impl<F> ChangeNotifier for F
where
    F: Fn(&ConfigurationChanged),
{
    fn configuration_updated(&self, event: &ConfigurationChanged) {
        self(event);
    }
}

/// Drops every event. For hosts that read the configuration back themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl ChangeNotifier for NoopNotifier {
    fn configuration_updated(&self, _event: &ConfigurationChanged) {}
}
