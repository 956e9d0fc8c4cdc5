use serde_json::Value;
use slashdb_schema::Schema;
use tracing::debug;

use crate::{
    Candidate, CandidateValue, ChangeNotifier, Configuration, ConfigurationChanged,
    ConfiguratorResult, NoopNotifier, apply_selection, derive_candidates,
};

/// What a host needs from a source configurator.
///
/// The host forwards schema and selection events, asks for the default shape
/// when it has no stored configuration, and checks validity before saving.
/// Implementors only override `default_shape` / `is_valid` when their
/// configuration has required parts.
pub trait Configurator {
    /// A new schema arrived, or the current one was cleared.
    fn on_set_schema(&mut self, schema: Option<Schema>);

    /// The user picked the candidate with this value.
    fn on_user_select(&mut self, value: &str) -> ConfigurationChanged;

    fn default_shape(&self) -> Configuration {
        Configuration::default_shape()
    }

    fn is_valid(&self) -> bool {
        true
    }
}

/// Delta-field configurator for a SlashDB source.
///
/// Holds the current schema, the candidate list derived from it, and the
/// configuration being edited. Selections are reported to `N`.
#[derive(Debug)]
pub struct SourceConfigurator<N = NoopNotifier> {
    schema: Option<Schema>,
    candidates: Vec<Candidate>,
    configuration: Configuration,
    notifier: N,
}

impl SourceConfigurator {
    /// A configurator that does not report selections anywhere.
    pub fn new() -> Self {
        Self::with_notifier(NoopNotifier)
    }
}

impl Default for SourceConfigurator {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: ChangeNotifier> SourceConfigurator<N> {
    /// Starts with no schema and the default configuration shape.
    pub fn with_notifier(notifier: N) -> Self {
        Self {
            schema: None,
            candidates: Vec::new(),
            configuration: Configuration::default_shape(),
            notifier,
        }
    }

    /// Replaces the configuration being edited; `None` resets it to the
    /// default shape.
    pub fn set_configuration(&mut self, configuration: Option<Configuration>) {
        self.configuration = configuration.unwrap_or_else(|| self.default_shape());
    }

    /// Sets the schema from raw JSON. `null` clears it.
    ///
    /// A malformed schema is rejected and the previous schema and
    /// candidates stay in place.
    pub fn on_set_schema_json(&mut self, schema: &Value) -> ConfiguratorResult<()> {
        let schema = match schema {
            Value::Null => None,
            value => Some(Schema::from_value(value)?),
        };
        self.on_set_schema(schema);
        Ok(())
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// The candidates derived from the current schema; empty until a schema
    /// is set.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn into_configuration(self) -> Configuration {
        self.configuration
    }

    /// The candidate a picker should show as selected.
    ///
    /// `None` when there are no candidates yet, or when the stored
    /// `deltaField` is not a field of the current schema.
    pub fn selected_candidate(&self) -> Option<&Candidate> {
        let current = self
            .configuration
            .delta_field
            .clone()
            .map_or(CandidateValue::NoSelection, CandidateValue::Field);
        self.candidates.iter().find(|c| c.value == current)
    }
}

impl<N: ChangeNotifier> Configurator for SourceConfigurator<N> {
    fn on_set_schema(&mut self, schema: Option<Schema>) {
        debug!(
            present = schema.is_some(),
            children = schema.as_ref().map_or(0, Schema::len),
            "Schema set"
        );
        self.candidates = derive_candidates(schema.as_ref());
        self.schema = schema;
    }

    fn on_user_select(&mut self, value: &str) -> ConfigurationChanged {
        let event = apply_selection(&mut self.configuration, value);
        self.notifier.configuration_updated(&event);
        event
    }
}
