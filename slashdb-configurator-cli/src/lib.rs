//! File-based host for the SlashDB source configurator.
//!
//! Reads the source schema and the stored configuration from JSON files,
//! drives a [`SourceConfigurator`] the way the integration UI would, and
//! writes the configuration back.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use slashdb_configurator::{
    Candidate, Configuration, ConfigurationChanged, Configurator, Schema, SourceConfigurator,
};
use tracing::{info, warn};

/// Loads a schema file. A file holding `null` means "no schema yet".
pub fn load_schema(path: &Path) -> Result<Option<Schema>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file {}", path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&text).context("Schema file is not valid JSON")?;
    if value.is_null() {
        return Ok(None);
    }
    let schema = Schema::from_value(&value)
        .with_context(|| format!("Malformed schema in {}", path.display()))?;
    Ok(Some(schema))
}

/// Loads the stored configuration, or the default shape if there is none.
pub fn load_configuration(path: &Path) -> Result<Configuration> {
    if path.exists() {
        info!("Loading configuration from {:?}", path);
        let text = fs::read_to_string(path).context("Failed to read configuration file")?;
        Configuration::from_json(&text).context("Failed to decode configuration")
    } else {
        info!("No configuration at {:?}, starting from default shape", path);
        Ok(Configuration::default_shape())
    }
}

pub fn save_configuration(path: &Path, configuration: &Configuration) -> Result<()> {
    let text = serde_json::to_string_pretty(configuration)?;
    fs::write(path, text).context("Failed to write configuration file")
}

/// Candidates for the schema, in picker order. Empty when there is no schema.
pub fn candidates(schema: Option<Schema>) -> Vec<Candidate> {
    let mut configurator = SourceConfigurator::new();
    configurator.on_set_schema(schema);
    configurator.candidates().to_vec()
}

/// Applies `value` to the configuration at `config_path` and saves it.
///
/// Values that are not candidates of the schema are stored anyway, with a
/// warning.
pub fn select(schema_path: &Path, config_path: &Path, value: &str) -> Result<ConfigurationChanged> {
    let schema = load_schema(schema_path)?;
    let configuration = load_configuration(config_path)?;

    let mut configurator = SourceConfigurator::with_notifier(|event: &ConfigurationChanged| {
        info!(delta_field = ?event.delta_field, "Configuration updated");
    });
    configurator.set_configuration(Some(configuration));
    configurator.on_set_schema(schema);

    if !configurator
        .candidates()
        .iter()
        .any(|c| c.value.as_str() == value)
    {
        warn!(value, "Selected value is not a delta candidate of this schema");
    }

    let event = configurator.on_user_select(value);
    save_configuration(config_path, &configurator.into_configuration())?;
    Ok(event)
}
