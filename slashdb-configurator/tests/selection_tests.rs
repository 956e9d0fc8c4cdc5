use pretty_assertions::assert_eq;
use serde_json::json;
use slashdb_configurator::{
    Configuration, ConfigurationChanged, NO_SELECTION_VALUE, Selection, apply_selection,
};

// ── Configuration ────────────────────────────────────────────────

#[test]
fn default_shape_has_null_delta_field() {
    let config = Configuration::default_shape();
    assert_eq!(config.delta_field(), None);
    assert_eq!(config.to_value().unwrap(), json!({ "deltaField": null }));
}

#[test]
fn every_configuration_is_valid() {
    assert!(Configuration::default_shape().is_valid());
    assert!(Configuration::with_delta_field("updated_at").is_valid());
    assert!(Configuration::with_delta_field("").is_valid());
}

#[test]
fn absent_delta_field_loads_as_none() {
    let config = Configuration::from_json("{}").unwrap();
    assert_eq!(config, Configuration::default_shape());
}

#[test]
fn other_attributes_survive_a_round_trip() {
    let raw = json!({ "deltaField": "modified", "batchSize": 500, "endpoint": "db/Chinook" });
    let config = Configuration::from_value(raw.clone()).unwrap();
    assert_eq!(config.delta_field(), Some("modified"));
    assert_eq!(config.extra["batchSize"], json!(500));
    assert_eq!(config.to_value().unwrap(), raw);
}

#[test]
fn non_string_delta_field_is_rejected() {
    assert!(Configuration::from_value(json!({ "deltaField": 3 })).is_err());
}

// ── Selection ────────────────────────────────────────────────────

#[test]
fn selection_parses_sentinel() {
    assert_eq!(Selection::from(NO_SELECTION_VALUE), Selection::NoSelection);
    assert_eq!(Selection::from("id"), Selection::Field("id".into()));
}

#[test]
fn sentinel_clears_delta_field() {
    let mut config = Configuration::with_delta_field("created_at");
    let event = apply_selection(&mut config, "--noSelection--");
    assert_eq!(config.delta_field, None);
    assert_eq!(event, ConfigurationChanged { delta_field: None });
}

#[test]
fn field_value_sets_delta_field() {
    let mut config = Configuration::default_shape();
    let event = apply_selection(&mut config, "created_at");
    assert_eq!(config.delta_field(), Some("created_at"));
    assert_eq!(
        event,
        ConfigurationChanged {
            delta_field: Some("created_at".into())
        }
    );
}

#[test]
fn selection_replaces_previous_choice() {
    let mut config = Configuration::with_delta_field("a");
    apply_selection(&mut config, "b");
    assert_eq!(config.delta_field(), Some("b"));
}

#[test]
fn unknown_values_are_stored_unchecked() {
    let mut config = Configuration::default_shape();
    apply_selection(&mut config, "not_in_any_schema");
    assert_eq!(config.delta_field(), Some("not_in_any_schema"));
}

#[test]
fn selection_leaves_other_attributes_alone() {
    let mut config =
        Configuration::from_value(json!({ "deltaField": null, "batchSize": 500 })).unwrap();
    apply_selection(&mut config, "modified");
    assert_eq!(
        config.to_value().unwrap(),
        json!({ "deltaField": "modified", "batchSize": 500 })
    );
}

#[test]
fn change_event_serializes_camel_case() {
    let event = ConfigurationChanged {
        delta_field: Some("modified".into()),
    };
    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({ "deltaField": "modified" })
    );
}
