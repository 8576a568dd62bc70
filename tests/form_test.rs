use botctl::form::{self, FieldControl, FieldPath, FormField, FormItem};
use serde_json::json;

#[test]
fn round_trip_preserves_bools_and_strings() {
    let config = json!({
        "allow_new_accounts": true,
        "exchange": "bitget",
        "alerts": {
            "send_email": false,
            "recipient": "ops@example.com"
        }
    });

    let items = form::render(Some(&config));
    let collected = form::collect(form::fields(&items));
    assert_eq!(collected, config);
}

#[test]
fn numbers_come_back_as_strings() {
    let config = json!({
        "max_open_positions": 4,
        "limits": { "min_funding_rate": 0.25 }
    });

    let items = form::render(Some(&config));
    let collected = form::collect(form::fields(&items));
    assert_eq!(
        collected,
        json!({
            "max_open_positions": "4",
            "limits": { "min_funding_rate": "0.25" }
        })
    );
}

#[test]
fn booleans_render_as_toggles_and_scalars_as_text() {
    let config = json!({
        "enabled": true,
        "mode": "paper",
        "limits": { "dry_run": false }
    });

    let items = form::render(Some(&config));
    let fields: Vec<_> = form::fields(&items).collect();
    assert_eq!(fields.len(), 3);

    let enabled = fields.iter().find(|f| f.label == "Enabled").unwrap();
    assert_eq!(enabled.control, FieldControl::Toggle(true));

    let mode = fields.iter().find(|f| f.label == "Mode").unwrap();
    assert_eq!(mode.control, FieldControl::Text("paper".to_string()));

    let dry_run = fields.iter().find(|f| f.label == "Dry Run").unwrap();
    assert_eq!(dry_run.control, FieldControl::Toggle(false));
    assert_eq!(dry_run.path.segments(), ["limits", "dry_run"]);
}

#[test]
fn nested_objects_become_titled_sections() {
    let config = json!({
        "funding_rate_service": { "interval_minutes": "5" }
    });

    let items = form::render(Some(&config));
    assert_eq!(
        items[0],
        FormItem::Section("Funding Rate Service".to_string())
    );
    match &items[1] {
        FormItem::Field(field) => assert_eq!(field.label, "Interval Minutes"),
        other => panic!("expected a field, got {:?}", other),
    }
}

#[test]
fn absent_or_null_config_renders_nothing() {
    assert!(form::render(None).is_empty());
    assert!(form::render(Some(&serde_json::Value::Null)).is_empty());
    assert_eq!(
        form::collect(std::iter::empty::<&FormField>()),
        json!({})
    );
}

#[test]
fn underscored_keys_do_not_collide_with_nested_paths() {
    // A top-level key containing the display separator and a nested path
    // that joins to the same string must stay distinct.
    let config = json!({
        "alerts_send_email": "top-level",
        "alerts": { "send_email": true }
    });

    let items = form::render(Some(&config));
    let fields: Vec<_> = form::fields(&items).collect();
    let ids: Vec<String> = fields.iter().map(|f| f.path.display_id()).collect();
    assert_eq!(ids.iter().filter(|id| *id == "alerts_send_email").count(), 2);

    // Structured paths keep them apart anyway.
    let collected = form::collect(fields.into_iter());
    assert_eq!(collected, config);
}

#[test]
fn collect_maps_toggle_to_bool_and_text_to_string() {
    let edited = vec![
        FormField {
            path: FieldPath::top("enabled"),
            label: "Enabled".to_string(),
            control: FieldControl::Toggle(false),
        },
        FormField {
            path: FieldPath::nested("limits", "max_positions"),
            label: "Max Positions".to_string(),
            control: FieldControl::Text("10".to_string()),
        },
    ];

    let collected = form::collect(edited.iter());
    assert_eq!(
        collected,
        json!({
            "enabled": false,
            "limits": { "max_positions": "10" }
        })
    );
}
