//! Tests for canvas-model types.

use canvas_model::{DebuggerSnapshot, DebuggerTab, ErrorRecord, ErrorSource, WidgetType};

const SNAPSHOT: &str = r#"{
    "debugger": {
        "errors": {
            "Input1-text-error": {
                "id": "Input1-text",
                "text": "This value does not evaluate to type string",
                "source": {
                    "id": "w-input",
                    "name": "Input1",
                    "type": "WIDGET",
                    "propertyPath": "text"
                }
            },
            "Api1-warning": { "text": "Deprecated field" }
        },
        "hideErrors": false,
        "currentTab": "LOGS"
    },
    "canvasWidgets": {
        "w-tabs": { "widgetId": "w-tabs", "widgetName": "Tabs1", "parentId": "0", "type": "TABS_WIDGET" },
        "w-input": { "widgetId": "w-input", "widgetName": "Input1", "parentId": "w-tabs", "type": "INPUT_WIDGET" }
    },
    "dataTree": {
        "Tabs1": {
            "ENTITY_TYPE": "WIDGET",
            "widgetName": "Tabs1",
            "type": "TABS_WIDGET",
            "isVisible": true,
            "parentId": "0",
            "selectedTab": "Tab 1"
        },
        "Input1": {
            "ENTITY_TYPE": "WIDGET",
            "widgetName": "Input1",
            "type": "INPUT_WIDGET",
            "isVisible": true,
            "parentId": "w-tabs",
            "tabName": "Tab 1",
            "text": 42
        }
    },
    "location": "/applications/app-1/pages/page-1/edit"
}"#;

#[test]
fn snapshot_parses_every_section() {
    let snapshot = DebuggerSnapshot::from_json_str(SNAPSHOT).expect("parse snapshot");

    assert_eq!(snapshot.debugger.errors.len(), 2);
    assert!(!snapshot.debugger.hide_errors);
    assert_eq!(snapshot.debugger.current_tab(), DebuggerTab::Logs);

    let tabs = &snapshot.canvas_widgets["w-tabs"];
    assert_eq!(tabs.widget_name, "Tabs1");
    assert_eq!(tabs.widget_type.as_str(), WidgetType::TABS);

    let input = snapshot.data_tree["Input1"]
        .as_widget()
        .expect("Input1 is a widget");
    assert_eq!(input.tab_name.as_deref(), Some("Tab 1"));
    assert_eq!(input.parent_id.as_deref(), Some("w-tabs"));

    let error = &snapshot.debugger.errors["Input1-text-error"];
    assert_eq!(error.source_name(), Some("Input1"));
    assert_eq!(error.property_path(), Some("text"));
    assert_eq!(
        snapshot.location.as_deref(),
        Some("/applications/app-1/pages/page-1/edit")
    );
}

#[test]
fn empty_snapshot_uses_defaults() {
    let snapshot = DebuggerSnapshot::from_json_str("{}").expect("parse empty snapshot");
    assert!(snapshot.debugger.errors.is_empty());
    assert_eq!(snapshot.debugger.current_tab(), DebuggerTab::Errors);
    assert!(snapshot.canvas_widgets.is_empty());
    assert!(snapshot.location.is_none());
}

#[test]
fn malformed_snapshot_is_rejected() {
    let err = DebuggerSnapshot::from_json_str(r#"{ "debugger": { "errors": [] } }"#)
        .expect_err("errors must be a map");
    assert!(err.to_string().starts_with("invalid snapshot json"));
}

#[test]
fn snapshot_round_trips_through_json() {
    let snapshot = DebuggerSnapshot::from_json_str(SNAPSHOT).expect("parse snapshot");
    let json = snapshot.to_json_pretty().expect("serialize snapshot");
    let round = DebuggerSnapshot::from_json_str(&json).expect("reparse snapshot");
    assert_eq!(round, snapshot);
}

#[test]
fn source_helpers_ignore_empty_names() {
    let record = ErrorRecord::new("boom").with_source(ErrorSource::new(""));
    assert_eq!(record.source_name(), None);

    let record = ErrorRecord::new("boom")
        .with_source(ErrorSource::new("Text1").with_property_path("isVisible"));
    assert_eq!(record.source_name(), Some("Text1"));
    assert_eq!(record.property_path(), Some("isVisible"));
}
