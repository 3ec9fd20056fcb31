//! Shared page fixtures for canvas-debugger integration tests.
#![allow(dead_code)]

use canvas_model::{
    CanvasWidgets, DataTree, ErrorMap, ErrorRecord, ErrorSource, EvaluatedWidget, WidgetNode,
};

/// A page whose canvas map and data tree are kept in step.
#[derive(Debug, Default)]
pub struct Page {
    pub canvas: CanvasWidgets,
    pub tree: DataTree,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `widget` under `id` to both maps.
    pub fn add(&mut self, id: &str, mut widget: EvaluatedWidget) -> &mut Self {
        widget.widget_id = Some(id.to_string());
        let node = WidgetNode {
            widget_id: id.to_string(),
            widget_name: widget.widget_name.clone(),
            parent_id: widget.parent_id.clone(),
            widget_type: widget.widget_type.clone(),
        };
        self.canvas.insert(id.to_string(), node);
        self.tree.insert(widget.widget_name.clone(), widget.into());
        self
    }

    /// Add a canvas node with no evaluated state.
    pub fn add_unevaluated(&mut self, id: &str, name: &str, parent: &str) -> &mut Self {
        self.canvas.insert(
            id.to_string(),
            WidgetNode::new(id, name, "CONTAINER_WIDGET").with_parent(parent),
        );
        self
    }

    pub fn widget(&self, name: &str) -> &EvaluatedWidget {
        self.tree[name].as_widget().expect("fixture widget")
    }
}

pub fn widget(name: &str, widget_type: &str, parent: &str) -> EvaluatedWidget {
    EvaluatedWidget::new(name, widget_type).with_parent(parent)
}

pub fn error_on(name: &str, property_path: &str) -> ErrorRecord {
    ErrorRecord::new(format!("{name}.{property_path} failed"))
        .with_source(ErrorSource::new(name).with_property_path(property_path))
}

pub fn errors<I>(entries: I) -> ErrorMap
where
    I: IntoIterator<Item = (&'static str, ErrorRecord)>,
{
    entries
        .into_iter()
        .map(|(key, record)| (key.to_string(), record))
        .collect()
}

/// Main container -> Tabs1 (tab "Tab 1" selected) -> Input1 on "Tab 1",
/// Input2 on "Tab 2"; Modal1 (closed) -> Button1; Box1 (shown) -> Text1.
pub fn editor_page() -> Page {
    let mut page = Page::new();
    page.add(
        "w-tabs",
        widget("Tabs1", "TABS_WIDGET", "0").with_selected_tab("Tab 1"),
    )
    .add(
        "w-input1",
        widget("Input1", "INPUT_WIDGET", "w-tabs").with_tab_name("Tab 1"),
    )
    .add(
        "w-input2",
        widget("Input2", "INPUT_WIDGET", "w-tabs").with_tab_name("Tab 2"),
    )
    .add("w-modal", widget("Modal1", "MODAL_WIDGET", "0").visible(false))
    .add("w-button", widget("Button1", "BUTTON_WIDGET", "w-modal"))
    .add("w-box", widget("Box1", "CONTAINER_WIDGET", "0"))
    .add("w-text", widget("Text1", "TEXT_WIDGET", "w-box"));
    page
}
