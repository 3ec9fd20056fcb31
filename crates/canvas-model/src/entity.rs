use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::widget::WidgetType;

/// Runtime state of a widget after evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedWidget {
    #[serde(default)]
    pub widget_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_id: Option<String>,
    #[serde(rename = "type", default)]
    pub widget_type: WidgetType,
    /// Missing flags evaluate to hidden.
    #[serde(default)]
    pub is_visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Set on tab containers: name of the tab currently shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_tab: Option<String>,
    /// Set on tab content: name of the tab this widget belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_name: Option<String>,
}

impl EvaluatedWidget {
    pub fn new(widget_name: impl Into<String>, widget_type: impl Into<WidgetType>) -> Self {
        Self {
            widget_name: widget_name.into(),
            widget_type: widget_type.into(),
            is_visible: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    #[must_use]
    pub fn visible(mut self, is_visible: bool) -> Self {
        self.is_visible = is_visible;
        self
    }

    #[must_use]
    pub fn with_selected_tab(mut self, tab: impl Into<String>) -> Self {
        self.selected_tab = Some(tab.into());
        self
    }

    #[must_use]
    pub fn with_tab_name(mut self, tab: impl Into<String>) -> Self {
        self.tab_name = Some(tab.into());
        self
    }
}

/// Non-widget action entity (API/query or JS object) in the data tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default)]
    pub is_loading: bool,
}

/// One entry of the evaluated data tree, discriminated by `ENTITY_TYPE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "ENTITY_TYPE")]
pub enum DataTreeEntity {
    #[serde(rename = "WIDGET")]
    Widget(EvaluatedWidget),
    #[serde(rename = "ACTION")]
    Action(ActionEntity),
    #[serde(rename = "JSACTION")]
    JsAction(ActionEntity),
    #[serde(rename = "APPSMITH")]
    App,
    #[serde(other)]
    Unknown,
}

impl DataTreeEntity {
    /// Returns the widget payload when this entity is widget-shaped.
    pub fn as_widget(&self) -> Option<&EvaluatedWidget> {
        match self {
            Self::Widget(widget) => Some(widget),
            _ => None,
        }
    }

    pub fn is_widget(&self) -> bool {
        matches!(self, Self::Widget(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Widget(_) => "WIDGET",
            Self::Action(_) => "ACTION",
            Self::JsAction(_) => "JSACTION",
            Self::App => "APPSMITH",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl From<EvaluatedWidget> for DataTreeEntity {
    fn from(widget: EvaluatedWidget) -> Self {
        Self::Widget(widget)
    }
}

/// Evaluated entities keyed by entity name.
pub type DataTree = BTreeMap<String, DataTreeEntity>;
