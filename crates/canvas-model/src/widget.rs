use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Id of the main canvas container. A `parentId` equal to this means the
/// widget sits at the root of the page.
pub const MAIN_CONTAINER_WIDGET_ID: &str = "0";

/// Widget type tag as emitted by the editor (e.g. `"TABS_WIDGET"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetType(String);

impl WidgetType {
    pub const TABS: &'static str = "TABS_WIDGET";
    pub const MODAL: &'static str = "MODAL_WIDGET";
    pub const CONTAINER: &'static str = "CONTAINER_WIDGET";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WidgetType {
    fn default() -> Self {
        Self(String::from("UNKNOWN_WIDGET"))
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Authored widget as stored in the canvas widget map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetNode {
    pub widget_id: String,
    pub widget_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(rename = "type", default)]
    pub widget_type: WidgetType,
}

impl WidgetNode {
    pub fn new(
        widget_id: impl Into<String>,
        widget_name: impl Into<String>,
        widget_type: impl Into<WidgetType>,
    ) -> Self {
        Self {
            widget_id: widget_id.into(),
            widget_name: widget_name.into(),
            parent_id: None,
            widget_type: widget_type.into(),
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}

/// Canvas widgets keyed by widget id.
pub type CanvasWidgets = BTreeMap<String, WidgetNode>;
