use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::DataTree;
use crate::error::Result;
use crate::message::ErrorMap;
use crate::widget::CanvasWidgets;

/// Tabs of the debugger panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebuggerTab {
    #[default]
    Errors,
    Logs,
}

impl DebuggerTab {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Errors => "Errors",
            Self::Logs => "Logs",
        }
    }
}

impl fmt::Display for DebuggerTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Debugger slice of the editor UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebuggerState {
    #[serde(default)]
    pub errors: ErrorMap,
    /// When set, the panel shows no errors at all.
    #[serde(default)]
    pub hide_errors: bool,
    #[serde(default)]
    pub current_tab: DebuggerTab,
}

impl DebuggerState {
    pub fn current_tab(&self) -> DebuggerTab {
        self.current_tab
    }
}

/// Everything the debugger derivations read from the host, captured at one
/// point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebuggerSnapshot {
    #[serde(default)]
    pub debugger: DebuggerState,
    #[serde(default)]
    pub canvas_widgets: CanvasWidgets,
    #[serde(default)]
    pub data_tree: DataTree,
    /// Editor location (path only) at capture time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl DebuggerSnapshot {
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_json_slice(input: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(input)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
