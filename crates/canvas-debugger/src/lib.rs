#![deny(unsafe_code)]

pub mod cache;
pub mod config;
pub mod counter;
pub mod error;
pub mod filter;
pub mod graph;
pub mod routes;
pub mod visibility;

pub use crate::cache::{SelectorCache, SelectorInputs};
pub use crate::config::{ContainerTypes, DebuggerConfig, MissingAncestorPolicy};
pub use crate::counter::{DEFAULT_WARNING_MARKER, MessageCount};
pub use crate::error::{ConfigError, RouteError, VisibilityError};
pub use crate::filter::{ErrorFilter, filter_errors};
pub use crate::graph::{SnapshotGraph, WidgetGraph};
pub use crate::routes::{DATASOURCE_EDITOR_ROUTE, RoutePattern, hide_debugger_icon};
pub use crate::visibility::{ContainerPolicy, VisibilityResolver};

use canvas_model::{DebuggerSnapshot, ErrorMap};

/// Errors the debugger panel shows for `snapshot`.
///
/// # Errors
///
/// Returns [`VisibilityError`] when a referenced widget has looping parent links.
pub fn snapshot_errors(
    snapshot: &DebuggerSnapshot,
    config: &DebuggerConfig,
) -> Result<ErrorMap, VisibilityError> {
    filter_errors(
        &snapshot.debugger.errors,
        snapshot.debugger.hide_errors,
        &snapshot.canvas_widgets,
        &snapshot.data_tree,
        config,
    )
}
