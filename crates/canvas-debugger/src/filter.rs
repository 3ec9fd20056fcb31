//! Removes debugger errors attributed to widgets the user cannot see.

use tracing::{debug, trace};

use canvas_model::{CanvasWidgets, DataTree, ErrorMap, ErrorRecord};

use crate::config::DebuggerConfig;
use crate::error::VisibilityError;
use crate::graph::{SnapshotGraph, WidgetGraph};
use crate::visibility::VisibilityResolver;

pub struct ErrorFilter<'g, G: WidgetGraph + ?Sized> {
    resolver: VisibilityResolver<'g, G>,
    config: &'g DebuggerConfig,
}

impl<'g, G: WidgetGraph + ?Sized> ErrorFilter<'g, G> {
    pub fn new(graph: &'g G, config: &'g DebuggerConfig) -> Self {
        Self {
            resolver: VisibilityResolver::new(graph, config),
            config,
        }
    }

    /// Whether `record` stays in the debugger.
    ///
    /// Errors not attributed to a widget are always kept. Errors on a hidden
    /// widget are kept only when they are about the widget's visibility
    /// property and every container above it is shown.
    ///
    /// # Errors
    ///
    /// Propagates [`VisibilityError`] from the parent walk.
    pub fn retains(&self, record: &ErrorRecord) -> Result<bool, VisibilityError> {
        let Some(name) = record.source_name() else {
            return Ok(true);
        };
        let Some(widget) = self.resolver.graph().evaluated(name) else {
            return Ok(true);
        };
        let explains_visibility =
            record.property_path() == Some(self.config.visibility_property.as_str());

        if !self.resolver.has_parent(widget) {
            return Ok(widget.is_visible || explains_visibility);
        }
        let chain_visible = self.resolver.is_effectively_visible(widget)?;
        Ok(if widget.is_visible {
            chain_visible
        } else {
            chain_visible && explains_visibility
        })
    }

    /// Retained subset of `errors`, keys and records unchanged.
    ///
    /// # Errors
    ///
    /// Propagates [`VisibilityError`] from the parent walk.
    pub fn filter(&self, errors: &ErrorMap) -> Result<ErrorMap, VisibilityError> {
        let mut retained = ErrorMap::new();
        for (key, record) in errors {
            let keep = self.retains(record)?;
            trace!(key = %key, source = record.source_name(), keep, "debugger error");
            if keep {
                retained.insert(key.clone(), record.clone());
            }
        }
        debug!(
            total = errors.len(),
            retained = retained.len(),
            "filtered debugger errors"
        );
        Ok(retained)
    }
}

/// Errors the debugger should currently show.
///
/// Returns an empty map when `hide_errors` is set.
///
/// # Errors
///
/// Returns [`VisibilityError::CyclicParentChain`] when a widget referenced by
/// an error has looping parent links.
pub fn filter_errors(
    errors: &ErrorMap,
    hide_errors: bool,
    canvas_widgets: &CanvasWidgets,
    data_tree: &DataTree,
    config: &DebuggerConfig,
) -> Result<ErrorMap, VisibilityError> {
    if hide_errors {
        debug!(total = errors.len(), "debugger errors hidden");
        return Ok(ErrorMap::new());
    }
    let graph = SnapshotGraph::new(canvas_widgets, data_tree);
    ErrorFilter::new(&graph, config).filter(errors)
}
