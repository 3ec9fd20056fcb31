//! Memoized debugger selectors.
//!
//! Inputs are compared by `Arc` pointer identity, the way the host replaces
//! state slices wholesale on every change. Holding on to the previous `Arc`s
//! keeps their allocations alive, so a pointer cannot be reused by a new
//! value while it is still cached.

use std::sync::Arc;

use tracing::debug;

use canvas_model::{CanvasWidgets, DataTree, DebuggerSnapshot, ErrorMap};

use crate::config::DebuggerConfig;
use crate::counter::MessageCount;
use crate::error::VisibilityError;
use crate::filter::filter_errors;

/// Shared inputs of the debugger selectors.
#[derive(Debug, Clone)]
pub struct SelectorInputs {
    pub errors: Arc<ErrorMap>,
    pub hide_errors: bool,
    pub canvas_widgets: Arc<CanvasWidgets>,
    pub data_tree: Arc<DataTree>,
}

impl SelectorInputs {
    pub fn from_snapshot(snapshot: DebuggerSnapshot) -> Self {
        Self {
            errors: Arc::new(snapshot.debugger.errors),
            hide_errors: snapshot.debugger.hide_errors,
            canvas_widgets: Arc::new(snapshot.canvas_widgets),
            data_tree: Arc::new(snapshot.data_tree),
        }
    }

    fn is_identical(&self, other: &Self) -> bool {
        self.hide_errors == other.hide_errors
            && Arc::ptr_eq(&self.errors, &other.errors)
            && Arc::ptr_eq(&self.canvas_widgets, &other.canvas_widgets)
            && Arc::ptr_eq(&self.data_tree, &other.data_tree)
    }
}

#[derive(Debug)]
struct Selection {
    inputs: SelectorInputs,
    filtered: Arc<ErrorMap>,
    count: MessageCount,
}

/// Caches the last filtered error set and its badge counts.
#[derive(Debug)]
pub struct SelectorCache {
    config: DebuggerConfig,
    last: Option<Selection>,
    recomputations: usize,
}

impl SelectorCache {
    pub fn new(config: DebuggerConfig) -> Self {
        Self {
            config,
            last: None,
            recomputations: 0,
        }
    }

    pub fn config(&self) -> &DebuggerConfig {
        &self.config
    }

    /// Filtered errors for `inputs`, recomputed only when an input changed.
    ///
    /// # Errors
    ///
    /// Propagates [`VisibilityError`] from the filter; failed computations
    /// are not cached.
    pub fn filtered_errors(
        &mut self,
        inputs: &SelectorInputs,
    ) -> Result<Arc<ErrorMap>, VisibilityError> {
        self.select(inputs).map(|(filtered, _)| filtered)
    }

    /// Badge counts for the filtered errors of `inputs`.
    ///
    /// # Errors
    ///
    /// Propagates [`VisibilityError`] from the filter.
    pub fn message_count(
        &mut self,
        inputs: &SelectorInputs,
    ) -> Result<MessageCount, VisibilityError> {
        self.select(inputs).map(|(_, count)| count)
    }

    /// Number of times the filter actually ran.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    pub fn invalidate(&mut self) {
        self.last = None;
    }

    fn select(
        &mut self,
        inputs: &SelectorInputs,
    ) -> Result<(Arc<ErrorMap>, MessageCount), VisibilityError> {
        if let Some(last) = &self.last
            && last.inputs.is_identical(inputs)
        {
            return Ok((Arc::clone(&last.filtered), last.count));
        }

        let filtered = Arc::new(filter_errors(
            &inputs.errors,
            inputs.hide_errors,
            &inputs.canvas_widgets,
            &inputs.data_tree,
            &self.config,
        )?);
        let count = MessageCount::with_marker(&filtered, &self.config.warning_marker);
        self.recomputations += 1;
        debug!(
            recomputations = self.recomputations,
            errors = count.errors,
            warnings = count.warnings,
            "recomputed debugger selectors"
        );
        self.last = Some(Selection {
            inputs: inputs.clone(),
            filtered: Arc::clone(&filtered),
            count,
        });
        Ok((filtered, count))
    }
}
