use serde::{Deserialize, Serialize};

use canvas_model::ErrorMap;

/// Key substring marking a debugger message as a warning.
pub const DEFAULT_WARNING_MARKER: &str = "warning";

/// Badge counts for the debugger icon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCount {
    pub errors: usize,
    pub warnings: usize,
}

impl MessageCount {
    /// Count messages using the default `"warning"` marker.
    pub fn from_errors(errors: &ErrorMap) -> Self {
        Self::with_marker(errors, DEFAULT_WARNING_MARKER)
    }

    /// Count messages, classifying keys containing `marker` (case-sensitive)
    /// as warnings and everything else as errors.
    pub fn with_marker(errors: &ErrorMap, marker: &str) -> Self {
        let warnings = errors
            .keys()
            .filter(|key| is_warning_key(key, marker))
            .count();
        Self {
            errors: errors.len() - warnings,
            warnings,
        }
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

pub fn is_warning_key(key: &str, marker: &str) -> bool {
    key.contains(marker)
}
