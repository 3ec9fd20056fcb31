//! Report data built from a debugger snapshot.
//!
//! The binary renders these as tables or JSON; `render_plain` gives a stable
//! line-oriented form for logs and tests.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use canvas_debugger::{
    DebuggerConfig, MessageCount, SnapshotGraph, VisibilityError, VisibilityResolver,
    counter::is_warning_key, snapshot_errors,
};
use canvas_model::{DebuggerSnapshot, DebuggerTab};

/// Read and parse a JSON snapshot file.
pub fn load_snapshot(path: &Path) -> Result<DebuggerSnapshot> {
    let bytes = fs::read(path).with_context(|| format!("read snapshot {}", path.display()))?;
    DebuggerSnapshot::from_json_slice(&bytes)
        .with_context(|| format!("parse snapshot {}", path.display()))
}

/// Load the configuration file, or defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<DebuggerConfig> {
    match path {
        Some(path) => DebuggerConfig::load(path).context("load debugger config"),
        None => Ok(DebuggerConfig::default()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Error,
    Warning,
}

impl MessageKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRow {
    pub key: String,
    pub kind: MessageKind,
    pub source: Option<String>,
    pub property_path: Option<String>,
    pub message: Option<String>,
}

/// Filtered debugger errors with badge counts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub current_tab: DebuggerTab,
    pub hide_errors: bool,
    /// Errors in the snapshot before filtering.
    pub total: usize,
    pub count: MessageCount,
    pub errors: Vec<ErrorRow>,
}

impl ErrorReport {
    /// # Errors
    ///
    /// Returns [`VisibilityError`] when a referenced widget has looping parent links.
    pub fn build(
        snapshot: &DebuggerSnapshot,
        config: &DebuggerConfig,
    ) -> Result<Self, VisibilityError> {
        let filtered = snapshot_errors(snapshot, config)?;
        let count = MessageCount::with_marker(&filtered, &config.warning_marker);
        let errors = filtered
            .into_iter()
            .map(|(key, record)| {
                let kind = if is_warning_key(&key, &config.warning_marker) {
                    MessageKind::Warning
                } else {
                    MessageKind::Error
                };
                let property_path = record.property_path().map(str::to_string);
                let source = record.source_name().map(str::to_string);
                ErrorRow {
                    key,
                    kind,
                    source,
                    property_path,
                    message: record.text,
                }
            })
            .collect();
        Ok(Self {
            current_tab: snapshot.debugger.current_tab(),
            hide_errors: snapshot.debugger.hide_errors,
            total: snapshot.debugger.errors.len(),
            count,
            errors,
        })
    }

    pub fn hidden(&self) -> usize {
        self.total - self.errors.len()
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "tab={} shown={} hidden={} errors={} warnings={}",
            self.current_tab,
            self.errors.len(),
            self.hidden(),
            self.count.errors,
            self.count.warnings
        );
        for row in &self.errors {
            let _ = writeln!(
                out,
                "{} {} {}.{} {}",
                row.kind.label(),
                row.key,
                row.source.as_deref().unwrap_or("-"),
                row.property_path.as_deref().unwrap_or("-"),
                row.message.as_deref().unwrap_or("")
            );
        }
        out
    }
}

/// Effective visibility of one evaluated widget.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityRow {
    pub widget: String,
    pub widget_type: String,
    pub is_visible: bool,
    /// Shown on the canvas: the widget's own flag and its whole container chain.
    pub effective: bool,
    /// Containers above the widget, nearest first.
    pub ancestors: Vec<String>,
}

/// Visibility of every evaluated widget, or only `only` when given.
///
/// # Errors
///
/// Returns [`VisibilityError`] when a widget has looping parent links.
pub fn visibility_rows(
    snapshot: &DebuggerSnapshot,
    config: &DebuggerConfig,
    only: Option<&str>,
) -> Result<Vec<VisibilityRow>, VisibilityError> {
    let graph = SnapshotGraph::new(&snapshot.canvas_widgets, &snapshot.data_tree);
    let resolver = VisibilityResolver::new(&graph, config);
    let mut rows = Vec::new();
    for (name, widget) in graph.widgets() {
        if only.is_some_and(|wanted| wanted != name) {
            continue;
        }
        rows.push(VisibilityRow {
            widget: name.to_string(),
            widget_type: widget.widget_type.to_string(),
            is_visible: widget.is_visible,
            effective: widget.is_visible && resolver.is_effectively_visible(widget)?,
            ancestors: resolver
                .ancestors(widget)?
                .into_iter()
                .map(str::to_string)
                .collect(),
        });
    }
    Ok(rows)
}

pub fn render_visibility_plain(rows: &[VisibilityRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let path = if row.ancestors.is_empty() {
            "(root)".to_string()
        } else {
            row.ancestors.join(" < ")
        };
        let _ = writeln!(
            out,
            "{} {} own={} effective={} in {}",
            row.widget, row.widget_type, row.is_visible, row.effective, path
        );
    }
    out
}
