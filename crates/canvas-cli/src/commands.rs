use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use tracing::{info, info_span};

use canvas_cli::report::{ErrorReport, VisibilityRow, load_snapshot, visibility_rows};
use canvas_debugger::{DebuggerConfig, MessageCount, hide_debugger_icon};

use crate::cli::{IconArgs, OutputFormatArg, SnapshotArgs, VisibilityArgs};
use crate::summary::{print_counts, print_error_report, print_visibility};

pub fn run_errors(args: &SnapshotArgs, config: &DebuggerConfig) -> Result<()> {
    let span = info_span!("errors", snapshot = %args.snapshot.display());
    let _guard = span.enter();
    let snapshot = load_snapshot(&args.snapshot)?;
    let report = ErrorReport::build(&snapshot, config).context("filter debugger errors")?;
    info!(
        total = report.total,
        shown = report.errors.len(),
        errors = report.count.errors,
        warnings = report.count.warnings,
        "debugger errors filtered"
    );
    match args.format {
        OutputFormatArg::Table => print_error_report(&report),
        OutputFormatArg::Json => print_json(&report)?,
    }
    Ok(())
}

pub fn run_count(args: &SnapshotArgs, config: &DebuggerConfig) -> Result<()> {
    let span = info_span!("count", snapshot = %args.snapshot.display());
    let _guard = span.enter();
    let snapshot = load_snapshot(&args.snapshot)?;
    let count: MessageCount = ErrorReport::build(&snapshot, config)
        .context("filter debugger errors")?
        .count;
    info!(errors = count.errors, warnings = count.warnings, "badge counts");
    match args.format {
        OutputFormatArg::Table => print_counts(&count),
        OutputFormatArg::Json => print_json(&count)?,
    }
    Ok(())
}

pub fn run_visibility(args: &VisibilityArgs, config: &DebuggerConfig) -> Result<()> {
    let span = info_span!("visibility", snapshot = %args.snapshot.snapshot.display());
    let _guard = span.enter();
    let snapshot = load_snapshot(&args.snapshot.snapshot)?;
    let rows: Vec<VisibilityRow> = visibility_rows(&snapshot, config, args.widget.as_deref())
        .context("resolve widget visibility")?;
    if let Some(widget) = &args.widget
        && rows.is_empty()
    {
        return Err(anyhow!("widget {widget} has no evaluated state in the snapshot"));
    }
    info!(widgets = rows.len(), "widget visibility resolved");
    match args.snapshot.format {
        OutputFormatArg::Table => print_visibility(&rows),
        OutputFormatArg::Json => print_json(&rows)?,
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IconDecision<'a> {
    path: &'a str,
    hide_debugger_icon: bool,
}

pub fn run_icon(args: &IconArgs, config: &DebuggerConfig) -> Result<()> {
    let route = config.datasource_route().context("compile datasource route")?;
    let recorded = match (&args.path, &args.snapshot) {
        (Some(_), _) => None,
        (None, Some(path)) => Some(load_snapshot(path)?.location.ok_or_else(|| {
            anyhow!("snapshot {} has no recorded location", path.display())
        })?),
        (None, None) => return Err(anyhow!("either PATH or --snapshot is required")),
    };
    let path = args
        .path
        .as_deref()
        .or(recorded.as_deref())
        .unwrap_or_default();
    let decision = IconDecision {
        path,
        hide_debugger_icon: hide_debugger_icon(&route, path),
    };
    info!(path, hidden = decision.hide_debugger_icon, route = %route, "debugger icon");
    println!("{}", serde_json::to_string(&decision)?);
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
