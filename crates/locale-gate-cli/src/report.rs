// locale-gate-cli/src/report.rs
// ============================================================================
// Module: Report Rendering
// Description: Human-readable report and CI annotations for a validation pass.
// Purpose: Turn the accumulated report into terminal output and exit advice.
// Dependencies: console, locale-gate-core
// ============================================================================

//! ## Overview
//! Rendering is a pure function of the report plus display options: a
//! coverage table (identifier, percentage, proportional bar, fraction),
//! a grouped error listing, and a capped warning summary. In CI mode the
//! same findings are additionally emitted as workflow-command annotation
//! lines. Display options never change validation outcome.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use console::Style;
use locale_gate_core::Issue;
use locale_gate_core::IssueKind;
use locale_gate_core::Severity;
use locale_gate_core::ValidationReport;

use crate::t;

// ============================================================================
// SECTION: Options
// ============================================================================

/// Display options for one rendering pass.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Whether to apply ANSI styling.
    pub color: bool,
    /// Missing-translation keys listed before truncation.
    pub missing_display_cap: usize,
    /// Coverage bar width in characters.
    pub bar_width: usize,
}

/// Styles applied to report sections; all no-ops when color is off.
struct ReportStyles {
    /// Section header style.
    header: Style,
    /// Style for healthy coverage and the passing verdict.
    good: Style,
    /// Style for advisory findings.
    warn: Style,
    /// Style for blocking findings and the failing verdict.
    bad: Style,
}

impl ReportStyles {
    /// Builds the style set for the options.
    ///
    /// Styling is forced on when color is requested so output does not
    /// depend on whether stdout is a terminal.
    fn new(options: &RenderOptions) -> Self {
        if options.color {
            Self {
                header: Style::new().bold().force_styling(true),
                good: Style::new().green().force_styling(true),
                warn: Style::new().yellow().force_styling(true),
                bad: Style::new().red().force_styling(true),
            }
        } else {
            Self {
                header: Style::new(),
                good: Style::new(),
                warn: Style::new(),
                bad: Style::new(),
            }
        }
    }
}

// ============================================================================
// SECTION: CI Detection
// ============================================================================

/// Decides CI mode from the conventional environment variables.
#[must_use]
pub fn detect_ci(ci: Option<&str>, github_actions: Option<&str>) -> bool {
    ci.is_some_and(is_truthy) || github_actions.is_some_and(is_truthy)
}

/// Conventional truthy parse for CI environment values.
fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

// ============================================================================
// SECTION: Report Rendering
// ============================================================================

/// Renders the full human-readable report.
#[must_use]
pub fn render_report(report: &ValidationReport, options: &RenderOptions) -> String {
    let styles = ReportStyles::new(options);
    let mut output = String::new();

    render_coverage(report, options, &styles, &mut output);
    render_errors(report, &styles, &mut output);
    render_warnings(report, options, &styles, &mut output);
    render_verdict(report, &styles, &mut output);

    output
}

/// Renders the per-locale coverage table.
fn render_coverage(
    report: &ValidationReport,
    options: &RenderOptions,
    styles: &ReportStyles,
    output: &mut String,
) {
    output.push_str(&styles.header.apply_to(t!("report.coverage.header")).to_string());
    output.push('\n');
    if report.locales.is_empty() {
        output.push_str(&t!("report.coverage.empty"));
        output.push('\n');
        return;
    }
    let name_width = report
        .locales
        .iter()
        .map(|locale| locale.as_str().len())
        .max()
        .unwrap_or(0);
    for locale in &report.locales {
        let coverage = report.coverage.get(locale).copied().unwrap_or_default();
        let percent = coverage.percent();
        let bar = coverage_bar(percent, options.bar_width);
        let row = format!(
            "  {:<name_width$}  {percent:>3}%  {bar}  {}/{}",
            locale.as_str(),
            coverage.translated,
            coverage.total,
        );
        let styled = if percent == 100 {
            styles.good.apply_to(row).to_string()
        } else {
            row
        };
        output.push_str(&styled);
        output.push('\n');
    }
}

/// Renders the grouped listing of blocking findings.
fn render_errors(report: &ValidationReport, styles: &ReportStyles, output: &mut String) {
    let errors: Vec<&Issue> = report.errors().collect();
    if errors.is_empty() {
        return;
    }
    output.push('\n');
    output.push_str(
        &styles
            .header
            .apply_to(t!("report.errors.header", count = errors.len()))
            .to_string(),
    );
    output.push('\n');
    let mut current_group: Option<(&str, &str)> = None;
    for issue in errors {
        let group = (issue.locale.as_str(), issue.namespace.as_str());
        if current_group != Some(group) {
            output.push_str(&format!("  {}/{}:\n", group.0, group.1));
            current_group = Some(group);
        }
        let line = format!("    {}: {}", issue.key_or_sentinel(), issue.message);
        output.push_str(&styles.bad.apply_to(line).to_string());
        output.push('\n');
    }
}

/// Renders the capped warning summary.
fn render_warnings(
    report: &ValidationReport,
    options: &RenderOptions,
    styles: &ReportStyles,
    output: &mut String,
) {
    let warnings: Vec<&Issue> = report.warnings().collect();
    if warnings.is_empty() {
        return;
    }
    output.push('\n');
    output.push_str(
        &styles
            .header
            .apply_to(t!("report.warnings.header", count = warnings.len()))
            .to_string(),
    );
    output.push('\n');

    let missing: Vec<&Issue> = warnings
        .iter()
        .copied()
        .filter(|issue| issue.kind == IssueKind::MissingTranslation)
        .collect();
    if !missing.is_empty() {
        output.push_str(&format!(
            "  {}\n",
            t!("report.warnings.missing.header", count = missing.len())
        ));
        for issue in missing.iter().take(options.missing_display_cap) {
            let line = format!(
                "    {}/{}: {}",
                issue.locale.as_str(),
                issue.namespace.as_str(),
                issue.key_or_sentinel(),
            );
            output.push_str(&styles.warn.apply_to(line).to_string());
            output.push('\n');
        }
        if missing.len() > options.missing_display_cap {
            let hidden = missing.len() - options.missing_display_cap;
            output.push_str(&format!(
                "    {}\n",
                t!("report.warnings.missing.more", count = hidden)
            ));
        }
    }

    let empty_values = warnings
        .iter()
        .filter(|issue| issue.kind == IssueKind::EmptyValue)
        .count();
    if empty_values > 0 {
        output.push_str(&format!(
            "  {}\n",
            t!("report.warnings.empty_values", count = empty_values)
        ));
    }
}

/// Renders the final pass/fail line.
fn render_verdict(report: &ValidationReport, styles: &ReportStyles, output: &mut String) {
    output.push('\n');
    if report.has_errors() {
        output.push_str(
            &styles
                .bad
                .apply_to(t!("report.result.fail", count = report.error_count()))
                .to_string(),
        );
    } else {
        output.push_str(&styles.good.apply_to(t!("report.result.pass")).to_string());
    }
    output.push('\n');
}

/// Builds a proportional coverage bar of filled and empty cells.
fn coverage_bar(percent: usize, width: usize) -> String {
    let filled = (percent * width) / 100;
    let filled = filled.min(width);
    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..width {
        bar.push('░');
    }
    bar
}

// ============================================================================
// SECTION: CI Annotations
// ============================================================================

/// Builds one workflow-command annotation line per finding.
///
/// The form is `::{level} file={path}::{message}`, where the path points at
/// the namespace document the finding concerns.
#[must_use]
pub fn annotation_lines(report: &ValidationReport, root: &Path) -> Vec<String> {
    report
        .issues
        .iter()
        .map(|issue| {
            let level = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            let path = root
                .join(issue.locale.as_str())
                .join(issue.namespace.file_name());
            let location = issue.key.as_deref().map_or_else(
                || issue.message.clone(),
                |key| format!("{key}: {}", issue.message),
            );
            format!("::{level} file={}::{location}", path.display())
        })
        .collect()
}
