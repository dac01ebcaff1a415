// locale-gate-cli/src/tests/report.rs
// ============================================================================
// Module: Report Rendering Tests
// Description: Plain-text rendering and annotation tests.
// Purpose: Ensure the report surface is deterministic and complete.
// ============================================================================

//! ## Overview
//! Validates the coverage table, grouped errors, capped warnings, verdict
//! line, CI detection, and annotation formatting against hand-built reports.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions are permitted."
)]

use std::path::Path;

use locale_gate_core::Coverage;
use locale_gate_core::Issue;
use locale_gate_core::IssueKind;
use locale_gate_core::LocaleId;
use locale_gate_core::Namespace;
use locale_gate_core::ValidationReport;

use crate::report::RenderOptions;
use crate::report::annotation_lines;
use crate::report::detect_ci;
use crate::report::render_report;

/// Plain rendering options with a narrow bar.
fn plain_options() -> RenderOptions {
    RenderOptions {
        color: false,
        missing_display_cap: 2,
        bar_width: 8,
    }
}

/// One-locale report with the given counters and issues.
fn report_with(coverage: Coverage, issues: Vec<Issue>) -> ValidationReport {
    let locale = LocaleId::new("ko");
    let mut report = ValidationReport::new();
    report.locales = vec![locale.clone()];
    report.coverage.insert(locale, coverage);
    report.issues = issues;
    report
}

/// Shorthand for a key-level issue against `ko/game`.
fn issue(kind: IssueKind, key: Option<&str>, message: &str) -> Issue {
    Issue::new(
        kind,
        LocaleId::new("ko"),
        Namespace::new("game"),
        key.map(ToString::to_string),
        message,
    )
}

#[test]
fn coverage_row_shows_percent_bar_and_fraction() {
    let report = report_with(
        Coverage {
            total: 4,
            translated: 3,
        },
        Vec::new(),
    );
    let rendered = render_report(&report, &plain_options());
    assert!(rendered.contains("ko"));
    assert!(rendered.contains("75%"));
    // 75% of an 8-cell bar fills 6 cells.
    assert!(rendered.contains("██████░░"));
    assert!(rendered.contains("3/4"));
}

#[test]
fn zero_total_renders_zero_percent() {
    let report = report_with(Coverage::new(), Vec::new());
    let rendered = render_report(&report, &plain_options());
    assert!(rendered.contains("0%"));
    assert!(rendered.contains("░░░░░░░░"));
}

#[test]
fn report_without_locales_notes_the_absence() {
    let report = ValidationReport::new();
    let rendered = render_report(&report, &plain_options());
    assert!(rendered.contains("No target locales discovered."));
    assert!(rendered.contains("No blocking issues found."));
}

#[test]
fn errors_are_grouped_by_locale_and_namespace() {
    let report = report_with(
        Coverage {
            total: 2,
            translated: 2,
        },
        vec![
            issue(IssueKind::MissingPlaceholder, Some("win"), "missing placeholder: hero"),
            issue(IssueKind::ExtraKey, Some("ghost"), "extra key not in source"),
        ],
    );
    let rendered = render_report(&report, &plain_options());
    assert!(rendered.contains("Errors (2)"));
    assert!(rendered.contains("ko/game:"));
    assert!(rendered.contains("win: missing placeholder: hero"));
    assert!(rendered.contains("ghost: extra key not in source"));
    assert!(rendered.contains("2 blocking issue(s) found."));
}

#[test]
fn file_level_issue_renders_the_sentinel() {
    let report = report_with(
        Coverage {
            total: 3,
            translated: 0,
        },
        vec![issue(IssueKind::FileUnreadable, None, "file missing or invalid: gone")],
    );
    let rendered = render_report(&report, &plain_options());
    assert!(rendered.contains("(file): file missing or invalid: gone"));
}

#[test]
fn missing_warnings_truncate_at_the_cap() {
    let report = report_with(
        Coverage {
            total: 3,
            translated: 0,
        },
        vec![
            issue(IssueKind::MissingTranslation, Some("a"), "missing translation"),
            issue(IssueKind::MissingTranslation, Some("b"), "missing translation"),
            issue(IssueKind::MissingTranslation, Some("c"), "missing translation"),
        ],
    );
    let rendered = render_report(&report, &plain_options());
    assert!(rendered.contains("Warnings (3)"));
    assert!(rendered.contains("Missing translations (3):"));
    assert!(rendered.contains("ko/game: a"));
    assert!(rendered.contains("ko/game: b"));
    assert!(!rendered.contains("ko/game: c"));
    assert!(rendered.contains("...and 1 more"));
}

#[test]
fn empty_value_warnings_are_a_count_only() {
    let report = report_with(
        Coverage {
            total: 2,
            translated: 2,
        },
        vec![
            issue(IssueKind::EmptyValue, Some("a"), "empty value"),
            issue(IssueKind::EmptyValue, Some("b"), "empty value"),
        ],
    );
    let rendered = render_report(&report, &plain_options());
    assert!(rendered.contains("Empty values: 2"));
    assert!(!rendered.contains("ko/game: a"));
}

#[test]
fn warnings_alone_still_pass() {
    let report = report_with(
        Coverage {
            total: 1,
            translated: 0,
        },
        vec![issue(IssueKind::MissingTranslation, Some("a"), "missing translation")],
    );
    let rendered = render_report(&report, &plain_options());
    assert!(rendered.contains("No blocking issues found."));
    assert!(!report.has_errors());
}

#[test]
fn plain_rendering_has_no_ansi_escapes() {
    let report = report_with(
        Coverage {
            total: 1,
            translated: 1,
        },
        vec![issue(IssueKind::ExtraKey, Some("x"), "extra key not in source")],
    );
    let rendered = render_report(&report, &plain_options());
    assert!(!rendered.contains('\u{1b}'));
}

#[test]
fn colored_rendering_styles_the_verdict() {
    let report = report_with(
        Coverage {
            total: 1,
            translated: 1,
        },
        Vec::new(),
    );
    let options = RenderOptions {
        color: true,
        missing_display_cap: 2,
        bar_width: 8,
    };
    let rendered = render_report(&report, &options);
    assert!(rendered.contains('\u{1b}'));
}

#[test]
fn ci_detection_accepts_conventional_truthy_values() {
    assert!(detect_ci(Some("true"), None));
    assert!(detect_ci(Some("1"), None));
    assert!(detect_ci(None, Some("true")));
    assert!(detect_ci(Some("YES"), None));
    assert!(!detect_ci(Some("false"), None));
    assert!(!detect_ci(Some("0"), None));
    assert!(!detect_ci(Some(""), None));
    assert!(!detect_ci(None, None));
}

#[test]
fn annotations_carry_level_path_and_message() {
    let report = report_with(
        Coverage {
            total: 2,
            translated: 1,
        },
        vec![
            issue(IssueKind::MissingPlaceholder, Some("win"), "missing placeholder: hero"),
            issue(IssueKind::MissingTranslation, Some("bye"), "missing translation"),
            issue(IssueKind::FileUnreadable, None, "file missing or invalid: gone"),
        ],
    );
    let lines = annotation_lines(&report, Path::new("locales"));
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "::error file=locales/ko/game.json::win: missing placeholder: hero"
    );
    assert_eq!(
        lines[1],
        "::warning file=locales/ko/game.json::bye: missing translation"
    );
    assert_eq!(
        lines[2],
        "::error file=locales/ko/game.json::file missing or invalid: gone"
    );
}
