//! Terminal rendering for list views: badges, tables, summaries.

use owo_colors::{OwoColorize, Stream};

use crate::stats::{ReviewStats, TaskStats};
use crate::types::{TaskKind, TaskStatus, TierCode};

pub mod tables;

pub use tables::{format_subscriptions, format_tasks, format_tier_cards};

/// Status badge with the board-specific label, e.g. `[Under Review]`.
pub fn format_status_colored(status: TaskStatus, kind: TaskKind) -> String {
    format_status_colored_with_format(status, kind, |s| format!("[{s}]"))
}

pub fn format_status_colored_with_format<F>(status: TaskStatus, kind: TaskKind, format_fn: F) -> String
where
    F: Fn(&str) -> String,
{
    let badge = format_fn(status.label(kind));
    match status {
        TaskStatus::Assigned => badge
            .if_supports_color(Stream::Stdout, |s| s.yellow())
            .to_string(),
        TaskStatus::InProgress | TaskStatus::UnderReview => badge
            .if_supports_color(Stream::Stdout, |s| s.cyan())
            .to_string(),
        TaskStatus::Completed | TaskStatus::Approved => badge
            .if_supports_color(Stream::Stdout, |s| s.green())
            .to_string(),
        TaskStatus::Rejected => badge
            .if_supports_color(Stream::Stdout, |s| s.red())
            .to_string(),
    }
}

/// Tier code as shown in lists. The full package gets a crown.
pub fn format_tier(tier: TierCode) -> String {
    match tier {
        TierCode::PkgFull => format!("👑 {tier}")
            .if_supports_color(Stream::Stdout, |s| s.magenta())
            .to_string(),
        TierCode::Pkg0 => tier
            .as_str()
            .if_supports_color(Stream::Stdout, |s| s.dimmed())
            .to_string(),
        _ => tier.to_string(),
    }
}

/// "Page N of M", only when there is somewhere else to go.
pub fn pagination_footer(page: u32, total_pages: u32) -> Option<String> {
    (total_pages > 1).then(|| format!("Page {page} of {total_pages}"))
}

pub fn format_review_stats(stats: &ReviewStats) -> String {
    format!(
        "Pending: {}  Under Review: {}  Approved: {}  Rejected: {}",
        stats.pending, stats.in_progress, stats.approved, stats.rejected
    )
}

pub fn format_task_stats(stats: &TaskStats) -> String {
    let mut line = format!(
        "Assigned: {}  In Progress: {}  Completed: {}",
        stats.assigned, stats.in_progress, stats.completed
    );
    if let Some(credits) = stats.credits_verified {
        line.push_str(&format!("  Credits Verified: {}", format_credits(credits)));
    }
    line
}

/// Whole credits get thousands separators; fractional amounts keep two decimals.
/// Negative totals keep their sign and non-finite values print as-is.
pub fn format_credits(credits: f64) -> String {
    if !credits.is_finite() {
        return credits.to_string();
    }
    let cents_total = (credits.abs() * 100.0).round() as u64;
    let sign = if credits < 0.0 && cents_total > 0 { "-" } else { "" };
    let mut digits = (cents_total / 100).to_string();
    let mut grouped = String::new();
    while digits.len() > 3 {
        let tail = digits.split_off(digits.len() - 3);
        grouped = format!(",{tail}{grouped}");
    }
    grouped = format!("{sign}{digits}{grouped}");

    match cents_total % 100 {
        0 => grouped,
        cents => format!("{grouped}.{cents:02}"),
    }
}

/// Date part of an ISO timestamp.
pub fn format_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
