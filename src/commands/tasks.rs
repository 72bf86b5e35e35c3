//! Review and VVB task boards.
//!
//! The whole collection is fetched once; `--status` and `--search` narrow it
//! locally, and `--stats` summarizes the unfiltered collection.

use owo_colors::OwoColorize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::{CommandOutput, connect};
use crate::api::CollectionSource;
use crate::cli::OutputOptions;
use crate::display::{format_review_stats, format_task_stats, format_tasks};
use crate::entity::{ReviewDetails, Task, TaskDetails, ValidationDetails, VerificationDetails};
use crate::error::{CredoError, Result};
use crate::list::{ListView, LoadOutcome, StatusFilter};
use crate::stats::{ReviewStats, TaskStats};
use crate::types::TaskStatus;

#[derive(Debug, Clone, Default)]
pub struct TaskListOptions {
    pub status: Option<TaskStatus>,
    pub search: Option<String>,
    pub stats: bool,
}

/// Per-board summary counters.
trait BoardSummary: TaskDetails + Serialize + DeserializeOwned {
    fn summarize(tasks: &[Task<Self>]) -> (Value, String);
}

impl BoardSummary for ReviewDetails {
    fn summarize(tasks: &[Task<Self>]) -> (Value, String) {
        let stats = ReviewStats::from_reviews(tasks);
        (json!(stats), format_review_stats(&stats))
    }
}

impl BoardSummary for ValidationDetails {
    fn summarize(tasks: &[Task<Self>]) -> (Value, String) {
        let stats = TaskStats::from_tasks(tasks);
        (json!(stats), format_task_stats(&stats))
    }
}

impl BoardSummary for VerificationDetails {
    fn summarize(tasks: &[Task<Self>]) -> (Value, String) {
        let stats = TaskStats::from_verifications(tasks);
        (json!(stats), format_task_stats(&stats))
    }
}

/// List registry reviews assigned to the current user
pub async fn cmd_reviews(options: TaskListOptions, output: OutputOptions) -> Result<()> {
    run_board(CollectionSource::reviews(connect()?), options, output).await
}

/// List VVB validation tasks assigned to the current user
pub async fn cmd_validations(options: TaskListOptions, output: OutputOptions) -> Result<()> {
    run_board(CollectionSource::validations(connect()?), options, output).await
}

/// List VVB verification tasks assigned to the current user
pub async fn cmd_verifications(options: TaskListOptions, output: OutputOptions) -> Result<()> {
    run_board(CollectionSource::verifications(connect()?), options, output).await
}

async fn run_board<D: BoardSummary>(
    source: CollectionSource<Task<D>>,
    options: TaskListOptions,
    output: OutputOptions,
) -> Result<()> {
    let label = D::KIND.label();
    let view = ListView::new(source);

    if view.refresh().await == LoadOutcome::Failed {
        let banner = view.snapshot().error.unwrap_or_default();
        return Err(CredoError::Failed(banner));
    }

    // Client-filtered: neither call fetches again.
    view.set_filter(StatusFilter::from(options.status)).await;
    if let Some(search) = options.search {
        view.submit_search_text(search).await;
    }

    let all = view.snapshot().items;
    let rows = view.rows();

    let mut json_output = json!({
        "items": rows,
        "shown": rows.len(),
        "total": all.len(),
    });

    let mut text = String::new();
    if options.stats {
        let (stats_json, stats_line) = D::summarize(&all);
        json_output["stats"] = stats_json;
        text.push_str(&format!("{}\n\n", stats_line.bold()));
    }

    if rows.is_empty() {
        text.push_str(&format!("No {label} found."));
    } else {
        text.push_str(&format_tasks(&rows));
        text.push_str(&format!("\n{} of {} {label}", rows.len(), all.len()));
    }

    CommandOutput::new(json_output).with_text(text).print(output)
}
