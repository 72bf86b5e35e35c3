//! Summary counters shown above the review and VVB task boards.
//!
//! Counts are taken over the whole fetched collection, not the filtered rows.

use serde::Serialize;

use crate::entity::{Review, Task, TaskDetails, VerificationTask};
use crate::types::TaskStatus;

/// Registry review board counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReviewStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl ReviewStats {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut stats = Self {
            total: reviews.len(),
            ..Self::default()
        };
        for review in reviews {
            match review.status {
                TaskStatus::Assigned => stats.pending += 1,
                TaskStatus::Rejected => stats.rejected += 1,
                status if status.is_active() => stats.in_progress += 1,
                status if status.is_done() => stats.approved += 1,
                _ => {}
            }
        }
        stats
    }
}

/// VVB validation and verification board counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub assigned: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Only populated for verification tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits_verified: Option<f64>,
}

impl TaskStats {
    pub fn from_tasks<D: TaskDetails>(tasks: &[Task<D>]) -> Self {
        let mut stats = Self {
            total: tasks.len(),
            ..Self::default()
        };
        for task in tasks {
            match task.status {
                TaskStatus::Assigned => stats.assigned += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                status if status.is_done() => stats.completed += 1,
                _ => {}
            }
        }
        stats
    }

    /// Counters plus the total credits verified. Missing amounts count as zero.
    pub fn from_verifications(tasks: &[VerificationTask]) -> Self {
        let credits = tasks
            .iter()
            .map(|t| t.details.credits_verified.unwrap_or(0.0))
            .sum();
        Self {
            credits_verified: Some(credits),
            ..Self::from_tasks(tasks)
        }
    }
}
