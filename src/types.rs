use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CredoError;

/// Rows per page requested from server-paginated endpoints.
pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// Lifecycle status shared by registry reviews and VVB validation/verification tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Assigned,
    InProgress,
    UnderReview,
    Completed,
    Approved,
    Rejected,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 6] = [
        TaskStatus::Assigned,
        TaskStatus::InProgress,
        TaskStatus::UnderReview,
        TaskStatus::Completed,
        TaskStatus::Approved,
        TaskStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Assigned => "ASSIGNED",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::UnderReview => "UNDER_REVIEW",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Approved => "APPROVED",
            TaskStatus::Rejected => "REJECTED",
        }
    }

    /// Human label for this status on the given board.
    ///
    /// The registry board calls active work "Under Review" while the VVB
    /// boards call it "In Progress".
    pub fn label(self, kind: TaskKind) -> &'static str {
        match self {
            TaskStatus::Assigned => "Pending Review",
            TaskStatus::InProgress => match kind {
                TaskKind::Review => "Under Review",
                TaskKind::Validation | TaskKind::Verification => "In Progress",
            },
            TaskStatus::UnderReview => "Under Review",
            TaskStatus::Completed => "Completed",
            TaskStatus::Approved => "Approved",
            TaskStatus::Rejected => "Rejected",
        }
    }

    /// Whether the status counts towards the "in progress" summary.
    pub fn is_active(self) -> bool {
        matches!(self, TaskStatus::InProgress | TaskStatus::UnderReview)
    }

    /// Whether the status counts as a finished, positive outcome.
    pub fn is_done(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Approved)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = CredoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| CredoError::InvalidStatus(s.to_string()))
    }
}

/// Subscription package level controlling feature access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TierCode {
    #[serde(rename = "PKG_0")]
    Pkg0,
    #[serde(rename = "PKG_1")]
    Pkg1,
    #[serde(rename = "PKG_2")]
    Pkg2,
    #[serde(rename = "PKG_3")]
    Pkg3,
    #[serde(rename = "PKG_4")]
    Pkg4,
    #[serde(rename = "PKG_5")]
    Pkg5,
    #[serde(rename = "PKG_6")]
    Pkg6,
    #[serde(rename = "PKG_FULL")]
    PkgFull,
}

impl TierCode {
    pub const ALL: [TierCode; 8] = [
        TierCode::Pkg0,
        TierCode::Pkg1,
        TierCode::Pkg2,
        TierCode::Pkg3,
        TierCode::Pkg4,
        TierCode::Pkg5,
        TierCode::Pkg6,
        TierCode::PkgFull,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TierCode::Pkg0 => "PKG_0",
            TierCode::Pkg1 => "PKG_1",
            TierCode::Pkg2 => "PKG_2",
            TierCode::Pkg3 => "PKG_3",
            TierCode::Pkg4 => "PKG_4",
            TierCode::Pkg5 => "PKG_5",
            TierCode::Pkg6 => "PKG_6",
            TierCode::PkgFull => "PKG_FULL",
        }
    }

    /// Code without the `PKG_` prefix, as shown on tier cards.
    pub fn short(self) -> &'static str {
        &self.as_str()[4..]
    }
}

impl fmt::Display for TierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TierCode {
    type Err = CredoError;

    /// Accepts `PKG_2`, `pkg_2`, or the bare suffix `2` / `full`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        let code = if upper.starts_with("PKG_") {
            upper
        } else {
            format!("PKG_{upper}")
        };
        TierCode::ALL
            .into_iter()
            .find(|tier| tier.as_str() == code)
            .ok_or_else(|| CredoError::InvalidTier(s.to_string()))
    }
}

/// Which review board a task list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Review,
    Validation,
    Verification,
}

impl TaskKind {
    /// Collection name used in banners and log lines.
    pub fn label(self) -> &'static str {
        match self {
            TaskKind::Review => "reviews",
            TaskKind::Validation => "validation tasks",
            TaskKind::Verification => "verification tasks",
        }
    }
}
