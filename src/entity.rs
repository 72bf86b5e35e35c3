//! Wire records returned by the dashboard API and the capability surface the
//! list engine works against.
//!
//! Registry reviews and VVB validation/verification tasks share a common
//! assignment shape (`Task<D>`), with page-specific fields carried in `D`.
//! The engine never looks past [`ListItem`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{TaskKind, TaskStatus, TierCode};

/// Common capability surface of any row shown in a remote list.
pub trait ListItem: fmt::Debug + Clone + Send + Sync + 'static {
    /// The closed enumeration the status filter compares against.
    type Status: fmt::Debug + fmt::Display + Copy + PartialEq + Send + Sync + 'static;

    /// Identifier, unique within one fetched page.
    fn id(&self) -> i64;

    fn status(&self) -> Self::Status;

    /// Text fields that free-text search matches against.
    fn search_fields(&self) -> Vec<&str>;
}

/// A user's subscription row on the super-admin subscriptions page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub user_id: i64,
    pub user_email: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub role: String,
    pub tier: TierCode,
    pub tier_name: String,
    #[serde(default)]
    pub valid_until: Option<String>,
    pub created_at: String,
}

impl ListItem for Subscription {
    type Status = TierCode;

    fn id(&self) -> i64 {
        self.user_id
    }

    fn status(&self) -> TierCode {
        self.tier
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.user_email.as_str(),
            self.user_name.as_deref().unwrap_or(""),
        ]
    }
}

/// One entry of the tier catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierDefinition {
    pub tier: TierCode,
    pub tier_name: String,
    #[serde(default)]
    pub tier_description: String,
    #[serde(default)]
    pub features: Vec<serde_json::Value>,
    #[serde(default)]
    pub feature_count: u32,
}

/// Page-specific fields of a [`Task`].
pub trait TaskDetails: fmt::Debug + Clone + Send + Sync + 'static {
    const KIND: TaskKind;
}

/// A project assigned to a reviewer, validator or verifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task<D> {
    pub id: i64,
    pub project_id: i64,
    pub status: TaskStatus,
    pub assigned_at: String,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub developer_name: Option<String>,
    #[serde(flatten)]
    pub details: D,
}

impl<D: TaskDetails> Task<D> {
    pub fn kind(&self) -> TaskKind {
        D::KIND
    }

    pub fn status_label(&self) -> &'static str {
        self.status.label(D::KIND)
    }
}

impl<D: TaskDetails> ListItem for Task<D> {
    type Status = TaskStatus;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> TaskStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.project_name.as_deref().unwrap_or(""),
            self.developer_name.as_deref().unwrap_or(""),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDetails {
    pub registry_user_id: i64,
    #[serde(default)]
    pub review_notes: Option<String>,
    #[serde(default)]
    pub decision: Option<String>,
}

impl TaskDetails for ReviewDetails {
    const KIND: TaskKind = TaskKind::Review;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationDetails {
    pub vvb_user_id: i64,
    #[serde(default)]
    pub validation_report_url: Option<String>,
    #[serde(default)]
    pub findings: Option<String>,
}

impl TaskDetails for ValidationDetails {
    const KIND: TaskKind = TaskKind::Validation;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationDetails {
    pub vvb_user_id: i64,
    #[serde(default)]
    pub monitoring_period_start: Option<String>,
    #[serde(default)]
    pub monitoring_period_end: Option<String>,
    #[serde(default)]
    pub verification_report_url: Option<String>,
    #[serde(default)]
    pub findings: Option<String>,
    /// Null until the verification completes.
    #[serde(default)]
    pub credits_verified: Option<f64>,
}

impl TaskDetails for VerificationDetails {
    const KIND: TaskKind = TaskKind::Verification;
}

pub type Review = Task<ReviewDetails>;
pub type ValidationTask = Task<ValidationDetails>;
pub type VerificationTask = Task<VerificationDetails>;
