// Data model for the task tracker

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single tracked unit of work.
///
/// Serialized as a JSON object with keys `id`, `description`, `status`,
/// `createdAt`, `updatedAt`, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Positive integer id, unique within the store, never reused.
    pub id: u64,
    /// Non-empty description text.
    pub description: String,
    /// Current status; every new task starts as [`Status::Todo`].
    pub status: Status,
    /// Creation timestamp, immutable after creation.
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Refreshed on every successful mutation; equals `created_at` at
    /// creation.
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// Task status as a closed enumeration.
///
/// Modeled as an enum rather than an open string so that invalid states can
/// never be persisted; raw CLI input is validated at the store boundary via
/// [`FromStr`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// The wire name of this status, as stored in the backing file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Status::Todo),
            "in-progress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            other => Err(Error::InvalidStatusFilter(other.to_string())),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current wall-clock time as an ISO-8601 UTC string at second granularity,
/// e.g. `2026-08-30T14:03:07Z`.
///
/// Two mutations within the same second produce identical timestamps; callers
/// that compare `updated_at` values must account for that granularity.
pub fn now_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
