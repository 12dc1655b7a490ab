use serde::Serialize;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct RunState {
    pub status: RunStatus,
    pub current_phase: Option<SyncPhase>,
    pub parent_id: Option<String>,
    pub deleted: usize,
    pub published: Vec<String>,
    /// Organization being published when the run aborted.
    pub failed_organization: Option<String>,
    pub error: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            status: RunStatus::Pending,
            current_phase: None,
            parent_id: None,
            deleted: 0,
            published: Vec::new(),
            failed_organization: None,
            error: None,
            start_time: Utc::now(),
        }
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Pending,
    Running,
    Completed,
    Aborted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncPhase {
    Resolve,
    Purge,
    Publish,
}

impl std::fmt::Display for SyncPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolve => write!(f, "resolve"),
            Self::Purge => write!(f, "purge"),
            Self::Publish => write!(f, "publish"),
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncSummary {
    pub parent_id: String,
    pub deleted: usize,
    /// Labels of the organizations published, in order.
    pub published: Vec<String>,
    pub duration_ms: u64,
}
