use std::sync::Arc;
use crate::aws::{OrganizationClient, OrganizationConnector};
use crate::errors::OrgDocsError;
use crate::models::CredentialSet;
use crate::outline::DocumentStore;
use crate::reporting::render_report;
use super::state::*;
use tracing::{debug, error, info, warn};

/// Replaces every child of the parent document with one freshly rendered
/// report per organization.
///
/// Phases run strictly in order: resolve the parent, delete all of its
/// children, then publish organizations one at a time. The first failure
/// aborts the run; documents created before it are left in place.
pub struct SyncOrchestrator {
    credentials: Vec<CredentialSet>,
    store: Arc<dyn DocumentStore>,
    connector: Arc<dyn OrganizationConnector>,
    state: RunState,
}

impl SyncOrchestrator {
    pub fn new(
        credentials: Vec<CredentialSet>,
        store: Arc<dyn DocumentStore>,
        connector: Arc<dyn OrganizationConnector>,
    ) -> Self {
        Self {
            credentials,
            store,
            connector,
            state: RunState::new(),
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    fn enter(&mut self, phase: SyncPhase) {
        info!(phase = %phase, "Entering phase");
        self.state.current_phase = Some(phase);
    }

    pub async fn run(&mut self) -> Result<SyncSummary, OrgDocsError> {
        self.state = RunState::new();
        self.state.status = RunStatus::Running;
        info!(
            store = self.store.store_name(),
            organizations = self.credentials.len(),
            "Starting document sync"
        );

        match self.execute().await {
            Ok(summary) => {
                self.state.status = RunStatus::Completed;
                self.state.current_phase = None;
                info!(
                    deleted = summary.deleted,
                    published = summary.published.len(),
                    duration_ms = summary.duration_ms,
                    "Document sync completed"
                );
                Ok(summary)
            }
            Err(e) => {
                self.state.status = RunStatus::Aborted;
                self.state.error = Some(e.to_string());
                error!(
                    phase = ?self.state.current_phase,
                    organization = ?self.state.failed_organization,
                    error = %e,
                    "Document sync aborted"
                );
                Err(e)
            }
        }
    }

    async fn execute(&mut self) -> Result<SyncSummary, OrgDocsError> {
        self.enter(SyncPhase::Resolve);
        let parent_id = self.store.resolve_document_id().await?;
        self.state.parent_id = Some(parent_id.clone());

        self.enter(SyncPhase::Purge);
        let deleted = self.purge(&parent_id).await?;

        self.enter(SyncPhase::Publish);
        if self.credentials.is_empty() {
            warn!("No organizations configured; nothing to publish");
        }
        let credentials = self.credentials.clone();
        for creds in &credentials {
            if let Err(e) = self.publish(&parent_id, creds).await {
                self.state.failed_organization = Some(creds.label.clone());
                return Err(e);
            }
            self.state.published.push(creds.label.clone());
        }

        let elapsed = chrono::Utc::now() - self.state.start_time;
        Ok(SyncSummary {
            parent_id,
            deleted,
            published: self.state.published.clone(),
            duration_ms: elapsed.num_milliseconds().max(0) as u64,
        })
    }

    /// Delete every existing child of the parent. All-or-nothing from the
    /// caller's point of view: the first failed delete aborts.
    async fn purge(&mut self, parent_id: &str) -> Result<usize, OrgDocsError> {
        let children = self.store.list_child_document_ids(parent_id).await?;
        info!(parent = %parent_id, count = children.len(), "Purging existing child documents");
        for id in &children {
            self.store.delete_document(id).await.map_err(|e| {
                error!(id = %id, error = %e, "Failed to delete child document");
                e
            })?;
            self.state.deleted += 1;
        }
        Ok(children.len())
    }

    async fn publish(&self, parent_id: &str, creds: &CredentialSet) -> Result<(), OrgDocsError> {
        let report = build_report(self.connector.as_ref(), creds).await?;
        self.store.create_document(parent_id, &creds.label, &report).await?;
        info!(organization = %creds.label, parent = %parent_id, "Published organization report");
        Ok(())
    }
}

/// Gather one organization's inventory and render its report.
pub async fn build_report(
    connector: &dyn OrganizationConnector,
    creds: &CredentialSet,
) -> Result<String, OrgDocsError> {
    let api = connector.connect(creds).await?;
    let client = OrganizationClient::new(&creds.label, api);
    let inventory = client.collect_inventory().await?;
    let report = render_report(&inventory);
    debug!(organization = %creds.label, bytes = report.len(), "Rendered report");
    info!(organization = %creds.label, "Generated report for AWS organization");
    Ok(report)
}
