use async_trait::async_trait;
use crate::errors::OrgDocsError;

/// The slice of a document-management service the sync needs.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Canonical id of the configured parent document.
    async fn resolve_document_id(&self) -> Result<String, OrgDocsError>;

    /// Ids of the direct children of `parent_id`, in service order.
    async fn list_child_document_ids(&self, parent_id: &str) -> Result<Vec<String>, OrgDocsError>;

    async fn delete_document(&self, id: &str) -> Result<(), OrgDocsError>;

    /// Create and publish a child of `parent_id`; returns the new document id.
    async fn create_document(&self, parent_id: &str, title: &str, text: &str) -> Result<String, OrgDocsError>;

    /// Service name for logging
    fn store_name(&self) -> &str;
}
