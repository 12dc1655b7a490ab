use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::errors::OrgDocsError;
use crate::models::{CredentialSet, Tag};

/// One page of a paginated listing. `next_token` is `None` on the last page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next_token: None }
    }
}

/// A member account as the provider reports it, before tag lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub joined_at: DateTime<Utc>,
}

/// Raw provider calls available for one organization's credentials.
///
/// Implementations return [`OrgDocsError::Provider`] on any failure and never
/// retry.
#[async_trait]
pub trait OrganizationApi: Send + Sync {
    /// One page of organization member accounts.
    async fn list_accounts_page(&self, next_token: Option<String>) -> Result<Page<AccountRecord>, OrgDocsError>;

    async fn list_account_tags(&self, account_id: &str) -> Result<Vec<Tag>, OrgDocsError>;

    /// One page of IAM user names, scoped to the credentials' own account.
    async fn list_users_page(&self, next_token: Option<String>) -> Result<Page<String>, OrgDocsError>;

    /// Access key ids of one user, in provider order.
    async fn list_access_keys(&self, user_name: &str) -> Result<Vec<String>, OrgDocsError>;

    async fn list_user_tags(&self, user_name: &str) -> Result<Vec<Tag>, OrgDocsError>;
}

/// Builds an [`OrganizationApi`] bound to one credential set.
#[async_trait]
pub trait OrganizationConnector: Send + Sync {
    async fn connect(&self, credentials: &CredentialSet) -> Result<Box<dyn OrganizationApi>, OrgDocsError>;
}
