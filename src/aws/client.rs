use crate::errors::OrgDocsError;
use crate::models::{
    tag_value_or_default, AccessKeyRef, Account, IamUser, OrganizationInventory,
};
use std::future::Future;
use super::api::{AccountRecord, OrganizationApi, Page};
use tracing::{debug, error, info};

const ACCOUNT_DESCRIPTION_TAG: &str = "Description";
const USER_DESCRIPTION_TAG: &str = "description";

/// Inventory reader bound to one organization's credentials for its lifetime.
pub struct OrganizationClient {
    label: String,
    api: Box<dyn OrganizationApi>,
}

impl OrganizationClient {
    pub fn new(label: &str, api: Box<dyn OrganizationApi>) -> Self {
        Self { label: label.to_string(), api }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Follow `next_token` until the provider reports no further pages,
    /// concatenating items in page order. A failed page aborts the listing.
    async fn collect_pages<T, F, Fut>(&self, operation: &str, mut fetch: F) -> Result<Vec<T>, OrgDocsError>
    where
        F: FnMut(Option<String>) -> Fut,
        Fut: Future<Output = Result<Page<T>, OrgDocsError>>,
    {
        let mut items = Vec::new();
        let mut next_token = None;
        loop {
            let page = fetch(next_token).await.map_err(|e| {
                error!(organization = %self.label, operation, error = %e, "Failed to retrieve page");
                e
            })?;
            items.extend(page.items);
            match page.next_token {
                Some(token) => next_token = Some(token),
                None => break,
            }
        }
        Ok(items)
    }

    /// All member accounts, across every page, in provider order.
    pub async fn list_accounts(&self) -> Result<Vec<AccountRecord>, OrgDocsError> {
        let accounts = self
            .collect_pages("list_accounts", |token| self.api.list_accounts_page(token))
            .await?;
        info!(organization = %self.label, count = accounts.len(), "Retrieved accounts");
        Ok(accounts)
    }

    /// Value of the account's `Description` tag, or "No Description".
    pub async fn get_account_description(&self, account_id: &str) -> Result<String, OrgDocsError> {
        let tags = self.api.list_account_tags(account_id).await.map_err(|e| {
            error!(organization = %self.label, operation = "get_account_description", account_id, error = %e, "Failed to retrieve tags for account");
            e
        })?;
        Ok(tag_value_or_default(&tags, ACCOUNT_DESCRIPTION_TAG))
    }

    /// All IAM user names visible to these credentials, across every page.
    pub async fn list_iam_users(&self) -> Result<Vec<String>, OrgDocsError> {
        let users = self
            .collect_pages("list_iam_users", |token| self.api.list_users_page(token))
            .await?;
        info!(organization = %self.label, count = users.len(), "Retrieved IAM users");
        Ok(users)
    }

    pub async fn get_user_access_keys(&self, user_name: &str) -> Result<Vec<String>, OrgDocsError> {
        self.api.list_access_keys(user_name).await.map_err(|e| {
            error!(organization = %self.label, operation = "get_user_access_keys", user_name, error = %e, "Failed to retrieve access keys for user");
            e
        })
    }

    /// Value of the user's lower-case `description` tag, or "No Description".
    pub async fn get_user_key_description(&self, user_name: &str) -> Result<String, OrgDocsError> {
        let tags = self.api.list_user_tags(user_name).await.map_err(|e| {
            error!(organization = %self.label, operation = "get_user_key_description", user_name, error = %e, "Failed to retrieve tags for user");
            e
        })?;
        Ok(tag_value_or_default(&tags, USER_DESCRIPTION_TAG))
    }

    /// Gather accounts, account descriptions, users and keys for the report.
    ///
    /// Accounts are described in ascending join order. The user tag set is
    /// fetched again for every key of the user.
    pub async fn collect_inventory(&self) -> Result<OrganizationInventory, OrgDocsError> {
        let mut records = self.list_accounts().await?;
        records.sort_by_key(|a| a.joined_at);

        let mut accounts = Vec::with_capacity(records.len());
        for record in records {
            let description = self.get_account_description(&record.id).await?;
            accounts.push(Account {
                id: record.id,
                name: record.name,
                email: record.email,
                joined_at: record.joined_at,
                description,
            });
        }

        let mut users = Vec::new();
        for user_name in self.list_iam_users().await? {
            let key_ids = self.get_user_access_keys(&user_name).await?;
            let mut access_keys = Vec::with_capacity(key_ids.len());
            for key_id in key_ids {
                // TODO: fetch user tags once per user instead of once per key.
                let description = self.get_user_key_description(&user_name).await?;
                access_keys.push(AccessKeyRef { key_id, description });
            }
            debug!(organization = %self.label, user = %user_name, keys = access_keys.len(), "Collected access keys");
            users.push(IamUser { user_name, access_keys });
        }

        Ok(OrganizationInventory {
            label: self.label.clone(),
            accounts,
            users,
        })
    }
}
