//! AWS SDK backed implementation of [`OrganizationApi`].
//!
//! Uses static credentials from each credential set; the shared environment
//! credential chain is never consulted.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_organizations::config::Credentials;
use chrono::{DateTime, Utc};
use crate::errors::OrgDocsError;
use crate::models::{CredentialSet, Tag};
use crate::config::credentials::mask_access_key;
use super::api::{AccountRecord, OrganizationApi, OrganizationConnector, Page};

pub struct AwsConnector {
    region: String,
}

impl AwsConnector {
    pub fn new(region: &str) -> Self {
        Self { region: region.to_string() }
    }
}

#[async_trait]
impl OrganizationConnector for AwsConnector {
    async fn connect(&self, credentials: &CredentialSet) -> Result<Box<dyn OrganizationApi>, OrgDocsError> {
        let creds = Credentials::new(
            &credentials.access_key,
            &credentials.secret_key,
            None,
            None,
            "orgdocs-static",
        );

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .credentials_provider(creds)
            .load()
            .await;

        tracing::info!(
            organization = %credentials.label,
            access_key = %mask_access_key(&credentials.access_key),
            region = %self.region,
            "AWS clients initialized"
        );

        Ok(Box::new(SdkOrganizationApi {
            label: credentials.label.clone(),
            organizations: aws_sdk_organizations::Client::new(&sdk_config),
            iam: aws_sdk_iam::Client::new(&sdk_config),
        }))
    }
}

pub struct SdkOrganizationApi {
    label: String,
    organizations: aws_sdk_organizations::Client,
    iam: aws_sdk_iam::Client,
}

impl SdkOrganizationApi {
    fn fail(&self, operation: &str, detail: impl std::fmt::Display) -> OrgDocsError {
        OrgDocsError::provider(&self.label, operation, detail)
    }
}

fn to_utc(ts: &aws_sdk_organizations::primitives::DateTime) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts.secs(), ts.subsec_nanos())
}

#[async_trait]
impl OrganizationApi for SdkOrganizationApi {
    async fn list_accounts_page(&self, next_token: Option<String>) -> Result<Page<AccountRecord>, OrgDocsError> {
        let out = self.organizations
            .list_accounts()
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| self.fail("ListAccounts", aws_sdk_organizations::error::DisplayErrorContext(&e)))?;

        let mut items = Vec::with_capacity(out.accounts().len());
        for account in out.accounts() {
            let id = account.id().unwrap_or_default().to_string();
            let joined_at = account
                .joined_timestamp()
                .and_then(to_utc)
                .ok_or_else(|| self.fail("ListAccounts", format!("account {} has no joined timestamp", id)))?;
            items.push(AccountRecord {
                id,
                name: account.name().unwrap_or_default().to_string(),
                email: account.email().unwrap_or_default().to_string(),
                joined_at,
            });
        }

        Ok(Page { items, next_token: out.next_token().map(str::to_string) })
    }

    async fn list_account_tags(&self, account_id: &str) -> Result<Vec<Tag>, OrgDocsError> {
        let out = self.organizations
            .list_tags_for_resource()
            .resource_id(account_id)
            .send()
            .await
            .map_err(|e| self.fail("ListTagsForResource", aws_sdk_organizations::error::DisplayErrorContext(&e)))?;

        Ok(out.tags().iter().map(|t| Tag::new(t.key(), t.value())).collect())
    }

    async fn list_users_page(&self, next_token: Option<String>) -> Result<Page<String>, OrgDocsError> {
        let out = self.iam
            .list_users()
            .set_marker(next_token)
            .send()
            .await
            .map_err(|e| self.fail("ListUsers", aws_sdk_iam::error::DisplayErrorContext(&e)))?;

        let items = out.users().iter().map(|u| u.user_name().to_string()).collect();
        let next_token = if out.is_truncated() {
            out.marker().map(str::to_string)
        } else {
            None
        };
        Ok(Page { items, next_token })
    }

    async fn list_access_keys(&self, user_name: &str) -> Result<Vec<String>, OrgDocsError> {
        let out = self.iam
            .list_access_keys()
            .user_name(user_name)
            .send()
            .await
            .map_err(|e| self.fail("ListAccessKeys", aws_sdk_iam::error::DisplayErrorContext(&e)))?;

        Ok(out
            .access_key_metadata()
            .iter()
            .filter_map(|k| k.access_key_id().map(str::to_string))
            .collect())
    }

    async fn list_user_tags(&self, user_name: &str) -> Result<Vec<Tag>, OrgDocsError> {
        let out = self.iam
            .list_user_tags()
            .user_name(user_name)
            .send()
            .await
            .map_err(|e| self.fail("ListUserTags", aws_sdk_iam::error::DisplayErrorContext(&e)))?;

        Ok(out.tags().iter().map(|t| Tag::new(t.key(), t.value())).collect())
    }
}
