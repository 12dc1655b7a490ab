use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use crate::config::OutlineConfig;
use crate::errors::OrgDocsError;
use super::store::DocumentStore;
use tracing::{debug, info};

const PAGE_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct DocumentData {
    id: String,
}

/// Outline (getoutline.com) API client. Every endpoint is a JSON `POST`
/// authenticated with a bearer token.
pub struct OutlineClient {
    client: Client,
    api_url: String,
    api_token: String,
    document_id: String,
}

impl OutlineClient {
    pub fn new(config: &OutlineConfig) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
            document_id: config.document_id.clone(),
        }
    }

    async fn call(&self, method: &str, body: Value) -> Result<Value, OrgDocsError> {
        let resp = self.client
            .post(format!("{}/api/{}", self.api_url, method))
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(&body)
            .send()
            .await
            .map_err(|e| OrgDocsError::document_store(method, format!("request failed: {}", e)))?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(OrgDocsError::document_store(
                method,
                format!("authentication failed ({}); check GETOUTLINE_API_TOKEN", status.as_u16()),
            ));
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let snippet: String = text.chars().take(500).collect();
            return Err(OrgDocsError::document_store(
                method,
                format!("unexpected status {}: {}", status.as_u16(), snippet),
            ));
        }

        let data: Value = resp.json().await
            .map_err(|e| OrgDocsError::document_store(method, format!("invalid response body: {}", e)))?;

        if data.get("ok").and_then(Value::as_bool) == Some(false) {
            let message = data["error"].as_str().or(data["message"].as_str()).unwrap_or("Unknown");
            return Err(OrgDocsError::document_store(method, message));
        }

        Ok(data)
    }

    fn decode<T: serde::de::DeserializeOwned>(method: &str, data: Value) -> Result<T, OrgDocsError> {
        serde_json::from_value::<Envelope<T>>(data)
            .map(|e| e.data)
            .map_err(|e| OrgDocsError::document_store(method, format!("unexpected response shape: {}", e)))
    }
}

#[async_trait]
impl DocumentStore for OutlineClient {
    async fn resolve_document_id(&self) -> Result<String, OrgDocsError> {
        let data = self.call("documents.info", json!({ "id": self.document_id })).await?;
        let doc: DocumentData = Self::decode("documents.info", data)?;
        info!(document = %self.document_id, id = %doc.id, "Resolved parent document");
        Ok(doc.id)
    }

    async fn list_child_document_ids(&self, parent_id: &str) -> Result<Vec<String>, OrgDocsError> {
        let mut ids = Vec::new();
        let mut offset = 0;
        loop {
            let body = json!({
                "parentDocumentId": parent_id,
                "limit": PAGE_LIMIT,
                "offset": offset,
            });
            let data = self.call("documents.list", body).await?;
            let page: Vec<DocumentData> = Self::decode("documents.list", data)?;
            let count = page.len();
            ids.extend(page.into_iter().map(|d| d.id));
            if count < PAGE_LIMIT {
                break;
            }
            offset += count;
        }
        debug!(parent = %parent_id, count = ids.len(), "Listed child documents");
        Ok(ids)
    }

    async fn delete_document(&self, id: &str) -> Result<(), OrgDocsError> {
        self.call("documents.delete", json!({ "id": id })).await?;
        info!(id = %id, "Deleted document");
        Ok(())
    }

    async fn create_document(&self, parent_id: &str, title: &str, text: &str) -> Result<String, OrgDocsError> {
        let body = json!({
            "parentDocumentId": parent_id,
            "title": title,
            "text": text,
            "publish": true,
        });
        let data = self.call("documents.create", body).await?;
        let doc: DocumentData = Self::decode("documents.create", data)?;
        info!(id = %doc.id, title = %title, "Created document");
        Ok(doc.id)
    }

    fn store_name(&self) -> &str { "outline" }
}
