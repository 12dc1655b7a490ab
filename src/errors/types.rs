use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrgDocsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error in organization '{organization}' during {operation}: {detail}")]
    Provider {
        organization: String,
        operation: String,
        detail: String,
    },

    #[error("Document store error during {operation}: {detail}")]
    DocumentStore {
        operation: String,
        detail: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl OrgDocsError {
    pub fn provider(organization: &str, operation: &str, detail: impl std::fmt::Display) -> Self {
        OrgDocsError::Provider {
            organization: organization.to_string(),
            operation: operation.to_string(),
            detail: detail.to_string(),
        }
    }

    pub fn document_store(operation: &str, detail: impl std::fmt::Display) -> Self {
        OrgDocsError::DocumentStore {
            operation: operation.to_string(),
            detail: detail.to_string(),
        }
    }

    /// Organization label the failure is attributed to, if any.
    pub fn organization(&self) -> Option<&str> {
        match self {
            OrgDocsError::Provider { organization, .. } => Some(organization),
            _ => None,
        }
    }
}
