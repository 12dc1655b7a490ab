use super::types::OrgDocsError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl OrgDocsError {
    /// Classify this error to determine its type and the process exit code.
    ///
    /// None of these are retried: every error aborts the run.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            OrgDocsError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: 2,
            },
            OrgDocsError::Provider { .. } => ErrorClassification {
                error_type: "ProviderError",
                exit_code: 3,
            },
            OrgDocsError::DocumentStore { .. } => ErrorClassification {
                error_type: "DocumentStoreError",
                exit_code: 4,
            },
            OrgDocsError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: 1,
            },
            OrgDocsError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: 1,
            },
            OrgDocsError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                exit_code: 1,
            },
        }
    }
}
