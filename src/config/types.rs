use serde::Deserialize;
use crate::models::CredentialSet;

pub const DEFAULT_OUTLINE_API_URL: &str = "https://app.getoutline.com";
pub const DEFAULT_AWS_REGION: &str = "us-east-1";
pub const UNKNOWN: &str = "unknown";

/// Fully resolved settings for one run. Built once at startup and handed to
/// the commands; nothing below `main` reads the environment for settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: Vec<CredentialSet>,
    pub outline: OutlineConfig,
    pub aws_region: String,
    pub build: BuildInfo,
}

#[derive(Clone)]
pub struct OutlineConfig {
    pub api_url: String,
    pub api_token: String,
    /// Parent document id or url slug.
    pub document_id: String,
}

impl std::fmt::Debug for OutlineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &"[REDACTED]")
            .field("document_id", &self.document_id)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub commit_sha: String,
    pub build_timestamp: String,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: UNKNOWN.to_string(),
            commit_sha: UNKNOWN.to_string(),
            build_timestamp: UNKNOWN.to_string(),
        }
    }
}

/// Optional YAML settings file. Environment variables win over every field.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FileConfig {
    pub outline: Option<OutlineFileConfig>,
    pub aws: Option<AwsFileConfig>,
}

#[derive(Clone, Deserialize, Default)]
pub struct OutlineFileConfig {
    pub api_url: Option<String>,
    pub api_token: Option<String>,
    pub document_id: Option<String>,
}

#[derive(Clone, Deserialize, Default)]
pub struct AwsFileConfig {
    pub region: Option<String>,
    /// Same shape as AWS_CREDENTIALS_JSON.
    pub credentials_json: Option<String>,
    /// Inline alternative to `credentials_json`.
    pub accounts: Option<Vec<FileCredential>>,
}

#[derive(Clone, Deserialize)]
pub struct FileCredential {
    pub name: String,
    pub access_key: String,
    pub secret_key: String,
}

impl std::fmt::Debug for OutlineFileConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFileConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("document_id", &self.document_id)
            .finish()
    }
}

impl std::fmt::Debug for AwsFileConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsFileConfig")
            .field("region", &self.region)
            .field("credentials_json", &self.credentials_json.as_ref().map(|_| "[REDACTED]"))
            .field("accounts", &self.accounts)
            .finish()
    }
}

impl std::fmt::Debug for FileCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileCredential")
            .field("name", &self.name)
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_config_debug_hides_secrets() {
        let file = FileConfig {
            outline: Some(OutlineFileConfig {
                api_url: Some("https://docs.example.com".into()),
                api_token: Some("ol_api_file_token".into()),
                document_id: Some("doc-1".into()),
            }),
            aws: Some(AwsFileConfig {
                region: Some("us-east-1".into()),
                credentials_json: Some(r#"{"accounts":[{"secret_key":"blobsecret"}]}"#.into()),
                accounts: Some(vec![FileCredential {
                    name: "sandbox".into(),
                    access_key: "AKIASANDBOX".into(),
                    secret_key: "inlinesecret".into(),
                }]),
            }),
        };
        let out = format!("{:?}", file);
        assert!(out.contains("sandbox"));
        assert!(out.contains("doc-1"));
        assert!(!out.contains("ol_api_file_token"));
        assert!(!out.contains("blobsecret"));
        assert!(!out.contains("inlinesecret"));
    }

    #[test]
    fn test_outline_file_config_debug_shows_missing_token() {
        let out = format!("{:?}", OutlineFileConfig::default());
        assert!(out.contains("api_token: None"));
    }
}
