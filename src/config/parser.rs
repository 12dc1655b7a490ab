use std::path::Path;
use crate::errors::OrgDocsError;
use crate::models::CredentialSet;
use super::credentials::load_credential_sets;
use super::types::*;
use tracing::{debug, info};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

/// Load the run configuration from the process environment, layered over an
/// optional YAML file.
pub async fn load_config(path: Option<&Path>) -> Result<AppConfig, OrgDocsError> {
    let file_config = match path {
        Some(p) => Some(parse_config_file(p).await?),
        None => None,
    };
    build_config(file_config.as_ref(), |name| std::env::var(name).ok())
}

pub async fn parse_config_file(path: &Path) -> Result<FileConfig, OrgDocsError> {
    if !path.exists() {
        return Err(OrgDocsError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(OrgDocsError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: FileConfig = serde_yaml::from_str(&content)?;
    debug!(path = %path.display(), "Parsed config file");
    Ok(config)
}

/// Resolve every setting, environment first, then the file, then defaults.
/// Fails on the first missing required value.
pub fn build_config<F>(file: Option<&FileConfig>, env: F) -> Result<AppConfig, OrgDocsError>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |name: &str| env(name).filter(|v| !v.trim().is_empty());
    let outline_file = file.and_then(|f| f.outline.as_ref());
    let aws_file = file.and_then(|f| f.aws.as_ref());

    let document_id = lookup("GETOUTLINE_DOCUMENT_ID")
        .or_else(|| outline_file.and_then(|o| o.document_id.clone()))
        .ok_or_else(|| missing("GETOUTLINE_DOCUMENT_ID"))?;

    let api_token = lookup("GETOUTLINE_API_TOKEN")
        .or_else(|| outline_file.and_then(|o| o.api_token.clone()))
        .ok_or_else(|| missing("GETOUTLINE_API_TOKEN"))?;

    let api_url = lookup("GETOUTLINE_API_URL")
        .or_else(|| outline_file.and_then(|o| o.api_url.clone()))
        .unwrap_or_else(|| DEFAULT_OUTLINE_API_URL.to_string());

    let credentials = match lookup("AWS_CREDENTIALS_JSON") {
        Some(blob) => load_credential_sets(Some(&blob))?,
        None => credentials_from_file(aws_file)?,
    };

    let aws_region = lookup("AWS_REGION")
        .or_else(|| aws_file.and_then(|a| a.region.clone()))
        .unwrap_or_else(|| DEFAULT_AWS_REGION.to_string());

    let build = BuildInfo {
        version: lookup("VERSION").unwrap_or_else(|| UNKNOWN.to_string()),
        commit_sha: lookup("COMMIT_SHA").unwrap_or_else(|| UNKNOWN.to_string()),
        build_timestamp: lookup("BUILD_TIMESTAMP").unwrap_or_else(|| UNKNOWN.to_string()),
    };

    info!(organizations = credentials.len(), "All required configuration retrieved");

    Ok(AppConfig {
        credentials,
        outline: OutlineConfig {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_token,
            document_id,
        },
        aws_region,
        build,
    })
}

fn credentials_from_file(aws_file: Option<&AwsFileConfig>) -> Result<Vec<CredentialSet>, OrgDocsError> {
    let Some(aws) = aws_file else {
        return load_credential_sets(None);
    };
    if let Some(blob) = &aws.credentials_json {
        return load_credential_sets(Some(blob));
    }
    match &aws.accounts {
        Some(accounts) => Ok(accounts
            .iter()
            .map(|a| CredentialSet {
                label: a.name.clone(),
                access_key: super::credentials::resolve_credential(&a.access_key),
                secret_key: super::credentials::resolve_credential(&a.secret_key),
            })
            .collect()),
        None => load_credential_sets(None),
    }
}

fn missing(name: &str) -> OrgDocsError {
    OrgDocsError::Config(format!("Environment variable '{}' is required but not set", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const CREDS: &str = r#"{"accounts": [{"name": "prod", "access_key": "AKIA1", "secret_key": "s1"}]}"#;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn required_env() -> Vec<(&'static str, &'static str)> {
        vec![
            ("GETOUTLINE_DOCUMENT_ID", "doc-123"),
            ("GETOUTLINE_API_TOKEN", "ol_api_token"),
            ("AWS_CREDENTIALS_JSON", CREDS),
        ]
    }

    #[test]
    fn test_build_config_defaults() {
        let config = build_config(None, env_of(&required_env())).unwrap();
        assert_eq!(config.outline.document_id, "doc-123");
        assert_eq!(config.outline.api_url, DEFAULT_OUTLINE_API_URL);
        assert_eq!(config.aws_region, DEFAULT_AWS_REGION);
        assert_eq!(config.build, BuildInfo::default());
        assert_eq!(config.build.version, "unknown");
        assert_eq!(config.credentials.len(), 1);
    }

    #[test]
    fn test_build_config_missing_token() {
        let env = env_of(&[
            ("GETOUTLINE_DOCUMENT_ID", "doc-123"),
            ("AWS_CREDENTIALS_JSON", CREDS),
        ]);
        let err = build_config(None, env).unwrap_err();
        assert!(err.to_string().contains("GETOUTLINE_API_TOKEN"));
    }

    #[test]
    fn test_build_config_missing_credentials() {
        let env = env_of(&[
            ("GETOUTLINE_DOCUMENT_ID", "doc-123"),
            ("GETOUTLINE_API_TOKEN", "t"),
        ]);
        let err = build_config(None, env).unwrap_err();
        assert!(matches!(err, OrgDocsError::Config(_)));
    }

    #[test]
    fn test_build_config_blank_value_counts_as_missing() {
        let env = env_of(&[
            ("GETOUTLINE_DOCUMENT_ID", " "),
            ("GETOUTLINE_API_TOKEN", "t"),
            ("AWS_CREDENTIALS_JSON", CREDS),
        ]);
        assert!(build_config(None, env).is_err());
    }

    #[test]
    fn test_build_config_reads_build_metadata() {
        let mut pairs = required_env();
        pairs.push(("VERSION", "v1.2.3"));
        pairs.push(("COMMIT_SHA", "abc123"));
        let config = build_config(None, env_of(&pairs)).unwrap();
        assert_eq!(config.build.version, "v1.2.3");
        assert_eq!(config.build.commit_sha, "abc123");
        assert_eq!(config.build.build_timestamp, "unknown");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = FileConfig {
            outline: Some(OutlineFileConfig {
                api_url: Some("https://docs.example.com/".into()),
                api_token: Some("file-token".into()),
                document_id: Some("file-doc".into()),
            }),
            aws: None,
        };
        let config = build_config(Some(&file), env_of(&required_env())).unwrap();
        assert_eq!(config.outline.document_id, "doc-123");
        assert_eq!(config.outline.api_token, "ol_api_token");
        assert_eq!(config.outline.api_url, "https://docs.example.com");
    }

    #[test]
    fn test_file_inline_accounts() {
        let file = FileConfig {
            outline: Some(OutlineFileConfig {
                api_url: None,
                api_token: Some("file-token".into()),
                document_id: Some("file-doc".into()),
            }),
            aws: Some(AwsFileConfig {
                region: Some("eu-west-1".into()),
                credentials_json: None,
                accounts: Some(vec![FileCredential {
                    name: "sandbox".into(),
                    access_key: "AKIA9".into(),
                    secret_key: "s9".into(),
                }]),
            }),
        };
        let config = build_config(Some(&file), env_of(&[])).unwrap();
        assert_eq!(config.credentials[0].label, "sandbox");
        assert_eq!(config.aws_region, "eu-west-1");
    }

    #[test]
    fn test_debug_hides_api_token() {
        let config = build_config(None, env_of(&required_env())).unwrap();
        let out = format!("{:?}", config);
        assert!(!out.contains("ol_api_token"));
        assert!(!out.contains("\"s1\""));
    }

    #[tokio::test]
    async fn test_parse_config_file_yaml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("orgdocs.yaml");
        std::fs::write(
            &path,
            "outline:\n  document_id: yaml-doc\n  api_token: yaml-token\naws:\n  region: us-west-2\n",
        )
        .unwrap();
        let file = parse_config_file(&path).await.unwrap();
        assert_eq!(file.outline.unwrap().document_id.as_deref(), Some("yaml-doc"));
        assert_eq!(file.aws.unwrap().region.as_deref(), Some("us-west-2"));
    }

    #[tokio::test]
    async fn test_parse_config_file_missing() {
        let err = parse_config_file(Path::new("/nonexistent/orgdocs.yaml")).await.unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
