use std::collections::HashMap;
use std::path::Path;
use crate::aws::{AwsConnector, OrganizationConnector};
use crate::cli::commands::PreviewArgs;
use crate::config;
use crate::errors::OrgDocsError;
use crate::models::CredentialSet;
use crate::pipeline::build_report;
use tracing::info;

pub async fn handle_preview(args: PreviewArgs, config_path: Option<&Path>) -> Result<(), OrgDocsError> {
    let config = config::load_config(config_path).await?;
    let selected = select_organizations(&config.credentials, args.org.as_deref())?;
    let connector = AwsConnector::new(&config.aws_region);
    render_all(&connector, &selected, args.output.as_deref()).await
}

/// Restrict the configured organizations to the one named `org`, if given.
pub fn select_organizations(
    credentials: &[CredentialSet],
    org: Option<&str>,
) -> Result<Vec<CredentialSet>, OrgDocsError> {
    match org {
        None => Ok(credentials.to_vec()),
        Some(label) => {
            let found: Vec<CredentialSet> = credentials
                .iter()
                .filter(|c| c.label == label)
                .cloned()
                .collect();
            if found.is_empty() {
                return Err(OrgDocsError::Config(format!("No organization labelled '{}' is configured", label)));
            }
            Ok(found)
        }
    }
}

pub async fn render_all(
    connector: &dyn OrganizationConnector,
    credentials: &[CredentialSet],
    output: Option<&Path>,
) -> Result<(), OrgDocsError> {
    if let Some(dir) = output {
        check_distinct_filenames(credentials)?;
        tokio::fs::create_dir_all(dir).await?;
    }
    for creds in credentials {
        let report = build_report(connector, creds).await?;
        match output {
            Some(dir) => {
                let path = dir.join(report_filename(&creds.label));
                tokio::fs::write(&path, &report).await?;
                info!(organization = %creds.label, path = %path.display(), "Wrote report preview");
            }
            None => println!("{}", report),
        }
    }
    Ok(())
}

/// Fail when two labels map to the same report file, before anything is written.
pub fn check_distinct_filenames(credentials: &[CredentialSet]) -> Result<(), OrgDocsError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for creds in credentials {
        let filename = report_filename(&creds.label);
        if let Some(previous) = seen.insert(filename.clone(), &creds.label) {
            return Err(OrgDocsError::Config(format!(
                "Organizations '{}' and '{}' would both be written to {}",
                previous, creds.label, filename
            )));
        }
    }
    Ok(())
}

/// File name for a label, with path separators and other unsafe characters replaced.
pub fn report_filename(label: &str) -> String {
    let safe: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{}.md", safe)
}
