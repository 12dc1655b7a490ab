use std::path::Path;
use crate::config::{self, credentials::mask_access_key};
use crate::errors::OrgDocsError;

pub async fn handle_validate(config_path: Option<&Path>) -> Result<(), OrgDocsError> {
    let config = config::load_config(config_path).await?;
    println!("Configuration is valid");
    println!("Outline: {} (parent document {})", config.outline.api_url, config.outline.document_id);
    println!("AWS region: {}", config.aws_region);
    println!("Organizations ({}):", config.credentials.len());
    for creds in &config.credentials {
        println!("  - {} [{}]", creds.label, mask_access_key(&creds.access_key));
    }
    Ok(())
}
