use std::path::Path;
use std::sync::Arc;
use crate::aws::AwsConnector;
use crate::cli::commands::SyncArgs;
use crate::config;
use crate::errors::OrgDocsError;
use crate::outline::OutlineClient;
use crate::pipeline::{SyncOrchestrator, SyncSummary};
use tracing::info;

pub async fn handle_sync(args: SyncArgs, config_path: Option<&Path>) -> Result<(), OrgDocsError> {
    let config = config::load_config(config_path).await?;
    info!(
        version = %config.build.version,
        commit_sha = %config.build.commit_sha,
        build_timestamp = %config.build.build_timestamp,
        "Starting script execution"
    );

    let store = Arc::new(OutlineClient::new(&config.outline));
    let connector = Arc::new(AwsConnector::new(&config.aws_region));
    let mut orchestrator = SyncOrchestrator::new(config.credentials.clone(), store, connector);
    let summary = orchestrator.run().await?;

    info!(
        parent = %summary.parent_id,
        deleted = summary.deleted,
        published = ?summary.published,
        "Script execution completed successfully"
    );

    if args.json {
        println!("{}", summary_json(&summary)?);
    }
    Ok(())
}

pub fn summary_json(summary: &SyncSummary) -> Result<String, OrgDocsError> {
    Ok(serde_json::to_string_pretty(summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_json_fields() {
        let summary = SyncSummary {
            parent_id: "parent-uuid".into(),
            deleted: 3,
            published: vec!["prod".into(), "dev".into()],
            duration_ms: 1200,
        };
        let value: serde_json::Value = serde_json::from_str(&summary_json(&summary).unwrap()).unwrap();
        assert_eq!(value["parent_id"], "parent-uuid");
        assert_eq!(value["deleted"], 3);
        assert_eq!(value["published"], serde_json::json!(["prod", "dev"]));
        assert_eq!(value["duration_ms"], 1200);
    }
}
