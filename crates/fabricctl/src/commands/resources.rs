//! Resource discovery command.

use anyhow::{Context, Result};

use fabric_client::orchestrator::ResourceListOptions;
use fabric_client::services::ResourcesService;

use crate::cli::ResourcesArgs;

pub async fn run(service: &ResourcesService, args: ResourcesArgs) -> Result<()> {
    let options = ResourceListOptions {
        level: args.level,
        includes: args.includes,
        excludes: args.excludes,
    };
    let models = service
        .list(options)
        .await
        .context("failed to list resources")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    if models.is_empty() {
        println!("No resources advertised");
        return Ok(());
    }
    for model in models {
        println!("{}", model.model);
    }
    Ok(())
}
