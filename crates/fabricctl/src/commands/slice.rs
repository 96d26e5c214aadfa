//! Slice lifecycle commands.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use fabric_client::lease::default_lease_end;
use fabric_client::services::SlicesService;
use fabric_client::topology::{
    apply_defaults, compile, linear, multi_site, new_graph_id, star, to_graphml, TopologySpec,
};
use fabric_client::Config;

use crate::cli::SliceCommands;

pub async fn run(service: &SlicesService, config: &Config, action: SliceCommands) -> Result<()> {
    match action {
        SliceCommands::Create {
            name,
            file,
            preset,
            sites,
            lease_end,
            ssh_keys,
        } => create(service, config, CreateArgs {
            name,
            file,
            preset,
            sites,
            lease_end,
            ssh_keys,
        })
        .await,
        SliceCommands::Show { id } => show(service, &id).await,
        SliceCommands::Delete { id } => delete(service, &id).await,
    }
}

struct CreateArgs {
    name: String,
    file: Option<PathBuf>,
    preset: Option<String>,
    sites: Vec<String>,
    lease_end: Option<String>,
    ssh_keys: Vec<String>,
}

async fn create(service: &SlicesService, config: &Config, args: CreateArgs) -> Result<()> {
    let spec = resolve_topology(args.file.as_deref(), args.preset.as_deref(), &args.sites)?;
    let spec = apply_defaults(spec);

    let graph_id = new_graph_id();
    let document = compile(&spec, &graph_id);
    let graph_model = to_graphml(&document).context("failed to serialize topology")?;

    // The API wants an array, never null: an empty list means "no keys".
    let mut ssh_keys = args.ssh_keys;
    if ssh_keys.is_empty() {
        if let Some(key) = &config.default_ssh_key {
            ssh_keys.push(key.clone());
        }
    }

    let lease_end = args.lease_end.unwrap_or_else(default_lease_end);

    let creation = service
        .create(&args.name, &lease_end, &graph_model, ssh_keys)
        .await
        .with_context(|| format!("failed to create slice {}", args.name))?;

    println!("Slice created");
    println!("  id:         {}", creation.id);
    println!("  state:      {}", creation.state);
    println!("  slivers:    {}", creation.sliver_count);
    println!("  lease ends: {}", creation.lease_end_time);
    Ok(())
}

async fn show(service: &SlicesService, id: &str) -> Result<()> {
    let details = service
        .get(id)
        .await
        .with_context(|| format!("failed to read slice {id}"))?;
    println!("Slice {}", details.id);
    println!("  name:  {}", details.name);
    println!("  state: {}", details.state);
    if let Some(lease_end) = details.lease_end {
        println!("  lease ends: {lease_end}");
    }
    Ok(())
}

async fn delete(service: &SlicesService, id: &str) -> Result<()> {
    service
        .delete(id)
        .await
        .with_context(|| format!("failed to delete slice {id}"))?;
    println!("Slice {id} deleted");
    Ok(())
}

fn resolve_topology(
    file: Option<&Path>,
    preset: Option<&str>,
    sites: &[String],
) -> Result<TopologySpec> {
    match (file, preset) {
        (Some(path), None) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read topology file {}", path.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("failed to parse topology file {}", path.display()))
        }
        (None, Some(preset)) => build_preset(preset, sites),
        (None, None) => bail!("either --file or --preset is required"),
        (Some(_), Some(_)) => unreachable!("clap rejects --file with --preset"),
    }
}

fn build_preset(preset: &str, sites: &[String]) -> Result<TopologySpec> {
    let (shape, count) = preset
        .split_once(':')
        .with_context(|| format!("preset {preset:?} is not of the form <shape>:<count>"))?;
    let count: usize = count
        .parse()
        .with_context(|| format!("preset count {count:?} is not a number"))?;
    if count == 0 {
        bail!("preset count must be at least 1");
    }

    match shape {
        "linear" | "star" => {
            let site = sites
                .first()
                .with_context(|| format!("preset {shape:?} needs a --site"))?;
            Ok(match shape {
                "linear" => linear(count, site),
                _ => star(count, site),
            })
        }
        "multisite" => {
            if sites.len() < 2 {
                bail!("preset \"multisite\" needs at least two --site values");
            }
            Ok(multi_site(sites, count))
        }
        other => bail!("unknown preset shape {other:?} (expected linear, star, or multisite)"),
    }
}
