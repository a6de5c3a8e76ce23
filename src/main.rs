//! NetBox VCF Export - Main entry point
//!
//! Exports the contacts of a NetBox contact group to a vCard file, either
//! from the live NetBox API or from a saved JSON snapshot.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use netbox_vcf_export::export::{ExportSink, FileSink, TracingObserver};
use netbox_vcf_export::models::GroupSelector;
use netbox_vcf_export::repositories::{ContactDirectory, InMemoryDirectory, NetBoxDirectory};
use netbox_vcf_export::{Config, ExportDriver, ExportRequest, NetBoxClient, VcfVersion};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "netbox-vcf-export")]
#[command(version, about = "Export NetBox contact groups to vCard files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read groups and contacts from a JSON snapshot instead of the NetBox API
    #[arg(long, global = true, value_name = "FILE")]
    snapshot: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a contact group to a VCF file
    Export {
        /// Group to export, by numeric ID or slug
        #[arg(short, long)]
        group: GroupSelector,

        /// Only export direct members of the group
        #[arg(long)]
        no_subgroups: bool,

        /// vCard version (3.0 or 4.0)
        #[arg(long, default_value = "3.0")]
        vcf_version: VcfVersion,

        /// Filename prefix
        #[arg(long, default_value = "netbox_contacts")]
        prefix: String,

        /// Output directory (overrides VCF_EXPORT_DIR)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// List contact groups
    Groups,
}

fn main() -> Result<ExitCode> {
    // dotenvy never prints, so a missing .env is not worth reporting
    let _ = dotenvy::dotenv();

    // Log to stderr; stdout carries only the final status line
    let default_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match load_config(cli.snapshot.is_some()) {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    let (directory, client) = open_directory(&config, cli.snapshot.as_deref())?;

    let exit = match cli.command {
        Commands::Export {
            group,
            no_subgroups,
            vcf_version,
            prefix,
            output_dir,
        } => {
            let dir = output_dir.unwrap_or_else(|| config.export_dir.clone());
            let mut sink = FileSink::new(dir);
            if let Some(url) = &config.media_url {
                sink = sink.with_base_url(url.clone());
            }
            let sink = Arc::new(sink) as Arc<dyn ExportSink>;

            let driver = ExportDriver::new(directory, sink, Arc::new(TracingObserver));
            let mut request = ExportRequest::new(group);
            request.include_subgroups = !no_subgroups;
            request.vcf_version = vcf_version;
            request.filename_prefix = prefix;

            let status = driver.run(&request);
            println!("{}", status);

            if status.is_failure() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Commands::Groups => {
            let groups = directory.list_groups()?;
            for group in &groups {
                let parent = group
                    .parent
                    .as_ref()
                    .map(|p| p.slug.as_str())
                    .unwrap_or("-");
                println!("{}\t{}\t{}\t{}", group.id, group.slug, group.name, parent);
            }
            info!("Listed {} contact groups", groups.len());
            ExitCode::SUCCESS
        }
    };

    if let Some(client) = client {
        debug!("NetBox client: {}", client.metrics().summary());
    }

    Ok(exit)
}

fn load_config(offline: bool) -> Result<Config> {
    let config = if offline {
        Config::output_from_env()?
    } else {
        Config::from_env()?
    };
    Ok(config)
}

/// Pick the contact source: a snapshot file when given, otherwise the NetBox API.
fn open_directory(
    config: &Config,
    snapshot: Option<&Path>,
) -> Result<(Arc<dyn ContactDirectory>, Option<Arc<NetBoxClient>>)> {
    match snapshot {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open snapshot {}", path.display()))?;
            let directory = InMemoryDirectory::from_json_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;
            info!("Using snapshot {}", path.display());
            Ok((Arc::new(directory), None))
        }
        None => {
            info!("Using NetBox API at {}", config.netbox_url);
            let client = Arc::new(NetBoxClient::new(config));
            let directory = Arc::new(NetBoxDirectory::new(client.clone()));
            Ok((directory, Some(client)))
        }
    }
}
