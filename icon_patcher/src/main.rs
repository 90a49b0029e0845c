use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use game_records::{LoadOrder, SourceKey};
use icon_patcher::{OutputWriter, Patcher, PatcherConfig, PatcherError};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate interaction icon string overrides for flora and activators
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON record dump describing the load order
    #[arg(short, long)]
    records: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output root, overriding the configured one
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Regenerate sources that already have output
    #[arg(long = "override")]
    override_existing: bool,

    /// Only patch this plugin file
    #[arg(short, long)]
    single: Option<String>,
}

fn main() -> Result<(), PatcherError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PatcherConfig::load(path)?,
        None => PatcherConfig::default(),
    };
    if let Some(output) = args.output {
        config.output_root = output;
    }
    if args.override_existing {
        config.skip_existing = false;
    }

    let reader = File::open(&args.records).map_err(PatcherError::at_path(&args.records))?;
    let load_order = LoadOrder::from_reader(BufReader::new(reader))?;

    let single = args
        .single
        .as_deref()
        .map(SourceKey::parse)
        .transpose()?;
    if let Some(key) = &single {
        if load_order.get(key).is_none() {
            return Err(PatcherError::UnknownSource(key.to_string()));
        }
    }

    let mut patcher = Patcher::from_config(&config);
    if let Some(key) = single {
        patcher = patcher.only(key);
    }
    let writer = OutputWriter::new(&config.output_root, &config.file_prefix);

    info!("patching plugins");
    let patches = patcher.run(&load_order, |source| {
        config.skip_existing && writer.has_existing_output(source)
    });

    for patch in &patches {
        writer.write(patch)?;
    }

    info!(patched = patches.len(), "successfully patched plugins");
    Ok(())
}
