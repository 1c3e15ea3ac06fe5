use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tokio::time;

use sensortile_rs_core::{MemoryStateStore, StateStore, TileConfig, TileModel};

#[derive(Parser)]
#[command(name = "sensortile-rs-tile")]
#[command(about = "Sensor status tile renderer driver for sensortile-rs")]
#[command(version)]
struct Args {
    /// Config file path (defaults to the standard search locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host state export file (JSON object keyed by entity id)
    #[arg(short, long)]
    states: Option<PathBuf>,

    /// Entity id override
    #[arg(short, long)]
    entity: Option<String>,

    /// Update interval in milliseconds
    #[arg(short = 't', long, default_value = "1000")]
    interval: u64,

    /// One-shot mode (don't loop)
    #[arg(short, long)]
    once: bool,

    /// Check config and state file, then exit
    #[arg(long)]
    check: bool,

    /// Generate example config file and exit
    #[arg(long)]
    generate_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Handle config generation
    if args.generate_config {
        let config_path = match &args.config {
            Some(path) => path.clone(),
            None => TileConfig::default_config_path()
                .context("could not determine config directory")?,
        };
        TileConfig::save_example_config_to_file(&config_path)?;
        println!("Generated example config at: {}", config_path.display());
        println!("\nEdit the entity, thresholds and colors to match your sensor.");
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => TileConfig::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => TileConfig::load().context("failed to load config")?,
    };
    if let Some(entity) = args.entity {
        config.entity = entity;
    }

    let states_path = args
        .states
        .context("no state export given; pass --states <file>")?;

    // Check availability if requested
    if args.check {
        let store = MemoryStateStore::load_from_file(&states_path)
            .with_context(|| format!("failed to read states from {}", states_path.display()))?;
        if store.get(&config.entity).is_some() {
            println!("Entity {} is available", config.entity);
            return Ok(());
        }
        eprintln!("Entity {} not present in state export", config.entity);
        std::process::exit(1);
    }

    if args.once {
        let store = MemoryStateStore::load_from_file(&states_path)?;
        render_tick(&config, &store)?;
    } else {
        let mut interval = time::interval(Duration::from_millis(args.interval));

        loop {
            interval.tick().await;

            // States are recomputed every render from the latest host export.
            match MemoryStateStore::load_from_file(&states_path) {
                Ok(store) => {
                    if let Err(e) = render_tick(&config, &store) {
                        eprintln!("Error rendering tile: {}", e);
                    }
                }
                Err(e) => {
                    eprintln!("Error reading state export: {}", e);
                }
            }
        }
    }

    Ok(())
}

/// Build and emit one tile model. A missing entity emits nothing.
fn render_tick(config: &TileConfig, store: &MemoryStateStore) -> anyhow::Result<()> {
    if let Some(model) = TileModel::build(config, store)? {
        println!("{}", serde_json::to_string(&model)?);
        io::stdout().flush()?;
    }
    Ok(())
}
