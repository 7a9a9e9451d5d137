//! Inspect and validate device-tree component palette catalogs.
//!
//! Loads the embedded catalog (or `--file` / `DT_PALETTE_COMPONENTS`), runs
//! the same schema and invariant checks the editor relies on, and prints
//! types, single components, or the whole resolved catalog. Icons are
//! printed as asset names.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use dtpalette::{ComponentLoader, ComponentSource, IconTable, components_schema};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "dtpalette")]
#[command(about = "Inspect and validate device-tree component palette catalogs")]
#[command(version)]
struct Args {
    /// Catalog file to load instead of the embedded one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every component type, one per line
    Types,
    /// Print one component as JSON
    Show {
        /// Component type, e.g. soc-main
        component_type: String,
    },
    /// Print the whole resolved catalog as JSON
    Dump,
    /// Check the catalog and print a summary
    Validate,
    /// Print the bundled JSON Schema
    Schema,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing()?;

    match args.command {
        Command::Types => {
            let loader = open_loader(args.file)?;
            for component_type in loader.all_component_types() {
                println!("{component_type}");
            }
        }
        Command::Show { component_type } => {
            let loader = open_loader(args.file)?;
            let Some(item) = loader.component_by_type(&component_type) else {
                bail!("component type '{component_type}' not found");
            };
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        Command::Dump => {
            let loader = open_loader(args.file)?;
            println!("{}", serde_json::to_string_pretty(&loader.load_components())?);
        }
        Command::Validate => {
            let loader = open_loader(args.file)?;
            println!(
                "{}: {} categories, {} components",
                loader.source(),
                loader.categories().len(),
                loader.config().item_count()
            );
        }
        Command::Schema => print!("{}", components_schema()),
    }
    Ok(())
}

/// `--file` wins over `DT_PALETTE_COMPONENTS`, which wins over the embedded catalog.
fn open_loader(file: Option<PathBuf>) -> Result<ComponentLoader<&'static str>> {
    let source = match file {
        Some(path) => ComponentSource::File(path),
        None => ComponentSource::from_env(),
    };
    ComponentLoader::new(source, IconTable::from_fn(|icon| icon.asset_name()))
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
