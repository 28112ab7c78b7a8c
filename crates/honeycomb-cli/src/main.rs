use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use honeycomb_core::{Config, FileStorage, HiveChild, HiveManager, Storage};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod serve;

#[derive(Parser)]
#[command(name = "honeycomb")]
#[command(about = "Hive of honeycombs and connection graphs", long_about = None)]
struct Cli {
    /// Config file to use instead of the default locations
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the store and seed the default hive
    Init {
        /// Also write a honeycomb.toml with the default settings
        #[arg(long)]
        write_config: bool,
    },
    /// List the hive's honeycombs and graphs
    List,
    /// Print the view of a honeycomb or graph
    Show {
        /// Name of the honeycomb or graph
        name: String,
    },
    /// Export a graph as JSON
    Export {
        /// Name of the graph
        graph: String,
        /// Id-indexed view instead of flat arrays
        #[arg(long)]
        indexed: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace a graph's content with a JSON document
    Import {
        /// Name of the graph
        graph: String,
        /// Document with `nodes` and `edges` arrays
        file: PathBuf,
    },
    /// Remove a honeycomb or graph, or a single node of a graph
    Remove {
        /// Name of the honeycomb or graph
        name: String,
        /// Remove only this node of the graph
        #[arg(long)]
        node: Option<String>,
        /// With --node, also remove the edges touching it
        #[arg(long, requires = "node")]
        cascade: bool,
    },
    /// Start the HTTP server
    Serve {
        /// Port to listen on (default from config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Do not open a browser even if the config asks for it
        #[arg(long)]
        no_open: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn Error>> {
    let config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn open_manager(config: &Config) -> Result<HiveManager<FileStorage>, Box<dyn Error>> {
    let storage = FileStorage::with_config(config.storage.clone());
    Ok(HiveManager::open(storage, config)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Init { write_config } => {
            let storage = FileStorage::with_config(config.storage.clone());
            if storage.hive_exists(&config.storage.root_key)? {
                println!("Hive already initialized in {}", storage.base_path().display());
            } else {
                let manager = open_manager(&config)?;
                println!("Initialized hive in {}", manager.storage().base_path().display());
                println!("  Children: {}", manager.hive().names().join(", "));
            }

            if write_config {
                let path = Path::new("honeycomb.toml");
                if path.exists() {
                    println!("honeycomb.toml already exists, left unchanged");
                } else {
                    std::fs::write(path, Config::default_config_string())?;
                    println!("Wrote honeycomb.toml");
                }
            }
        }
        Commands::List => {
            let manager = open_manager(&config)?;
            for child in manager.hive().values() {
                let kind = match child {
                    HiveChild::Honeycomb(_) => "honeycomb",
                    HiveChild::Graph(_) => "graph",
                };
                let icon = child.icon().unwrap_or(" ");
                println!("{} {:<20} {:<10} {}", icon, child.key(), kind, child.title());
            }
        }
        Commands::Show { name } => {
            let manager = open_manager(&config)?;
            let view = match manager.hive().get(&name) {
                Some(HiveChild::Graph(_)) => manager.graph_view(&name)?,
                _ => manager.honeycomb_view(&name)?,
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Commands::Export { graph, indexed, output } => {
            let manager = open_manager(&config)?;
            let json = if indexed {
                serde_json::to_string_pretty(&manager.graph_view(&graph)?)?
            } else {
                serde_json::to_string_pretty(&manager.graph_record(&graph)?)?
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    info!(graph = %graph, path = %path.display(), "exported graph");
                }
                None => println!("{}", json),
            }
        }
        Commands::Import { graph, file } => {
            let mut manager = open_manager(&config)?;
            let bytes = std::fs::read(&file)?;
            let report = manager.import_graph(&graph, &bytes, None)?;
            println!(
                "Imported {} nodes and {} edges into '{}'",
                report.nodes, report.edges, graph
            );
            if report.skipped_edges > 0 {
                println!("  Skipped {} edges with unknown endpoints", report.skipped_edges);
            }
        }
        Commands::Remove { name, node, cascade } => {
            let mut manager = open_manager(&config)?;
            match node {
                Some(node) => {
                    let edges = manager.remove_graph_node(&name, &node, cascade)?;
                    println!("Removed node '{}' from '{}' ({} edges removed)", node, name, edges);
                }
                None => {
                    manager.remove(&name)?;
                    println!("Removed '{}'", name);
                }
            }
        }
        Commands::Serve { port, no_open } => {
            let manager = open_manager(&config)?;
            let serve_config = serve::ServeConfig {
                host: config.server.host.clone(),
                port: port.unwrap_or(config.server.port),
                open_browser: config.server.open_browser && !no_open,
                max_import_bytes: config.import.max_bytes,
            };
            serve::start_server(manager, serve_config).await?;
        }
    }

    Ok(())
}
