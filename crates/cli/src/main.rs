use clap::{Parser, Subcommand};
use ferrous_doh_domain::{CliOverrides, StorageBackend};
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-doh")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous DoH - resolve host names over DNS-over-HTTPS and pin HTTP connections")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// DoH server URL, repeatable
    #[arg(long = "server", value_name = "URL", global = true)]
    servers: Vec<String>,

    /// TTL override: seconds or an interval such as "5 minutes"
    #[arg(long, value_name = "EXPR", global = true)]
    ttl: Option<String>,

    /// Shuffle resolved addresses
    #[arg(long, global = true)]
    shuffle: bool,

    /// Debug logging and verbose DoH connections
    #[arg(long, global = true)]
    debug: bool,

    /// Record store backend (runtime, filesystem, memory)
    #[arg(long, value_name = "KIND", global = true)]
    storage: Option<StorageBackend>,

    /// Cache directory for the filesystem backend
    #[arg(long, value_name = "DIR", global = true)]
    storage_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a host name and print its addresses
    Resolve {
        host: String,

        /// Number of passes, to observe cache hits
        #[arg(long, default_value_t = 1)]
        repeat: u32,
    },

    /// GET a URL over a connection pinned to the DoH-resolved addresses
    Fetch { url: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        servers: cli.servers,
        ttl: cli.ttl,
        shuffle: cli.shuffle,
        debug: cli.debug,
        storage_backend: cli.storage,
        storage_path: cli.storage_path,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        servers = config.doh.effective_servers().len(),
        storage = config.storage.backend.as_str(),
        "Configuration loaded"
    );

    let services = di::DohServices::new(&config)?;

    match cli.command {
        Command::Resolve { host, repeat } => {
            commands::resolve(&services, &host, repeat).await?;
        }
        Command::Fetch { url } => {
            commands::fetch(&services, &url).await?;
        }
    }

    Ok(())
}
