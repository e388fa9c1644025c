//! CLI entry point for asso-site

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "asso-site")]
#[command(version)]
#[command(about = "Content layer and read-only API for a community association website", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    List {
        /// Type of content to list (articles, recent, photos, categories, events, upcoming)
        #[arg(default_value = "articles")]
        r#type: String,
    },

    /// Load every content file and report problems
    Check,

    /// Write sitemap.xml
    Sitemap {
        /// Output file (defaults to sitemap.xml in the base directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start the JSON API server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to server.port from _config.yml)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to server.ip from _config.yml)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "asso_site=debug,info"
    } else {
        "asso_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine the current directory")?,
    };

    match cli.command {
        Commands::List { r#type } => {
            let site = asso_site::Site::new(&base_dir)?;
            asso_site::commands::list::run(&site, &r#type)?;
        }

        Commands::Check => {
            let site = asso_site::Site::new(&base_dir)?;
            tracing::info!("Checking content in {:?}", site.data_dir);
            asso_site::commands::check::run(&site)?;
            println!("Content is valid.");
        }

        Commands::Sitemap { output } => {
            let site = asso_site::Site::new(&base_dir)?;
            let path = asso_site::commands::sitemap::run(&site, output.as_deref())?;
            println!("Sitemap written to {:?}", path);
        }

        Commands::Server { port, ip } => {
            let site = asso_site::Site::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| site.settings.server.ip.clone());
            let port = port.unwrap_or(site.settings.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            asso_site::server::start(&site, &ip, port).await?;
        }

        Commands::Version => {
            println!("asso-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
