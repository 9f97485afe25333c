//! CLI entry point for blog-catalog

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blog-catalog")]
#[command(version)]
#[command(about = "List blog posts and category pages from a content directory", long_about = None)]
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
    /// List site information
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Print posts as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the posts of one category
    Category {
        /// Category id
        id: String,

        /// Print posts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_catalog=debug,info"
    } else {
        "blog_catalog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    match cli.command {
        Commands::List { r#type, json } => {
            let blog = blog_catalog::Blog::new(&base_dir)?;
            blog_catalog::commands::list::run(&blog, &r#type, json).await?;
        }

        Commands::Category { id, json } => {
            let blog = blog_catalog::Blog::new(&base_dir)?;
            tracing::debug!("Listing category {:?}", id);
            blog_catalog::commands::category::run(&blog, &id, json).await?;
        }

        Commands::Version => {
            println!("blog-catalog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
