//! CLI entry point for homepage-rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "homepage-rs")]
#[command(version)]
#[command(about = "Static generator for a personal blog/portfolio landing page", long_about = None)]
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
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new blog post
    New {
        /// Title of the new post
        title: String,

        /// File name for the new post (defaults to the slugified title)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Generate the home page
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Serve without rebuilding on changes
        #[arg(long)]
        r#static: bool,
    },

    /// Remove the generated output
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, tag, author)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "homepage_rs=debug,info"
    } else {
        "homepage_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine the current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            homepage_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { title, path } => {
            let site = homepage_rs::Site::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let created = homepage_rs::commands::new::create_post(&site, &title, path.as_deref())?;
            println!("Created: {:?}", created);
        }

        Commands::Generate { watch } => {
            let site = homepage_rs::Site::new(&base_dir)?;
            tracing::info!("Generating home page...");
            site.generate()?;
            println!("Generated successfully!");

            if watch {
                tokio::task::spawn_blocking(move || {
                    homepage_rs::commands::generate::watch_and_rebuild(&site, || {
                        println!("Regenerated successfully!")
                    })
                })
                .await??;
            }
        }

        Commands::Server {
            port,
            ip,
            open,
            r#static,
        } => {
            let site = homepage_rs::Site::new(&base_dir)?;

            tracing::info!("Generating home page...");
            site.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            homepage_rs::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::Clean => {
            let site = homepage_rs::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = homepage_rs::Site::new(&base_dir)?;
            homepage_rs::commands::list::run(&site, &r#type)?;
        }

        Commands::Version => {
            println!("homepage-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
