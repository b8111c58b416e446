//! homepage-rs: a static generator for a personal blog/portfolio landing page
//!
//! The home page is built from two pieces of content: the front-matter of every
//! blog post and one compiled "about me" document. Both are read once per
//! build, assembled into [`page::PageData`] and rendered through Tera templates.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod page;
pub mod server;
pub mod templates;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use content::ContentLoader;
use page::{PageAssembler, PageData};

/// Name of the site configuration file
pub const CONFIG_FILE: &str = "_config.yml";

/// A site on disk: its configuration and resolved directories
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content (markdown/MDX) directory
    pub content_dir: PathBuf,
    /// Static assets copied verbatim into the output
    pub static_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Open a site from a directory, falling back to defaults without `_config.yml`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Build a site from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let static_dir = base_dir.join(&config.static_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            static_dir,
            public_dir,
        }
    }

    /// Read the posts and the author document into page data
    pub fn page_data(&self) -> Result<PageData> {
        let loader = ContentLoader::new(self);
        PageAssembler::new(&loader, &self.config)
            .assemble()
            .with_context(|| format!("Cannot build the home page from {:?}", self.content_dir))
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::init_site(&self.base_dir)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str) -> Result<PathBuf> {
        commands::new::create_post(self, title, None)
    }
}
