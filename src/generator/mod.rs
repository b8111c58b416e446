//! Generator module - writes the rendered home page and static assets

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::page::PageData;
use crate::templates::HomeRenderer;
use crate::Site;

/// File the home page is written to
pub const INDEX_FILE: &str = "index.html";
/// Serialized page data written next to the home page
pub const PAGE_DATA_FILE: &str = "page-data.json";

/// Static site generator
pub struct Generator {
    site: Site,
    renderer: HomeRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        Ok(Self {
            site: site.clone(),
            renderer: HomeRenderer::new(&site.config)?,
        })
    }

    /// Write the home page, its data and the static assets
    pub fn generate(&self, data: &PageData) -> Result<()> {
        let public_dir = &self.site.public_dir;
        fs::create_dir_all(public_dir)
            .with_context(|| format!("Cannot create {:?}", public_dir))?;

        let copied = self.copy_static_assets()?;
        tracing::debug!("Copied {} static files", copied);

        let html = self.renderer.render(data)?;
        let index = public_dir.join(INDEX_FILE);
        fs::write(&index, html).with_context(|| format!("Cannot write {:?}", index))?;
        tracing::info!("Wrote {:?}", index);

        let json = serde_json::to_string_pretty(data)?;
        fs::write(public_dir.join(PAGE_DATA_FILE), json)?;

        Ok(())
    }

    /// Copy the static directory into the output, keeping its name as the URL prefix
    fn copy_static_assets(&self) -> Result<usize> {
        let static_dir = &self.site.static_dir;
        if !static_dir.is_dir() {
            return Ok(0);
        }

        let prefix = static_dir
            .file_name()
            .map(Path::new)
            .unwrap_or_else(|| Path::new("static"));
        let dest_root = self.site.public_dir.join(prefix);

        let mut copied = 0;
        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            let dest = dest_root.join(relative);

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::copy(path, &dest).with_context(|| format!("Cannot copy {:?}", path))?;
            copied += 1;
        }

        Ok(copied)
    }
}
