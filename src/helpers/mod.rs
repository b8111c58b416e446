//! Helper functions for templates
//!
//! These produce the small pieces of markup the home page is built from:
//! links, tags, images, metadata and formatted dates.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;

use crate::config::{ImageConfig, SiteConfig};

/// Collection of all helper functions bound to one site configuration
pub struct Helpers {
    config: SiteConfig,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn post_url(&self, slug: &str) -> String {
        post_url(&self.config, slug)
    }

    pub fn all_posts_url(&self) -> String {
        all_posts_url(&self.config)
    }

    /// Clickable tag element
    pub fn tag(&self, tag: &str) -> String {
        tag_link(&tag_url(&self.config, tag), tag)
    }

    pub fn image(&self, image: &ImageConfig) -> String {
        image_tag(&self.config, image)
    }

    /// Page metadata for the given title and description
    pub fn seo(&self, title: &str, description: &str) -> String {
        page_seo(&self.config, title, description)
    }

    /// Format an ISO-8601 date with the configured display format
    pub fn date(&self, iso: &str) -> String {
        display_date(iso, &self.config.date_format)
    }
}
