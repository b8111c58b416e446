//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub static_dir: String,
    pub public_dir: String,

    // Content
    pub blog_category: String,
    pub author_category: String,
    pub author_document: String,
    pub blog_route: String,
    pub tag_route: String,

    // Date format (Moment.js style)
    pub date_format: String,

    // Home page
    pub home: HomeConfig,

    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en-US".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            content_dir: "data".to_string(),
            static_dir: "static".to_string(),
            public_dir: "public".to_string(),

            blog_category: "blog".to_string(),
            author_category: "authors".to_string(),
            author_document: "default".to_string(),
            blog_route: "/blog".to_string(),
            tag_route: "/tags".to_string(),

            date_format: "MMMM D, YYYY".to_string(),

            home: HomeConfig::default(),
            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig =
            serde_yaml::from_str(&content).with_context(|| format!("Invalid config {:?}", path))?;
        Ok(config)
    }
}

/// Home page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// How many recent posts the home page previews
    pub max_display: usize,
    /// Header lines shown above the introduction
    pub greeting: Vec<String>,
    /// Name in the `i'm ...` line; the author's first name when unset
    pub greeting_name: Option<String>,
    pub headshot: Option<ImageConfig>,
    /// Skill group heading -> items, in file order
    pub skills: IndexMap<String, Vec<String>>,
    pub latest_heading: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            max_display: 5,
            greeting: vec!["hi! 👋 nice to meet you".to_string()],
            greeting_name: None,
            headshot: None,
            skills: IndexMap::new(),
            latest_heading: "Latest posts".to_string(),
        }
    }
}

/// An image with intrinsic dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageConfig {
    pub src: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub layout: ImageLayout,
}

/// How an image sizes itself relative to its container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageLayout {
    /// Scales with the container, keeping the aspect ratio
    #[default]
    Responsive,
    /// Rendered at exactly width x height
    Fixed,
    /// Like responsive but never larger than the intrinsic size
    Intrinsic,
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}
