//! Content loader - reads front-matter and documents from the content directory

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::frontmatter::{self, iso_string, parse_date_string, PostFrontMatter};
use super::markdown::strip_mdx;
use super::{
    CompiledMarkdown, ContentError, Document, DocumentLoader, FrontMatterStore, MarkdownRenderer,
    PostSummary,
};
use crate::Site;

/// Extensions recognised as content, in lookup priority order
const CONTENT_EXTENSIONS: [&str; 3] = ["mdx", "md", "markdown"];

/// Filesystem-backed front-matter store and document loader
pub struct ContentLoader {
    content_dir: PathBuf,
    renderer: MarkdownRenderer,
}

impl ContentLoader {
    /// Create a loader for a site's content directory
    pub fn new(site: &Site) -> Self {
        let renderer = MarkdownRenderer::with_options(
            &site.config.highlight.theme,
            site.config.highlight.line_number,
        );
        Self {
            content_dir: site.content_dir.clone(),
            renderer,
        }
    }

    /// Create a loader for an arbitrary content directory with default rendering
    pub fn from_dir<P: AsRef<Path>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Read a single post's front-matter
    fn load_summary(
        &self,
        category_dir: &Path,
        path: &Path,
    ) -> Result<Option<(NaiveDateTime, PostSummary)>, ContentError> {
        let content = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (fm, _body) = frontmatter::parse::<PostFrontMatter>(&content).map_err(|message| {
            ContentError::FrontMatter {
                path: path.to_path_buf(),
                message,
            }
        })?;

        if fm.draft {
            tracing::debug!("Skipping draft {:?}", path);
            return Ok(None);
        }

        let date = match fm.date.as_deref() {
            Some(raw) => parse_date_string(raw).or_else(|| {
                tracing::warn!("Unparsable date {:?} in {:?}, using file time", raw, path);
                None
            }),
            None => None,
        }
        .unwrap_or_else(|| file_modified(path));

        let slug = slug_for(category_dir, path);

        let title = fm
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| file_stem(path));

        let summary = PostSummary {
            slug,
            date: iso_string(&date),
            title,
            summary: fm.summary.unwrap_or_default(),
            tags: fm.tags,
        };

        Ok(Some((date, summary)))
    }
}

impl FrontMatterStore for ContentLoader {
    fn list_front_matter(&self, category: &str) -> Result<Vec<PostSummary>, ContentError> {
        let category_dir = self.content_dir.join(category);
        if !category_dir.is_dir() {
            return Err(ContentError::MissingCategory {
                category: category.to_string(),
                path: category_dir,
            });
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&category_dir)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                // The category itself could not be listed
                Err(source) if source.depth() == 0 => {
                    return Err(ContentError::Walk {
                        path: category_dir,
                        source,
                    });
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in `{}`: {}", category, e);
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() || !is_content_file(path) {
                continue;
            }

            match self.load_summary(&category_dir, path) {
                Ok(Some(post)) => posts.push(post),
                Ok(None) => {}
                Err(e) => tracing::warn!("Skipping {:?}: {}", path, e),
            }
        }

        // Newest first; stable so equal dates keep path order
        posts.sort_by(|a, b| b.0.cmp(&a.0));

        tracing::debug!("Loaded {} entries from `{}`", posts.len(), category);

        Ok(posts.into_iter().map(|(_, post)| post).collect())
    }
}

impl<F> DocumentLoader<F> for ContentLoader
where
    F: DeserializeOwned + Default,
{
    fn load_document(
        &self,
        category: &str,
        segments: &[&str],
    ) -> Result<Document<F>, ContentError> {
        let base = segments
            .iter()
            .fold(self.content_dir.join(category), |path, segment| path.join(segment));

        let path = CONTENT_EXTENSIONS
            .iter()
            .map(|ext| {
                let mut file = OsString::from(base.as_os_str());
                file.push(".");
                file.push(ext);
                PathBuf::from(file)
            })
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| ContentError::DocumentNotFound {
                category: category.to_string(),
                name: segments.join("/"),
                path: base.clone(),
            })?;

        let source = fs::read_to_string(&path).map_err(|source| ContentError::Read {
            path: path.clone(),
            source,
        })?;

        let (front_matter, body) =
            frontmatter::parse::<F>(&source).map_err(|message| ContentError::FrontMatter {
                path: path.clone(),
                message,
            })?;

        let markdown = strip_mdx(body).map_err(|message| ContentError::Compile {
            path: path.clone(),
            message,
        })?;

        tracing::debug!("Compiled {:?}", path);

        Ok(Document {
            compiled_body: CompiledMarkdown::new(self.renderer.render(&markdown)),
            front_matter,
        })
    }
}

/// Check if a file is a content file
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| CONTENT_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

/// Slug is the path below the category directory, extension stripped, `/`-separated
fn slug_for(category_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(category_dir).unwrap_or(path);
    let without_ext = relative.with_extension("");
    without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled")
        .to_string()
}

fn file_modified(path: &Path) -> NaiveDateTime {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map(|t| DateTime::<Utc>::from(t).naive_utc())
        .unwrap_or_else(|_| Utc::now().naive_utc())
}
