//! Compiled documents and the collaborator traits that produce content

use serde::{Deserialize, Serialize};

use super::{ContentError, PostSummary};

/// A rich-text body that has already been compiled and can be turned into markup
pub trait CompiledDocument {
    /// Produce the HTML fragment for this body
    fn render(&self) -> String;
}

/// Markdown (or MDX reduced to markdown) compiled to an HTML fragment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledMarkdown {
    html: String,
}

impl CompiledMarkdown {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

impl CompiledDocument for CompiledMarkdown {
    fn render(&self) -> String {
        self.html.clone()
    }
}

/// A single loaded document: compiled body plus its front-matter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<F> {
    pub compiled_body: CompiledMarkdown,
    pub front_matter: F,
}

/// Lists the front-matter of every document in a content category
pub trait FrontMatterStore {
    /// Summaries for `category`, newest first. Fails if the category does not exist.
    fn list_front_matter(&self, category: &str) -> Result<Vec<PostSummary>, ContentError>;
}

/// Loads and compiles exactly one named document
pub trait DocumentLoader<F> {
    /// Load `category/segments...`. Fails if the document is missing or does not compile.
    fn load_document(
        &self,
        category: &str,
        segments: &[&str],
    ) -> Result<Document<F>, ContentError>;
}
