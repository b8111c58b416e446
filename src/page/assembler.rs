//! Page data assembler - gathers everything the home page renders

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::content::{
    AuthorFrontMatter, ContentError, Document, DocumentLoader, FrontMatterStore, PostSummary,
};

/// The compiled "about me" document
pub type AuthorDetails = Document<AuthorFrontMatter>;

/// Everything the home page needs, fetched once per build.
///
/// `posts` keeps the store's order (newest first) and is never truncated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    pub posts: Vec<PostSummary>,
    pub author_details: AuthorDetails,
}

/// Builds [`PageData`] from a content source
pub struct PageAssembler<'a, S> {
    source: &'a S,
    blog_category: String,
    author_category: String,
    author_document: String,
}

impl<'a, S> PageAssembler<'a, S>
where
    S: FrontMatterStore + DocumentLoader<AuthorFrontMatter>,
{
    /// Use the categories named in the site configuration
    pub fn new(source: &'a S, config: &SiteConfig) -> Self {
        Self {
            source,
            blog_category: config.blog_category.clone(),
            author_category: config.author_category.clone(),
            author_document: config.author_document.clone(),
        }
    }

    /// Load the posts and the author document. Either failing fails the whole page.
    pub fn assemble(&self) -> Result<PageData, ContentError> {
        let posts = self.source.list_front_matter(&self.blog_category)?;
        let author_details = self
            .source
            .load_document(&self.author_category, &[self.author_document.as_str()])?;

        tracing::debug!(
            "Assembled page data: {} posts, author {:?}",
            posts.len(),
            author_details.front_matter.name
        );

        Ok(PageData {
            posts,
            author_details,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::content::CompiledMarkdown;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory content source
    #[derive(Default)]
    pub struct MemorySource {
        pub categories: HashMap<String, Vec<PostSummary>>,
        pub documents: HashMap<String, AuthorDetails>,
        pub calls: Cell<usize>,
    }

    impl MemorySource {
        pub fn with_posts(posts: Vec<PostSummary>) -> Self {
            let mut source = Self::default();
            source.categories.insert("blog".to_string(), posts);
            source.documents.insert(
                "authors/default".to_string(),
                Document {
                    compiled_body: CompiledMarkdown::new("<p>I build things.</p>"),
                    front_matter: AuthorFrontMatter {
                        name: Some("Dov Alperin".to_string()),
                        ..Default::default()
                    },
                },
            );
            source
        }
    }

    impl FrontMatterStore for MemorySource {
        fn list_front_matter(&self, category: &str) -> Result<Vec<PostSummary>, ContentError> {
            self.calls.set(self.calls.get() + 1);
            self.categories
                .get(category)
                .cloned()
                .ok_or_else(|| ContentError::MissingCategory {
                    category: category.to_string(),
                    path: PathBuf::from(category),
                })
        }
    }

    impl DocumentLoader<AuthorFrontMatter> for MemorySource {
        fn load_document(
            &self,
            category: &str,
            segments: &[&str],
        ) -> Result<AuthorDetails, ContentError> {
            self.calls.set(self.calls.get() + 1);
            let key = format!("{}/{}", category, segments.join("/"));
            self.documents
                .get(&key)
                .cloned()
                .ok_or_else(|| ContentError::DocumentNotFound {
                    category: category.to_string(),
                    name: segments.join("/"),
                    path: PathBuf::from(&key),
                })
        }
    }

    fn sample_posts() -> Vec<PostSummary> {
        vec![
            PostSummary::new("a", "2024-03-01T00:00:00.000Z", "A"),
            PostSummary::new("b", "2024-02-01T00:00:00.000Z", "B"),
            PostSummary::new("c", "2024-01-01T00:00:00.000Z", "C"),
        ]
    }

    #[test]
    fn test_assemble_keeps_store_order_and_all_posts() {
        let mut posts = sample_posts();
        posts.extend((0..10).map(|i| PostSummary::new(format!("old-{i}"), "2000-01-01", "Old")));
        let source = MemorySource::with_posts(posts.clone());

        let data = PageAssembler::new(&source, &SiteConfig::default())
            .assemble()
            .unwrap();

        assert_eq!(data.posts, posts);
        assert_eq!(data.author_details.front_matter.name.as_deref(), Some("Dov Alperin"));
        assert_eq!(source.calls.get(), 2);
    }

    #[test]
    fn test_assemble_is_repeatable() {
        let source = MemorySource::with_posts(sample_posts());
        let assembler = PageAssembler::new(&source, &SiteConfig::default());

        assert_eq!(assembler.assemble().unwrap(), assembler.assemble().unwrap());
    }

    #[test]
    fn test_zero_posts_is_valid() {
        let source = MemorySource::with_posts(Vec::new());
        let data = PageAssembler::new(&source, &SiteConfig::default())
            .assemble()
            .unwrap();
        assert!(data.posts.is_empty());
    }

    #[test]
    fn test_missing_category_fails() {
        let mut source = MemorySource::with_posts(sample_posts());
        source.categories.clear();

        let err = PageAssembler::new(&source, &SiteConfig::default())
            .assemble()
            .unwrap_err();
        assert!(matches!(err, ContentError::MissingCategory { .. }));
    }

    #[test]
    fn test_missing_author_fails() {
        let mut source = MemorySource::with_posts(sample_posts());
        source.documents.clear();

        let err = PageAssembler::new(&source, &SiteConfig::default())
            .assemble()
            .unwrap_err();
        assert!(matches!(err, ContentError::DocumentNotFound { .. }));
    }

    #[test]
    fn test_categories_come_from_config() {
        let mut source = MemorySource::with_posts(Vec::new());
        let posts = source.categories.remove("blog").unwrap();
        source.categories.insert("writing".to_string(), posts);

        let config = SiteConfig {
            blog_category: "writing".to_string(),
            ..Default::default()
        };
        assert!(PageAssembler::new(&source, &config).assemble().is_ok());
    }
}
