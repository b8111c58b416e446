//! Post summary model

use serde::{Deserialize, Serialize};

/// Displayable metadata of one blog post, as produced by the front-matter store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Path of the post relative to its category, without extension
    pub slug: String,

    /// Publication date, ISO-8601
    pub date: String,

    /// Post title
    pub title: String,

    /// Short summary shown in listings
    #[serde(default)]
    pub summary: String,

    /// Post tags, in authored order
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PostSummary {
    /// Create a summary with no tags and an empty summary
    pub fn new(slug: impl Into<String>, date: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            date: date.into(),
            title: title.into(),
            summary: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
