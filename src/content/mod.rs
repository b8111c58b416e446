//! Content module - front-matter, documents and the loaders that read them

mod document;
mod error;
pub mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use document::{CompiledDocument, CompiledMarkdown, Document, DocumentLoader, FrontMatterStore};
pub use error::ContentError;
pub use frontmatter::{AuthorFrontMatter, PostFrontMatter};
pub use loader::ContentLoader;
pub use markdown::{strip_mdx, MarkdownRenderer};
pub use post::PostSummary;
