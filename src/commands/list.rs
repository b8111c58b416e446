//! List site content

use anyhow::Result;
use indexmap::IndexMap;

use crate::content::{AuthorFrontMatter, ContentLoader, Document, DocumentLoader, FrontMatterStore};
use crate::helpers::Helpers;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let loader = ContentLoader::new(site);

    match content_type {
        "post" | "posts" => {
            let helpers = Helpers::new(site.config.clone());
            let posts = loader.list_front_matter(&site.config.blog_category)?;
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}]",
                    helpers.date(&post.date),
                    post.title,
                    post.slug
                );
            }
        }
        "tag" | "tags" => {
            let posts = loader.list_front_matter(&site.config.blog_category)?;
            let tags = count_tags(posts.iter().flat_map(|p| p.tags.iter()));
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        "author" => {
            let author: Document<AuthorFrontMatter> = loader.load_document(
                &site.config.author_category,
                &[site.config.author_document.as_str()],
            )?;
            let fm = author.front_matter;
            println!("Author:");
            println!("  name:       {}", fm.name.unwrap_or_default());
            println!("  occupation: {}", fm.occupation.unwrap_or_default());
            println!("  company:    {}", fm.company.unwrap_or_default());
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, tag, author",
                content_type
            );
        }
    }

    Ok(())
}

/// Count tag usage, most used first; ties keep first-seen order
fn count_tags<'a>(tags: impl Iterator<Item = &'a String>) -> Vec<(String, usize)> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for tag in tags {
        *counts.entry(tag.clone()).or_insert(0) += 1;
    }
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
