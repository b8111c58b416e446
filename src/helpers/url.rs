//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blog/hello") // -> "/site/blog/hello"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }

    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }
    format!("{}{}", config.url.trim_end_matches('/'), url_for(config, path))
}

/// Detail page of a post
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    url_for(
        config,
        &format!("{}/{}", config.blog_route.trim_end_matches('/'), slug),
    )
}

/// Listing page of every post
pub fn all_posts_url(config: &SiteConfig) -> String {
    url_for(config, &config.blog_route)
}

/// Listing page of one tag, the tag kebab-cased
pub fn tag_url(config: &SiteConfig, tag: &str) -> String {
    url_for(
        config,
        &format!(
            "{}/{}",
            config.tag_route.trim_end_matches('/'),
            slug::slugify(tag)
        ),
    )
}

fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}
