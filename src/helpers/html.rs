//! HTML helper functions

use super::url::{full_url_for, url_for};
use crate::config::{ImageConfig, ImageLayout, SiteConfig};

/// Generate an anchor tag. `text` is escaped, `href` is taken as is.
///
/// # Examples
/// ```ignore
/// link_to("/blog", "All Posts &rarr;", Some("all posts")) // -> <a href="/blog" aria-label="all posts">...</a>
/// ```
pub fn link_to(href: &str, text: &str, aria_label: Option<&str>) -> String {
    let aria = aria_label
        .map(|label| format!(r#" aria-label="{}""#, html_escape(label)))
        .unwrap_or_default();
    format!(r#"<a href="{}"{}>{}</a>"#, href, aria, html_escape(text))
}

/// Generate a clickable tag element linking to the tag's listing
pub fn tag_link(href: &str, tag: &str) -> String {
    let label = tag.split(' ').collect::<Vec<_>>().join("-");
    format!(
        r#"<a href="{}" class="tag">{}</a>"#,
        href,
        html_escape(&label)
    )
}

/// Generate an image tag honouring intrinsic size and layout mode
pub fn image_tag(config: &SiteConfig, image: &ImageConfig) -> String {
    let style = match image.layout {
        ImageLayout::Responsive => "width:100%;height:auto",
        ImageLayout::Intrinsic => "max-width:100%;height:auto",
        ImageLayout::Fixed => "",
    };
    let style_attr = if style.is_empty() {
        String::new()
    } else {
        format!(r#" style="{}""#, style)
    };
    let layout = match image.layout {
        ImageLayout::Responsive => "responsive",
        ImageLayout::Intrinsic => "intrinsic",
        ImageLayout::Fixed => "fixed",
    };

    format!(
        r#"<img src="{}" alt="{}" width="{}" height="{}" loading="lazy" decoding="async" data-layout="{}"{}>"#,
        url_for(config, &image.src),
        html_escape(&image.alt),
        image.width,
        image.height,
        layout,
        style_attr
    )
}

/// Generate the page metadata tags for a title and description
pub fn page_seo(config: &SiteConfig, title: &str, description: &str) -> String {
    let title = html_escape(title);
    let description = html_escape(description);
    let url = full_url_for(config, "/");

    [
        format!("<title>{}</title>", title),
        r#"<meta name="robots" content="follow, index">"#.to_string(),
        format!(r#"<meta name="description" content="{}">"#, description),
        format!(r#"<meta property="og:url" content="{}">"#, url),
        r#"<meta property="og:type" content="website">"#.to_string(),
        format!(
            r#"<meta property="og:site_name" content="{}">"#,
            html_escape(&config.title)
        ),
        format!(r#"<meta property="og:title" content="{}">"#, title),
        format!(
            r#"<meta property="og:description" content="{}">"#,
            description
        ),
        format!(r#"<link rel="canonical" href="{}">"#, url),
    ]
    .into_iter()
    .chain((!config.author.trim().is_empty()).then(|| {
        format!(
            r#"<meta name="author" content="{}">"#,
            html_escape(&config.author)
        )
    }))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="homepage-rs {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_to() {
        assert_eq!(
            link_to("/blog/a", "A & B", None),
            r#"<a href="/blog/a">A &amp; B</a>"#
        );
        assert!(link_to("/blog", "All", Some("all posts")).contains(r#"aria-label="all posts""#));
    }

    #[test]
    fn test_tag_link_dashes_spaces() {
        assert_eq!(
            tag_link("/tags/next-js", "next js"),
            r#"<a href="/tags/next-js" class="tag">next-js</a>"#
        );
    }

    #[test]
    fn test_image_tag() {
        let config = SiteConfig::default();
        let image = ImageConfig {
            src: "/static/images/headshot.png".to_string(),
            width: 2517,
            height: 1669,
            alt: "Dov's headshot".to_string(),
            layout: ImageLayout::Responsive,
        };
        let html = image_tag(&config, &image);
        assert!(html.contains(r#"src="/static/images/headshot.png""#));
        assert!(html.contains(r#"width="2517""#));
        assert!(html.contains(r#"height="1669""#));
        assert!(html.contains(r#"data-layout="responsive""#));
        assert!(html.contains("Dov&#39;s headshot"));
    }

    #[test]
    fn test_page_seo() {
        let config = SiteConfig::default();
        let html = page_seo(&config, "Home <1>", "About me");
        assert!(html.contains("<title>Home &lt;1&gt;</title>"));
        assert!(html.contains(r#"<meta name="description" content="About me">"#));
        assert!(html.contains(r#"<meta property="og:url" content="http://example.com/">"#));
        assert!(html.contains(r#"<meta name="author" content="John Doe">"#));

        let anonymous = SiteConfig {
            author: String::new(),
            ..SiteConfig::default()
        };
        assert!(!page_seo(&anonymous, "Home", "").contains(r#"name="author""#));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape(r#"<a href="x">'"#), "&lt;a href=&quot;x&quot;&gt;&#39;");
    }
}
