//! Home page view model and renderer

use anyhow::Result;
use serde::Serialize;
use tera::Context;

use super::TemplateRenderer;
use crate::config::SiteConfig;
use crate::content::{CompiledDocument, PostSummary};
use crate::helpers::{link_to, meta_generator, Helpers};
use crate::page::{DisplayPolicy, PageData};

/// Everything `home.html` renders
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub lang: String,
    pub generator: String,
    pub seo: String,
    pub greeting: Vec<String>,
    pub intro_name: Option<String>,
    pub headshot: Option<String>,
    pub author_body: String,
    pub skills: Vec<SkillGroup>,
    pub latest_heading: String,
    pub date_format: String,
    pub posts: Vec<PostView>,
    pub no_posts: bool,
    pub all_posts_link: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub heading: String,
    pub items: Vec<String>,
}

/// One previewed post
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub slug: String,
    pub href: String,
    pub date: String,
    pub title: String,
    pub summary: String,
    /// Rendered tag elements, in authored order
    pub tags: Vec<String>,
}

/// Renders [`PageData`] into the home page document
pub struct HomeRenderer {
    templates: TemplateRenderer,
    config: SiteConfig,
    helpers: Helpers,
    policy: DisplayPolicy,
}

impl HomeRenderer {
    /// Renderer previewing `home.max_display` posts
    pub fn new(config: &SiteConfig) -> Result<Self> {
        Ok(Self {
            templates: TemplateRenderer::new()?,
            config: config.clone(),
            helpers: Helpers::new(config.clone()),
            policy: DisplayPolicy::new(config.home.max_display),
        })
    }

    /// Override the display bound
    pub fn with_policy(mut self, policy: DisplayPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the view model; the post list is cut to the display bound here
    pub fn view(&self, data: &PageData) -> HomeView {
        let selection = self.policy.select(&data.posts);
        let author = &data.author_details;

        let all_posts_link = selection.has_more().then(|| {
            link_to(
                &self.helpers.all_posts_url(),
                "All Posts \u{2192}",
                Some("all posts"),
            )
        });

        HomeView {
            lang: self.config.language.clone(),
            generator: meta_generator(),
            seo: self
                .helpers
                .seo(&self.config.title, &self.config.description),
            greeting: self.config.home.greeting.clone(),
            intro_name: self.intro_name(author.front_matter.name.as_deref()),
            headshot: self.config.home.headshot.as_ref().map(|h| self.helpers.image(h)),
            author_body: author.compiled_body.render(),
            skills: self
                .config
                .home
                .skills
                .iter()
                .map(|(heading, items)| SkillGroup {
                    heading: heading.clone(),
                    items: items.clone(),
                })
                .collect(),
            latest_heading: self.config.home.latest_heading.clone(),
            date_format: self.config.date_format.clone(),
            posts: selection.shown.iter().map(|p| self.post_view(p)).collect(),
            no_posts: selection.is_empty(),
            all_posts_link,
        }
    }

    fn intro_name(&self, author_name: Option<&str>) -> Option<String> {
        if let Some(name) = &self.config.home.greeting_name {
            return Some(name.clone());
        }
        author_name
            .unwrap_or(&self.config.author)
            .split_whitespace()
            .next()
            .map(str::to_string)
    }

    fn post_view(&self, post: &PostSummary) -> PostView {
        PostView {
            slug: post.slug.clone(),
            href: self.helpers.post_url(&post.slug),
            date: post.date.clone(),
            title: post.title.clone(),
            summary: post.summary.clone(),
            tags: post.tags.iter().map(|t| self.helpers.tag(t)).collect(),
        }
    }

    /// Render the full HTML document
    pub fn render(&self, data: &PageData) -> Result<String> {
        let context = Context::from_serialize(self.view(data))?;
        self.templates.render("home.html", &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ImageConfig, ImageLayout};
    use crate::content::{AuthorFrontMatter, CompiledMarkdown, Document};

    fn page(n: usize) -> PageData {
        let posts = (0..n)
            .map(|i| {
                PostSummary::new(
                    format!("post-{i}"),
                    format!("2024-01-{:02}T00:00:00.000Z", 28 - i),
                    format!("Post number {i}"),
                )
                .with_summary(format!("Summary {i}"))
                .with_tags(["rust", "next js"])
            })
            .collect();
        PageData {
            posts,
            author_details: Document {
                compiled_body: CompiledMarkdown::new("<p>I like <strong>databases</strong>.</p>"),
                front_matter: AuthorFrontMatter {
                    name: Some("Dov".to_string()),
                    ..Default::default()
                },
            },
        }
    }

    fn render(data: &PageData) -> String {
        HomeRenderer::new(&SiteConfig::default())
            .unwrap()
            .render(data)
            .unwrap()
    }

    fn entries(html: &str) -> usize {
        html.matches(r#"<li class="post""#).count()
    }

    #[test]
    fn test_seven_posts_shows_five_and_all_posts_link() {
        let html = render(&page(7));
        assert_eq!(entries(&html), 5);
        for i in 0..5 {
            assert!(html.contains(&format!(r#"id="post-post-{i}""#)));
        }
        assert!(!html.contains("post-post-5"));
        assert!(!html.contains("post-post-6"));
        assert!(html.contains(r#"<a href="/blog" aria-label="all posts">All Posts →</a>"#));
        assert!(!html.contains("No posts found."));
    }

    #[test]
    fn test_three_posts_shows_all_without_link() {
        let html = render(&page(3));
        assert_eq!(entries(&html), 3);
        assert!(!html.contains("All Posts"));
    }

    #[test]
    fn test_exactly_max_display_has_no_link() {
        let html = render(&page(5));
        assert_eq!(entries(&html), 5);
        assert!(!html.contains("All Posts"));
    }

    #[test]
    fn test_zero_posts_placeholder() {
        let html = render(&page(0));
        assert!(html.contains("No posts found."));
        assert_eq!(entries(&html), 0);
        assert!(!html.contains("All Posts"));
    }

    #[test]
    fn test_display_count_for_any_total() {
        let renderer = HomeRenderer::new(&SiteConfig::default()).unwrap();
        for n in 0..9 {
            let html = renderer.render(&page(n)).unwrap();
            assert_eq!(entries(&html), n.min(5), "n = {n}");
            assert_eq!(html.contains("All Posts"), n > 5, "n = {n}");
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let mut data = page(0);
        data.posts = vec![
            PostSummary::new("a", "2024-03-03", "A"),
            PostSummary::new("b", "2024-02-02", "B"),
            PostSummary::new("c", "2024-01-01", "C"),
        ];
        let html = render(&data);
        let a = html.find(r#"id="post-a""#).unwrap();
        let b = html.find(r#"id="post-b""#).unwrap();
        let c = html.find(r#"id="post-c""#).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_post_entry_contents() {
        let html = render(&page(1));
        assert!(html
            .contains(r#"<time datetime="2024-01-28T00:00:00.000Z">January 28, 2024</time>"#));
        assert!(html.contains(r#"<a href="/blog/post-0">Post number 0</a>"#));
        assert!(html.contains(concat!(
            r#"<a href="/tags/rust" class="tag">rust</a>"#,
            r#"<a href="/tags/next-js" class="tag">next-js</a>"#,
        )));
        assert!(html.contains("Summary 0"));
        assert!(html.contains("Read more &rarr;"));
    }

    #[test]
    fn test_empty_tags_render_empty_row() {
        let mut data = page(0);
        data.posts = vec![PostSummary::new("lonely", "2024-01-01", "No tags")];
        let html = render(&data);
        assert!(html.contains(r#"<div class="tags"></div>"#));
        assert_eq!(entries(&html), 1);
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut data = page(0);
        data.posts = vec![PostSummary::new("x", "2024-01-01", "<script>alert(1)</script>")];
        let html = render(&data);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_author_intro_and_skills() {
        let mut config = SiteConfig::default();
        config.title = "Dov's corner".to_string();
        config.description = "Notes".to_string();
        config.home.headshot = Some(ImageConfig {
            src: "/static/images/headshot.png".to_string(),
            width: 2517,
            height: 1669,
            alt: "Headshot".to_string(),
            layout: ImageLayout::Responsive,
        });
        config
            .home
            .skills
            .insert("Databases".to_string(), vec!["Postgresql".to_string(), "Redis".to_string()]);

        let html = HomeRenderer::new(&config).unwrap().render(&page(0)).unwrap();
        assert!(html.contains("<title>Dov&#39;s corner</title>"));
        assert!(html.contains("hi! 👋 nice to meet you"));
        assert!(html.contains("i'm dov"));
        assert!(html.contains("<p>I like <strong>databases</strong>.</p>"));
        assert!(html.contains(r#"width="2517""#));
        assert!(html.contains("<b>Databases</b>"));
        let pg = html.find("<li>Postgresql</li>").unwrap();
        let redis = html.find("<li>Redis</li>").unwrap();
        assert!(pg < redis);
    }

    #[test]
    fn test_intro_uses_first_name() {
        let mut data = page(0);
        data.author_details.front_matter.name = Some("Dov Alperin".to_string());
        let html = render(&data);
        assert!(html.contains("i'm dov</h1>"));
        assert!(!html.contains("alperin"));

        data.author_details.front_matter.name = None;
        let html = render(&data);
        assert!(html.contains("i'm john</h1>"));
    }

    #[test]
    fn test_greeting_name_override() {
        let mut config = SiteConfig::default();
        config.home.greeting_name = Some("D.A.".to_string());
        let html = HomeRenderer::new(&config).unwrap().render(&page(0)).unwrap();
        assert!(html.contains("i'm d.a.</h1>"));
    }

    #[test]
    fn test_policy_override() {
        let renderer = HomeRenderer::new(&SiteConfig::default())
            .unwrap()
            .with_policy(DisplayPolicy::new(2));
        let html = renderer.render(&page(3)).unwrap();
        assert_eq!(entries(&html), 2);
        assert!(html.contains("All Posts"));
    }

    #[test]
    fn test_view_keeps_full_page_data() {
        let data = page(7);
        let view = HomeRenderer::new(&SiteConfig::default()).unwrap().view(&data);
        assert_eq!(view.posts.len(), 5);
        assert_eq!(data.posts.len(), 7);
    }
}
