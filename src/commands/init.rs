//! Initialize a new site

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const CONFIG_TEMPLATE: &str = r#"# Site
title: My Blog
description: ''
author: John Doe
language: en-US

# URL
url: http://example.com
root: /

# Directory
content_dir: data
static_dir: static
public_dir: public

# Content
blog_category: blog
author_category: authors
author_document: default
blog_route: /blog
tag_route: /tags

# Display format for post dates (Moment.js tokens)
date_format: MMMM D, YYYY

# Home page
home:
  max_display: 5
  greeting:
    - "hi! 👋 nice to meet you"
  latest_heading: Latest posts
  # greeting_name: john
  # headshot:
  #   src: /static/images/headshot.png
  #   width: 2517
  #   height: 1669
  #   alt: Headshot
  #   layout: responsive
  skills:
    Programming languages:
      - Rust
    Databases:
      - Postgresql

highlight:
  theme: base16-ocean.dark
  line_number: false
"#;

const AUTHOR_TEMPLATE: &str = r#"---
name: John Doe
occupation: Software Engineer
---

I write software and occasionally write about it.
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    if target_dir.join(CONFIG_FILE).exists() {
        bail!("{:?} already contains a {}", target_dir, CONFIG_FILE);
    }

    fs::create_dir_all(target_dir.join("data/blog"))?;
    fs::create_dir_all(target_dir.join("data/authors"))?;
    fs::create_dir_all(target_dir.join("static/images"))?;

    fs::write(target_dir.join(CONFIG_FILE), CONFIG_TEMPLATE)?;
    fs::write(target_dir.join("data/authors/default.md"), AUTHOR_TEMPLATE)?;

    let sample_post = format!(
        r#"---
title: Hello World
date: {}
tags: [welcome]
draft: false
summary: The first post on this site.
---

Welcome! Create a new post with `homepage-rs new "My New Post"` and rebuild
with `homepage-rs generate`.
"#,
        chrono::Local::now().format("%Y-%m-%d")
    );
    fs::write(target_dir.join("data/blog/hello-world.md"), sample_post)?;

    tracing::debug!("Scaffolded site in {:?}", target_dir);

    Ok(())
}
