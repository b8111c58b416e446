//! Create a new post

use anyhow::{bail, Result};
use std::fs;
use std::path::PathBuf;

use crate::Site;

/// Create a new post in the blog category and return its path
pub fn create_post(site: &Site, title: &str, path: Option<&str>) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let target_dir = site.content_dir.join(&site.config.blog_category);
    fs::create_dir_all(&target_dir)?;

    let name = match path {
        Some(p) => p.trim_end_matches(".md").to_string(),
        None => slug::slugify(title),
    };
    if name.is_empty() {
        bail!("Cannot derive a file name from title {:?}", title);
    }

    let file_path = target_dir.join(format!("{}.md", name));
    if file_path.exists() {
        bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        r#"---
title: {}
date: {}
tags: []
draft: false
summary: ''
---
"#,
        yaml_quote(title),
        now.format("%Y-%m-%d")
    );

    fs::write(&file_path, content)?;

    Ok(file_path)
}

/// Quote a scalar so titles containing `:` or `#` stay valid YAML
fn yaml_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
