//! Built-in home page templates using the Tera template engine
//!
//! Templates are embedded in the binary; the home view model is built in
//! [`home`] and handed to Tera as context.

mod home;

pub use home::{HomeRenderer, HomeView, PostView, SkillGroup};

use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers::{display_date, html_escape};

/// Template renderer with the embedded home page templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Pieces of markup are prepared by the helpers; user text is escaped
        // explicitly with the `escape_html` filter
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("home/layout.html")),
            ("macros.html", include_str!("home/macros.html")),
            ("home.html", include_str!("home/home.html")),
        ])?;

        tera.register_filter("escape_html", escape_html_filter);
        tera.register_filter("date_format", date_format_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: escape HTML special characters
fn escape_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("escape_html", "value", String, value);
    Ok(tera::Value::String(html_escape(&s)))
}

/// Tera filter: format an ISO-8601 date string
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => "MMMM D, YYYY".to_string(),
    };

    Ok(tera::Value::String(display_date(&s, &format)))
}
