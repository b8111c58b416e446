//! Front-matter parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Front-matter of a blog post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostFrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub draft: bool,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Front-matter of an author document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorFrontMatter {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub occupation: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub description: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Parse front-matter from a content string into `T`.
///
/// Returns `(front_matter, remaining_content)`. Content without a front-matter
/// block yields `T::default()`; a block that is present but does not
/// deserialize is an error carrying the parser's message.
pub fn parse<T>(content: &str) -> Result<(T, &str), String>
where
    T: DeserializeOwned + Default,
{
    let content = content.trim_start_matches('\u{feff}').trim_start();

    // YAML front-matter (---)
    if content.starts_with("---") {
        return parse_yaml(content);
    }

    // JSON front-matter (;;; or a leading JSON object)
    if content.starts_with(";;;") || content.starts_with('{') {
        return parse_json(content);
    }

    Ok((T::default(), content))
}

fn parse_yaml<T>(content: &str) -> Result<(T, &str), String>
where
    T: DeserializeOwned + Default,
{
    let rest = content[3..].trim_start_matches(['\n', '\r']);

    let Some(end_pos) = rest.find("\n---") else {
        // No closing ---, treat as no front-matter
        return Ok((T::default(), content));
    };

    let yaml_content = &rest[..end_pos];
    let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

    if yaml_content.trim().is_empty() {
        return Ok((T::default(), remaining));
    }

    // A thematic break followed by prose is not front-matter
    if !has_yaml_structure(yaml_content) {
        return Ok((T::default(), content));
    }

    serde_yaml::from_str::<T>(yaml_content)
        .map(|fm| (fm, remaining))
        .map_err(|e| e.to_string())
}

/// At least one line must look like `key: value` with a plain identifier key
fn has_yaml_structure(yaml: &str) -> bool {
    yaml.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        let Some(colon_pos) = trimmed.find(':') else {
            return false;
        };
        let key = &trimmed[..colon_pos];
        let is_valid_key = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && !matches!(key, "http" | "https" | "ftp");
        let after_colon = &trimmed[colon_pos + 1..];
        is_valid_key && (after_colon.is_empty() || after_colon.starts_with(' '))
    })
}

fn parse_json<T>(content: &str) -> Result<(T, &str), String>
where
    T: DeserializeOwned + Default,
{
    // JSON front-matter wrapped in ;;;
    if let Some(rest) = content.strip_prefix(";;;") {
        let end_pos = rest
            .find(";;;")
            .ok_or_else(|| "unterminated ;;; block".to_string())?;
        let json_content = &rest[..end_pos];
        let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);
        let fm = serde_json::from_str(json_content).map_err(|e| e.to_string())?;
        return Ok((fm, remaining));
    }

    // A bare JSON object at the start
    let mut depth = 0usize;
    let mut end_pos = None;
    for (i, c) in content.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    end_pos = Some(i + 1);
                    break;
                }
            }
            _ => {}
        }
    }

    // MDX bodies may open with `{/* ... */}` or other JSX expressions
    let Some(end_pos) = end_pos else {
        return Ok((T::default(), content));
    };
    let value = match serde_json::from_str::<serde_json::Value>(&content[..end_pos]) {
        Ok(value) if value.is_object() => value,
        _ => return Ok((T::default(), content)),
    };

    let remaining = content[end_pos..].trim_start_matches(['\n', '\r']);
    let fm = serde_json::from_value(value).map_err(|e| e.to_string())?;
    Ok((fm, remaining))
}

/// Parse a front-matter date in the formats authors actually write.
///
/// Offsets are dropped: the wall-clock time written in the file is kept, so
/// `2024-01-15` always displays as January 15 regardless of the build host.
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Canonical ISO-8601 rendering used for `PostSummary::date`
pub fn iso_string(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
