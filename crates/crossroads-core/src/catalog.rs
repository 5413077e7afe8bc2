//! Flattening the catalog document into resolvable items.
//!
//! The document is the parsed form of the user's catalog file:
//!
//! ```yaml
//! title: Crossroads
//! sections:
//!   - name: Code
//!     items:
//!       - title: GitHub
//!         url: https://github.com
//!         keywords: gh, github
//!         searchUrl: https://github.com/search?q=%s
//! ```
//!
//! Nothing here fails. A missing `sections` list, a section without
//! `items`, or a field of the wrong type simply contributes nothing, so a
//! half-written catalog still resolves whatever it can.

use serde_json::Value;

use crate::normalize::normalize;

/// A single bookmark with its pre-resolved aliases and search template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    /// Display title.
    pub title: String,
    /// Plain destination. Empty when the entry has no `url`.
    pub url: String,
    /// Free text shown under the title; searched by the matcher.
    pub description: Option<String>,
    /// Normalized, de-duplicated aliases in first-seen order.
    pub keywords: Vec<String>,
    /// Search template containing `%s` for the user's remainder text.
    pub search_url: Option<String>,
    /// Name of the section the item was listed under.
    pub section: Option<String>,
    /// Icon reference for the dashboard. Not used for resolution.
    pub icon: Option<String>,
}

impl Item {
    /// Lower-cased text the multi-field matcher searches in: title, url,
    /// description and aliases, space-joined, skipping empty parts.
    pub fn search_text(&self) -> String {
        let keywords = self.keywords.join(" ");
        [
            self.title.as_str(),
            self.url.as_str(),
            self.description.as_deref().unwrap_or(""),
            keywords.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }

    /// True when the item carries the given (already normalized) alias.
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }
}

/// Flatten every section's items into one sequence, in catalog order.
pub fn flatten(document: &Value) -> Vec<Item> {
    let Some(sections) = document.get("sections").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for section in sections {
        let section_name = text_field(section, "name");
        let Some(entries) = section.get("items").and_then(Value::as_array) else {
            continue;
        };
        for entry in entries {
            if !entry.is_object() {
                continue;
            }
            items.push(item_from_entry(entry, section_name.clone()));
        }
    }
    items
}

fn item_from_entry(entry: &Value, section: Option<String>) -> Item {
    // A null `keyword` or an empty `searchUrl` defers to the other spelling.
    let raw_keywords = entry
        .get("keyword")
        .filter(|v| !v.is_null())
        .or_else(|| entry.get("keywords"));
    let search_url = text_field(entry, "searchUrl")
        .filter(|s| !s.is_empty())
        .or_else(|| text_field(entry, "search_url"));

    Item {
        title: text_field(entry, "title").unwrap_or_default(),
        url: text_field(entry, "url").unwrap_or_default(),
        description: text_field(entry, "description"),
        keywords: raw_keywords.map(parse_keywords).unwrap_or_default(),
        search_url,
        section,
        icon: text_field(entry, "icon"),
    }
}

/// Normalize a raw keyword field into a set of aliases.
///
/// A string is split on commas and whitespace; a list contributes one alias
/// per non-blank entry. Anything else yields no aliases.
pub fn parse_keywords(raw: &Value) -> Vec<String> {
    let candidates: Vec<String> = match raw {
        Value::String(s) => s
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(normalize)
            .collect(),
        Value::Array(entries) => entries
            .iter()
            .filter_map(scalar_text)
            .map(|s| normalize(&s))
            .collect(),
        _ => Vec::new(),
    };

    let mut keywords: Vec<String> = Vec::with_capacity(candidates.len());
    for keyword in candidates {
        if !keyword.is_empty() && !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
    }
    keywords
}

/// Read a scalar field as text. Numbers and booleans use their textual
/// form; missing, null, and structured values are absent.
fn text_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(scalar_text)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
