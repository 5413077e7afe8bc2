//! The query resolution engine.
//!
//! Resolution runs as a small state machine:
//!
//! ```text
//! Start ──empty──────────────────────────────────────▶ Unresolved
//!   │
//!   ▼
//! TryKeyword ──unique alias, non-empty url──────────▶ Resolved
//!   │ miss / ambiguous / no usable destination
//!   ▼
//! TryFuzzy ──exactly one match with a url───────────▶ Resolved
//!   │ anything else
//!   ▼
//! Unresolved
//! ```
//!
//! An explicit alias always wins over a substring match. Ambiguity at any
//! stage falls through to the next one and never picks an arbitrary item.

use serde::Serialize;
use serde_json::Value;

use crate::catalog::{flatten, Item};
use crate::keyword::resolve_keyword;
use crate::matcher::match_all;
use crate::template::build_url;

/// Which stage produced a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Keyword,
    Search,
}

/// Outcome of a single resolution call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Redirect to `url`, which is never empty.
    Redirect { url: String, via: Strategy },
    /// Show the dashboard.
    Unresolved,
}

impl Resolution {
    pub fn url(&self) -> Option<&str> {
        match self {
            Resolution::Redirect { url, .. } => Some(url),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Redirect { .. })
    }
}

#[derive(Serialize)]
struct ResolutionBody<'a> {
    resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    via: Option<Strategy>,
}

impl Serialize for Resolution {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let body = match self {
            Resolution::Redirect { url, via } => ResolutionBody {
                resolved: true,
                url: Some(url),
                via: Some(*via),
            },
            Resolution::Unresolved => ResolutionBody {
                resolved: false,
                url: None,
                via: None,
            },
        };
        body.serialize(serializer)
    }
}

enum Stage<'q> {
    Start,
    TryKeyword { keyword: &'q str, remainder: String },
    TryFuzzy,
    Done(Resolution),
}

/// Resolve `query` against an already-flattened catalog.
pub fn resolve(items: &[Item], query: &str) -> Resolution {
    let mut stage = Stage::Start;
    loop {
        stage = match stage {
            Stage::Start => start(query),
            Stage::TryKeyword { keyword, remainder } => try_keyword(items, keyword, &remainder),
            Stage::TryFuzzy => try_fuzzy(items, query),
            Stage::Done(resolution) => return resolution,
        };
    }
}

/// Flatten `document` and resolve `query` against it.
///
/// The catalog is rebuilt on every call; nothing is cached between calls.
pub fn resolve_document(document: &Value, query: &str) -> Resolution {
    resolve(&flatten(document), query)
}

fn start(query: &str) -> Stage<'_> {
    let mut words = query.split_whitespace();
    match words.next() {
        None => Stage::Done(Resolution::Unresolved),
        Some(keyword) => Stage::TryKeyword {
            keyword,
            remainder: words.collect::<Vec<_>>().join(" "),
        },
    }
}

fn try_keyword<'q>(items: &[Item], keyword: &str, remainder: &str) -> Stage<'q> {
    let Some(item) = resolve_keyword(items, keyword) else {
        return Stage::TryFuzzy;
    };
    let url = build_url(item, remainder);
    if url.is_empty() {
        return Stage::TryFuzzy;
    }
    Stage::Done(Resolution::Redirect {
        url,
        via: Strategy::Keyword,
    })
}

fn try_fuzzy<'q>(items: &[Item], query: &str) -> Stage<'q> {
    let resolution = match match_all(items, query).as_slice() {
        [only] if !only.url.is_empty() => Resolution::Redirect {
            url: only.url.clone(),
            via: Strategy::Search,
        },
        _ => Resolution::Unresolved,
    };
    Stage::Done(resolution)
}
