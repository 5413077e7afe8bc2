//! Search-URL building.

use crate::catalog::Item;

/// Placeholder in a search template that stands for the user's remainder.
pub const PLACEHOLDER: &str = "%s";

/// Build the destination for `item` given the text after its keyword.
///
/// With a template and a non-empty remainder, every `%s` in the template is
/// replaced by the percent-encoded remainder. Otherwise the plain `url` is
/// returned, which is empty when the item has none.
pub fn build_url(item: &Item, remainder: &str) -> String {
    let remainder = remainder.trim();
    match item.search_url.as_deref() {
        Some(template) if !template.is_empty() && !remainder.is_empty() => {
            template.replace(PLACEHOLDER, &urlencoding::encode(remainder))
        }
        _ => item.url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github() -> Item {
        Item {
            title: "GitHub".to_string(),
            url: "https://github.com".to_string(),
            search_url: Some("https://github.com/search?q=%s".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_substitutes_remainder() {
        assert_eq!(
            build_url(&github(), "widgets"),
            "https://github.com/search?q=widgets"
        );
    }

    #[test]
    fn test_encodes_reserved_characters() {
        assert_eq!(
            build_url(&github(), "a b&c=d/e?"),
            "https://github.com/search?q=a%20b%26c%3Dd%2Fe%3F"
        );
    }

    #[test]
    fn test_encodes_non_ascii() {
        assert_eq!(
            build_url(&github(), "café"),
            "https://github.com/search?q=caf%C3%A9"
        );
    }

    #[test]
    fn test_empty_remainder_uses_url() {
        assert_eq!(build_url(&github(), ""), "https://github.com");
        assert_eq!(build_url(&github(), "   "), "https://github.com");
    }

    #[test]
    fn test_no_template_uses_url() {
        let item = Item {
            url: "https://example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(build_url(&item, "anything"), "https://example.com");
    }

    #[test]
    fn test_template_without_placeholder_is_literal() {
        let item = Item {
            search_url: Some("https://example.com/search".to_string()),
            ..Default::default()
        };
        assert_eq!(build_url(&item, "q"), "https://example.com/search");
    }

    #[test]
    fn test_every_placeholder_replaced() {
        let item = Item {
            search_url: Some("https://x/?q=%s&alt=%s".to_string()),
            ..Default::default()
        };
        assert_eq!(build_url(&item, "rust"), "https://x/?q=rust&alt=rust");
    }

    #[test]
    fn test_nothing_usable_is_empty() {
        let item = Item {
            search_url: Some("https://x/?q=%s".to_string()),
            ..Default::default()
        };
        assert_eq!(build_url(&item, ""), "");
    }
}
