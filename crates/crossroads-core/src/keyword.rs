//! Alias lookup.

use crate::catalog::Item;
use crate::normalize::normalize;

/// Find the one item whose aliases contain `token`.
///
/// Returns `None` when no item carries the alias and also when several do:
/// a shared alias is treated as unresolved so the caller can fall back to
/// the multi-field matcher.
pub fn resolve_keyword<'a>(items: &'a [Item], token: &str) -> Option<&'a Item> {
    let target = normalize(token);
    if target.is_empty() {
        return None;
    }

    let mut matches = items.iter().filter(|item| item.has_keyword(&target));
    let first = matches.next()?;
    match matches.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// Aliases carried by more than one item, with the titles that share them.
///
/// [`resolve_keyword`] never resolves these, so they are worth reporting to
/// whoever maintains the catalog.
pub fn collisions(items: &[Item]) -> Vec<(String, Vec<String>)> {
    let mut seen: Vec<(String, Vec<String>)> = Vec::new();
    for item in items {
        for keyword in &item.keywords {
            match seen.iter_mut().find(|(k, _)| k == keyword) {
                Some((_, titles)) => titles.push(item.title.clone()),
                None => seen.push((keyword.clone(), vec![item.title.clone()])),
            }
        }
    }
    seen.retain(|(_, titles)| titles.len() > 1);
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, keywords: &[&str]) -> Item {
        Item {
            title: title.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_unique_match() {
        let items = vec![item("GitHub", &["gh"]), item("GitLab", &["gl"])];
        assert_eq!(resolve_keyword(&items, "gh").map(|i| i.title.as_str()), Some("GitHub"));
    }

    #[test]
    fn test_token_is_normalized() {
        let items = vec![item("GitHub", &["gh"])];
        assert!(resolve_keyword(&items, "  GH ").is_some());
    }

    #[test]
    fn test_no_match() {
        let items = vec![item("GitHub", &["gh"])];
        assert!(resolve_keyword(&items, "yt").is_none());
    }

    #[test]
    fn test_ambiguous_is_none() {
        let items = vec![item("A", &["x"]), item("B", &["x", "b"])];
        assert!(resolve_keyword(&items, "x").is_none());
        assert_eq!(resolve_keyword(&items, "b").map(|i| i.title.as_str()), Some("B"));
    }

    #[test]
    fn test_empty_token() {
        let items = vec![item("A", &["a"])];
        assert!(resolve_keyword(&items, "   ").is_none());
    }

    #[test]
    fn test_alias_is_whole_token_not_substring() {
        let items = vec![item("GitHub", &["github"])];
        assert!(resolve_keyword(&items, "git").is_none());
    }

    #[test]
    fn test_collisions() {
        let items = vec![
            item("A", &["x", "a"]),
            item("B", &["x"]),
            item("C", &["c", "a"]),
        ];
        assert_eq!(
            collisions(&items),
            vec![
                ("x".to_string(), vec!["A".to_string(), "B".to_string()]),
                ("a".to_string(), vec!["A".to_string(), "C".to_string()]),
            ]
        );
    }

    #[test]
    fn test_no_collisions() {
        let items = vec![item("A", &["a"]), item("B", &["b"])];
        assert!(collisions(&items).is_empty());
    }
}
