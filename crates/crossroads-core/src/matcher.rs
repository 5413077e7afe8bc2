//! Multi-field matching.
//!
//! An item matches a query when every query token occurs somewhere in the
//! item's [search text](crate::catalog::Item::search_text). Tokens are
//! matched as substrings, in any order, with no ranking: the caller only
//! cares whether the match set has exactly one member.

use crate::catalog::Item;
use crate::normalize::tokens;

/// Return every item containing all tokens of `query`, in catalog order.
pub fn match_all<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    let tokens = tokens(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    items
        .iter()
        .filter(|item| {
            let haystack = item.search_text();
            tokens.iter().all(|token| haystack.contains(token.as_str()))
        })
        .collect()
}
