//! Text normalization shared by every comparison in the engine.

/// Trim surrounding whitespace and lower-case.
///
/// `str::to_lowercase` applies the Unicode default case mapping, which does
/// not depend on the process locale.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Normalize a query and split it into whitespace-separated tokens.
pub fn tokens(s: &str) -> Vec<String> {
    normalize(s).split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  GitHub \t"), "github");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n "), "");
    }

    #[test]
    fn test_normalize_non_ascii() {
        assert_eq!(normalize("ÉCOLE"), "école");
    }

    #[test]
    fn test_tokens_collapse_whitespace() {
        assert_eq!(tokens("  Rust   Docs\tstd "), vec!["rust", "docs", "std"]);
    }

    #[test]
    fn test_tokens_whitespace_only() {
        assert!(tokens(" \t ").is_empty());
    }
}
