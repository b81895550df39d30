//! Known-issue dictionary and the autocomplete filter over it.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{CoreError, Result};

const BUILTIN_ISSUES: &[&str] = &[
    "Leaky faucet",
    "Broken TV",
    "TV remote missing",
    "No hot water",
    "Low water pressure",
    "Clogged drain",
    "Toilet running",
    "Air conditioning not cooling",
    "Air conditioning noisy",
    "Light bulb out",
    "Bedside lamp broken",
    "Safe does not open",
    "Safe battery low",
    "Headboard loose",
    "Door lock failure",
    "Door does not close",
    "Balcony door stuck",
    "Curtain rail broken",
    "Stained carpet",
    "Damaged wallpaper",
    "Mould in shower",
    "Shower head broken",
    "Minibar not cooling",
    "Wi-Fi not working",
    "Telephone not working",
    "Smoke detector beeping",
];

/// Case-insensitive substring filter over `all_issues`.
///
/// Keeps the dictionary order, returns at most `limit` entries, and returns
/// nothing for a query that is blank after trimming.
#[must_use]
pub fn suggest<S: AsRef<str>>(all_issues: &[S], query: &str, limit: usize) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    all_issues
        .iter()
        .map(AsRef::as_ref)
        .filter(|issue| issue.to_lowercase().contains(&needle))
        .take(limit)
        .map(str::to_owned)
        .collect()
}

/// Static list of known room issues offered as suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDictionary {
    issues: Vec<String>,
}

impl IssueDictionary {
    #[must_use]
    pub fn builtin() -> Self {
        Self { issues: BUILTIN_ISSUES.iter().map(|s| (*s).to_owned()).collect() }
    }

    /// Parses one issue per line; blank lines and `#` comments are skipped,
    /// repeated entries keep their first position.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut seen = HashSet::new();
        let issues = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter(|line| seen.insert(line.to_lowercase()))
            .map(str::to_owned)
            .collect();
        Self { issues }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| CoreError::Read { path: path.to_path_buf(), source })?;
        let dictionary = Self::parse(&raw);
        tracing::debug!(path = %path.display(), issues = dictionary.len(), "loaded issue dictionary");
        Ok(dictionary)
    }

    #[must_use]
    pub fn all(&self) -> &[String] {
        &self.issues
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        suggest(self.issues.as_slice(), query, limit)
    }
}

impl Default for IssueDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_SUGGESTION_LIMIT;

    const ISSUES: [&str; 3] = ["Leaky faucet", "Broken TV", "No hot water"];

    #[test]
    fn test_substring_match_case_insensitive() {
        assert_eq!(suggest(&ISSUES, "wat", 5), vec!["No hot water"]);
        assert_eq!(suggest(&ISSUES, "TV", 5), vec!["Broken TV"]);
        assert_eq!(suggest(&ISSUES, "bRoKeN", 5), vec!["Broken TV"]);
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        assert!(suggest(&ISSUES, "", 5).is_empty());
        assert!(suggest(&ISSUES, "   ", 5).is_empty());
    }

    #[test]
    fn test_preserves_dictionary_order_and_limit() {
        let issues = ["b one", "a one", "c one", "d one"];
        assert_eq!(suggest(&issues, "one", 3), vec!["b one", "a one", "c one"]);
        assert!(suggest(&issues, "one", 0).is_empty());
    }

    #[test]
    fn test_builtin_never_exceeds_default_limit() {
        let dictionary = IssueDictionary::builtin();
        let hits = dictionary.suggest("o", DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(hits.len(), DEFAULT_SUGGESTION_LIMIT);
    }

    #[test]
    fn test_parse_skips_comments_and_duplicates() {
        let dictionary = IssueDictionary::parse("# issues\nBroken TV\n\n  Leaky faucet \nbroken tv\n");
        assert_eq!(dictionary.all(), ["Broken TV", "Leaky faucet"]);
    }
}
