//! # Search Queries
//!
//! Every search box (chat sidebar, users table, chats table) uses the same
//! rule: case-insensitive substring containment, no ranking, no fuzziness.
//! An empty query matches everything.

/// Search text plus its case-folded form, folded once per edit instead of
/// once per row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    folded: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    pub fn set(&mut self, raw: impl Into<String>) {
        *self = Self::new(raw);
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// True if `field` contains the query, ignoring case.
    pub fn matches(&self, field: &str) -> bool {
        self.folded.is_empty() || field.to_lowercase().contains(&self.folded)
    }

    /// True if any of `fields` matches.
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        self.folded.is_empty() || fields.iter().any(|f| self.matches(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        let q = SearchQuery::default();
        assert!(q.matches(""));
        assert!(q.matches("anything"));
        assert!(q.matches_any(&[]));
    }

    #[test]
    fn cyrillic_matching_ignores_case() {
        let lower = SearchQuery::new("анна");
        let upper = SearchQuery::new("АННА");
        for field in ["Анна Соколова", "Книжный клуб", "anna@example.com"] {
            assert_eq!(lower.matches(field), upper.matches(field), "{field}");
        }
        assert!(lower.matches("Анна Соколова"));
        assert!(!lower.matches("anna@example.com"));
    }

    #[test]
    fn matches_any_uses_or_semantics() {
        let q = SearchQuery::new("maria");
        assert!(q.matches_any(&["Мария Иванова", "maria@example.com"]));
        assert!(!q.matches_any(&["Мария Иванова", "alex@example.com"]));
    }

    #[test]
    fn substring_not_prefix() {
        let q = SearchQuery::new("петр");
        assert!(q.matches("Александр Петров"));
    }

    #[test]
    fn set_replaces_previous_query() {
        let mut q = SearchQuery::new("abc");
        q.set("XY");
        assert_eq!(q.as_str(), "XY");
        assert!(q.matches("axyz"));
        assert!(!q.matches("abc"));
    }
}
