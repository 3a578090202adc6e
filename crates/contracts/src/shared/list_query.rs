use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Filter value meaning "no constraint". Never sent to the server.
pub const ALL: &str = "all";

/// Returns true when a filter value narrows the result set.
pub fn is_constrained(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != ALL
}

/// Active filter values of a list screen, keyed by query parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterSet(BTreeMap<String, String>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value for `key`; unset keys read as [`ALL`].
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or(ALL)
    }

    /// Store a value. Returns whether the effective value changed.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        let before = self.get(key).to_string();
        if is_constrained(value) {
            self.0.insert(key.to_string(), value.to_string());
        } else {
            self.0.remove(key);
        }
        normalize(&before) != normalize(self.get(key))
    }

    /// Drops every constraint. Returns whether anything was active.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.0.is_empty();
        self.0.clear();
        had_any
    }

    /// Constrained pairs in key order.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter(|(_, v)| is_constrained(v))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }
}

fn normalize(value: &str) -> &str {
    if is_constrained(value) {
        value
    } else {
        ALL
    }
}

/// Parameters of one paginated list request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u64,
    pub limit: u64,
    pub filters: FilterSet,
    pub search: String,
}

impl ListQuery {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            filters: FilterSet::new(),
            search: String::new(),
        }
    }

    pub fn with_filter(mut self, key: &str, value: &str) -> Self {
        self.filters.set(key, value);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// `page=..&limit=..&<active filters>&search=..`, values percent-encoded.
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![
            format!("page={}", self.page.max(1)),
            format!("limit={}", self.limit.max(1)),
        ];
        for (key, value) in self.filters.active() {
            parts.push(format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            ));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            parts.push(format!("search={}", urlencoding::encode(search)));
        }
        parts.join("&")
    }

    /// Full request path for `endpoint`, e.g. `/api/news?page=1&limit=10`.
    pub fn to_path(&self, endpoint: &str) -> String {
        format!("{}?{}", endpoint, self.to_query_string())
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel_is_never_sent() {
        let query = ListQuery::new(1, 10)
            .with_filter("status", ALL)
            .with_filter("category", "sports");
        let qs = query.to_query_string();
        assert_eq!(qs, "page=1&limit=10&category=sports");
        assert!(!qs.contains("status"));
    }

    #[test]
    fn test_empty_filter_and_blank_search_are_omitted() {
        let query = ListQuery::new(2, 20)
            .with_filter("class", "")
            .with_search("   ");
        assert_eq!(query.to_query_string(), "page=2&limit=20");
    }

    #[test]
    fn test_search_is_encoded_and_last() {
        let query = ListQuery::new(1, 10)
            .with_filter("status", "pending")
            .with_search("Marie Curie & co");
        assert_eq!(
            query.to_query_string(),
            "page=1&limit=10&status=pending&search=Marie%20Curie%20%26%20co"
        );
    }

    #[test]
    fn test_set_reports_effective_changes_only() {
        let mut filters = FilterSet::new();
        assert!(!filters.set("status", ALL));
        assert!(!filters.set("status", ""));
        assert!(filters.set("status", "active"));
        assert!(!filters.set("status", "active"));
        assert!(filters.set("status", ALL));
        assert_eq!(filters.get("status"), ALL);
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn test_to_path() {
        let query = ListQuery::new(3, 10).with_filter("class", "form2");
        assert_eq!(query.to_path("/api/students"), "/api/students?page=3&limit=10&class=form2");
    }

    #[test]
    fn test_new_clamps_page_and_limit() {
        let query = ListQuery::new(0, 0);
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 1);
    }
}
