use serde::{Deserialize, Serialize};

/// Pagination block as the server sends it.
///
/// Every field is optional: several endpoints omit the derived values, and
/// the legacy list endpoints omit the block entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub has_next_page: Option<bool>,
    #[serde(default)]
    pub has_prev_page: Option<bool>,
}

/// Canonical pagination state used by the client.
///
/// Only `page`, `limit` and `total` are stored; the page count and the
/// next/prev flags are always derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    page: u64,
    limit: u64,
    total: u64,
}

impl PaginationState {
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            total,
        }
    }

    /// Canonicalize a server block, falling back to the requested page/limit
    /// and to `fallback_total` for whatever the server left out.
    pub fn from_meta(meta: &PaginationMeta, page: u64, limit: u64, fallback_total: u64) -> Self {
        Self::new(
            meta.page.unwrap_or(page),
            meta.limit.unwrap_or(limit),
            meta.total.unwrap_or(fallback_total),
        )
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// `ceil(total / limit)`
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.limit)
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(1, 10, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PaginationState::new(1, 10, 0).total_pages(), 0);
        assert_eq!(PaginationState::new(1, 10, 10).total_pages(), 1);
        assert_eq!(PaginationState::new(1, 10, 11).total_pages(), 2);
        assert_eq!(PaginationState::new(1, 3, 7).total_pages(), 3);
    }

    #[test]
    fn test_flags_follow_page() {
        let first = PaginationState::new(1, 10, 25);
        assert!(first.has_next_page());
        assert!(!first.has_prev_page());

        let last = PaginationState::new(3, 10, 25);
        assert!(!last.has_next_page());
        assert!(last.has_prev_page());
    }

    #[test]
    fn test_server_derived_values_are_ignored() {
        let meta = PaginationMeta {
            page: Some(2),
            limit: Some(10),
            total: Some(35),
            total_pages: Some(99),
            has_next_page: Some(false),
            has_prev_page: Some(false),
        };
        let state = PaginationState::from_meta(&meta, 1, 10, 0);
        assert_eq!(state.total_pages(), 4);
        assert!(state.has_next_page());
        assert!(state.has_prev_page());
    }

    #[test]
    fn test_missing_fields_fall_back_to_request() {
        let state = PaginationState::from_meta(&PaginationMeta::default(), 2, 20, 5);
        assert_eq!(state.page(), 2);
        assert_eq!(state.limit(), 20);
        assert_eq!(state.total(), 5);
    }

    #[test]
    fn test_zero_limit_is_clamped() {
        let state = PaginationState::new(0, 0, 4);
        assert_eq!(state.page(), 1);
        assert_eq!(state.limit(), 1);
        assert_eq!(state.total_pages(), 4);
    }
}
