use crate::shared::query::QueryKey;
use contracts::shared::list_query::{FilterSet, ListQuery};
use contracts::shared::pagination::PaginationState;

/// Page, page size, filters and search text of one list screen.
///
/// Every setter that changes what the list contains sends the screen back to
/// page 1 in the same call, so the next query never carries a page number
/// from the previous filter context.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    page: u64,
    limit: u64,
    filters: FilterSet,
    search: String,
}

impl ListState {
    pub fn new(limit: u64) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            filters: FilterSet::new(),
            search: String::new(),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filter(&self, key: &str) -> &str {
        self.filters.get(key)
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count() + usize::from(!self.search.trim().is_empty())
    }

    /// Filters are left untouched.
    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    pub fn set_filter(&mut self, key: &str, value: &str) {
        if self.filters.set(key, value) {
            self.page = 1;
        }
    }

    pub fn set_search(&mut self, search: &str) {
        if self.search.trim() != search.trim() {
            self.page = 1;
        }
        self.search = search.to_string();
    }

    pub fn set_limit(&mut self, limit: u64) {
        let limit = limit.max(1);
        if limit != self.limit {
            self.limit = limit;
            self.page = 1;
        }
    }

    pub fn reset_filters(&mut self) {
        let had_search = !self.search.trim().is_empty();
        self.search.clear();
        if self.filters.clear() || had_search {
            self.page = 1;
        }
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            limit: self.limit,
            filters: self.filters.clone(),
            search: self.search.trim().to_string(),
        }
    }

    /// Pull the page back inside the server's range, e.g. after the last row
    /// of the last page was deleted. Returns whether the page moved.
    pub fn apply_server_page(&mut self, pagination: &PaginationState) -> bool {
        let last = pagination.total_pages().max(1);
        if self.page > last {
            self.page = last;
            true
        } else {
            false
        }
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Remembers which query the screen is currently showing.
///
/// Every query gets a ticket. Only the response to the latest ticket is
/// applied to the screen, even when a refetch repeats the same key.
#[derive(Clone, Debug, Default)]
pub struct ListController {
    active: Option<QueryKey>,
    ticket: u64,
}

impl ListController {
    pub fn begin(&mut self, key: QueryKey) -> u64 {
        self.active = Some(key);
        self.ticket += 1;
        self.ticket
    }

    pub fn accepts(&self, ticket: u64) -> bool {
        self.active.is_some() && self.ticket == ticket
    }

    pub fn active(&self) -> Option<&QueryKey> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityKind;

    fn on_page(page: u64) -> ListState {
        let mut state = ListState::new(10);
        state.set_page(page);
        state
    }

    #[test]
    fn test_every_change_resets_page() {
        let mut state = on_page(3);
        state.set_filter("status", "pending");
        assert_eq!(state.page(), 1);

        let mut state = on_page(3);
        state.set_search("exam");
        assert_eq!(state.page(), 1);

        let mut state = on_page(3);
        state.set_limit(20);
        assert_eq!(state.page(), 1);

        let mut state = on_page(3);
        state.set_filter("category", "sports");
        state.set_page(2);
        state.reset_filters();
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_sequences_of_changes_always_query_first_page() {
        let changes: Vec<fn(&mut ListState)> = vec![
            |s| s.set_filter("status", "draft"),
            |s| s.set_search("bus"),
            |s| s.set_limit(50),
            |s| s.set_filter("status", "all"),
            |s| s.set_search(""),
        ];
        let mut state = ListState::new(10);
        for change in changes {
            state.set_page(4);
            change(&mut state);
            assert_eq!(state.query().page, 1);
        }
    }

    #[test]
    fn test_no_op_change_keeps_page() {
        let mut state = on_page(3);
        state.set_filter("status", "all");
        state.set_limit(10);
        state.set_search("  ");
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn test_set_page_keeps_filters() {
        let mut state = ListState::new(10);
        state.set_filter("class", "form2");
        state.set_page(2);
        assert_eq!(state.filter("class"), "form2");
        assert_eq!(state.query().to_query_string(), "page=2&limit=10&class=form2");
    }

    #[test]
    fn test_apply_server_page_clamps() {
        let mut state = on_page(4);
        assert!(state.apply_server_page(&PaginationState::new(4, 10, 30)));
        assert_eq!(state.page(), 3);
        assert!(!state.apply_server_page(&PaginationState::new(3, 10, 30)));

        let mut state = on_page(2);
        state.apply_server_page(&PaginationState::new(2, 10, 0));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_superseded_key_is_not_accepted() {
        let mut controller = ListController::default();
        let first = controller.begin(QueryKey::new(EntityKind::Students, &on_page(3).query()));

        let mut state = on_page(3);
        state.set_filter("class", "form2");
        let key = QueryKey::new(EntityKind::Students, &state.query());
        let second = controller.begin(key.clone());

        assert!(!controller.accepts(first));
        assert!(controller.accepts(second));
        assert_eq!(controller.active(), Some(&key));
    }

    #[test]
    fn test_refetch_of_same_key_supersedes_earlier_response() {
        let mut controller = ListController::default();
        let key = QueryKey::new(EntityKind::News, &ListState::new(10).query());
        let before_write = controller.begin(key.clone());
        let after_write = controller.begin(key);

        assert!(!controller.accepts(before_write));
        assert!(controller.accepts(after_write));
    }
}
