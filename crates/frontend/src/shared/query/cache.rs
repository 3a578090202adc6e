use chrono::{DateTime, Duration, Utc};
use contracts::domain::common::EntityKind;
use contracts::shared::api::ListPage;
use contracts::shared::list_query::ListQuery;
use serde_json::Value;
use std::collections::HashMap;

/// Identity of a cached list: record type plus every query parameter.
///
/// Search is stored trimmed so `"exam "` and `"exam"` share an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub entity: EntityKind,
    pub query: ListQuery,
}

impl QueryKey {
    pub fn new(entity: EntityKind, query: &ListQuery) -> Self {
        let mut query = query.clone();
        query.search = query.search.trim().to_string();
        Self { entity, query }
    }

    pub fn path(&self) -> String {
        self.query.to_path(self.entity.endpoint())
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    page: ListPage<Value>,
    fetched_at: DateTime<Utc>,
}

///
/// QueryCache
///
/// Raw list pages keyed by [`QueryKey`]. Entries older than `stale_after`
/// are ignored by [`QueryCache::get_fresh`] and refetched.
///
/// Every invalidation bumps the entity's generation. A page fetched under an
/// older generation is never stored.
///

#[derive(Debug)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
    generations: HashMap<EntityKind, u64>,
    stale_after: Duration,
}

impl QueryCache {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            generations: HashMap::new(),
            stale_after,
        }
    }

    pub fn get_fresh(&self, key: &QueryKey, now: DateTime<Utc>) -> Option<ListPage<Value>> {
        self.entries
            .get(key)
            .filter(|entry| now - entry.fetched_at < self.stale_after)
            .map(|entry| entry.page.clone())
    }

    pub fn generation(&self, entity: EntityKind) -> u64 {
        self.generations.get(&entity).copied().unwrap_or(0)
    }

    /// Store `page` unless `entity` was invalidated after `generation` was
    /// read. Returns whether the page was stored.
    pub fn insert(
        &mut self,
        key: QueryKey,
        page: ListPage<Value>,
        now: DateTime<Utc>,
        generation: u64,
    ) -> bool {
        if self.generation(key.entity) != generation {
            return false;
        }
        self.entries.insert(
            key,
            CacheEntry {
                page,
                fetched_at: now,
            },
        );
        true
    }

    /// Drop every page of `entity`. Returns how many entries went away.
    pub fn invalidate_entity(&mut self, entity: EntityKind) -> usize {
        *self.generations.entry(entity).or_insert(0) += 1;
        let before = self.entries.len();
        self.entries.retain(|key, _| key.entity != entity);
        let removed = before - self.entries.len();
        if removed > 0 {
            log::debug!("query cache: invalidated {} page(s) of {}", removed, entity);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn page(title: &str) -> ListPage<Value> {
        let mut page = ListPage::empty(&ListQuery::default());
        page.items.push(json!({"id": "1", "title": title}));
        page
    }

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, minute, 0).unwrap()
    }

    #[test]
    fn test_entry_goes_stale() {
        let mut cache = QueryCache::new(Duration::minutes(5));
        let key = QueryKey::new(EntityKind::News, &ListQuery::default());
        cache.insert(key.clone(), page("Sports day"), at(0), 0);

        assert!(cache.get_fresh(&key, at(4)).is_some());
        assert!(cache.get_fresh(&key, at(5)).is_none());
    }

    #[test]
    fn test_search_is_trimmed_in_key() {
        let a = QueryKey::new(EntityKind::News, &ListQuery::default().with_search("exam "));
        let b = QueryKey::new(EntityKind::News, &ListQuery::default().with_search("exam"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalidate_only_touches_entity() {
        let mut cache = QueryCache::new(Duration::minutes(5));
        let first = ListQuery::default();
        let second = ListQuery::new(2, 10);
        cache.insert(QueryKey::new(EntityKind::News, &first), page("a"), at(0), 0);
        cache.insert(QueryKey::new(EntityKind::News, &second), page("b"), at(0), 0);
        cache.insert(QueryKey::new(EntityKind::Students, &first), page("c"), at(0), 0);

        assert_eq!(cache.invalidate_entity(EntityKind::News), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.invalidate_entity(EntityKind::News), 0);
    }

    #[test]
    fn test_page_read_before_invalidation_is_not_stored() {
        let mut cache = QueryCache::new(Duration::minutes(5));
        let key = QueryKey::new(EntityKind::News, &ListQuery::default());
        let generation = cache.generation(EntityKind::News);

        // Nothing cached yet; the entity still moves to a new generation.
        assert_eq!(cache.invalidate_entity(EntityKind::News), 0);
        assert!(!cache.insert(key.clone(), page("before the write"), at(0), generation));
        assert!(cache.get_fresh(&key, at(1)).is_none());

        let generation = cache.generation(EntityKind::News);
        assert!(cache.insert(key.clone(), page("after the write"), at(1), generation));
        assert_eq!(cache.get_fresh(&key, at(2)).unwrap().items[0]["title"], "after the write");

        // Other entities keep their generation.
        let students = QueryKey::new(EntityKind::Students, &ListQuery::default());
        assert!(cache.insert(students, page("c"), at(1), 0));
    }
}
