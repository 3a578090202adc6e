use super::cache::{QueryCache, QueryKey};
use crate::shared::api::{ApiError, ApiRequest, Transport};
use chrono::{DateTime, Duration, Utc};
use contracts::domain::common::{EntityKind, StatusChange};
use contracts::shared::api::{normalize_list, normalize_mutation, normalize_object, ListPage};
use contracts::shared::list_query::ListQuery;
use contracts::shared::settings::SiteSettings;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const SETTINGS_PATH: &str = "/api/settings";

pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Cached reads and invalidating writes against the school API.
///
/// Cheap to clone; clones share the transport and the cache. Writes are
/// pessimistic: nothing local changes until the server confirms, and only a
/// confirmed write invalidates the cached pages of its entity.
#[derive(Clone)]
pub struct QueryClient {
    transport: Arc<dyn Transport + Send + Sync>,
    cache: Arc<Mutex<QueryCache>>,
    clock: Clock,
}

impl QueryClient {
    pub fn new(transport: Arc<dyn Transport + Send + Sync>) -> Self {
        Self {
            transport,
            cache: Arc::new(Mutex::new(QueryCache::new(Duration::minutes(5)))),
            clock: Arc::new(Utc::now),
        }
    }

    pub fn with_stale_after(self, stale_after: Duration) -> Self {
        Self {
            cache: Arc::new(Mutex::new(QueryCache::new(stale_after))),
            ..self
        }
    }

    pub fn with_clock(self, clock: Clock) -> Self {
        Self { clock, ..self }
    }

    fn cache(&self) -> MutexGuard<'_, QueryCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn cached_pages(&self) -> usize {
        self.cache().len()
    }

    /// Drop every cached page of `kind`; the next read goes to the server.
    pub fn invalidate(&self, kind: EntityKind) {
        self.cache().invalidate_entity(kind);
    }

    /// One raw page, from cache when fresh.
    pub async fn fetch_page(&self, key: &QueryKey) -> Result<ListPage<Value>, ApiError> {
        let now = (self.clock)();
        if let Some(page) = self.cache().get_fresh(key, now) {
            log::debug!("query cache hit: {}", key.path());
            return Ok(page);
        }

        let generation = self.cache().generation(key.entity);
        let body = self
            .transport
            .send(ApiRequest::get(key.path()))
            .await?
            .into_success()?;
        let page = normalize_list(&body, key.entity.list_field(), &key.query)?;

        // A newer fetch under the same key overwrites this one. A write that
        // landed while this one was in flight keeps it out of the cache.
        if !self
            .cache()
            .insert(key.clone(), page.clone(), (self.clock)(), generation)
        {
            log::debug!("not caching {}: invalidated while in flight", key.path());
        }
        Ok(page)
    }

    /// Total record count of `kind`, read from a one-row page.
    pub async fn fetch_total(&self, kind: EntityKind) -> Result<u64, ApiError> {
        let key = QueryKey::new(kind, &ListQuery::new(1, 1));
        let page = self.fetch_page(&key).await?;
        Ok(page.pagination.total())
    }

    pub async fn create(&self, kind: EntityKind, payload: Value) -> Result<Option<Value>, ApiError> {
        self.write(kind, ApiRequest::post(kind.endpoint(), payload)).await
    }

    pub async fn update(&self, kind: EntityKind, id: &str, payload: Value) -> Result<Option<Value>, ApiError> {
        self.write(kind, ApiRequest::put(kind.item_path(id), payload)).await
    }

    pub async fn delete(&self, kind: EntityKind, id: &str) -> Result<Option<Value>, ApiError> {
        self.write(kind, ApiRequest::delete(kind.item_path(id))).await
    }

    pub async fn change_status(
        &self,
        kind: EntityKind,
        id: &str,
        change: &StatusChange,
    ) -> Result<Option<Value>, ApiError> {
        self.write(kind, ApiRequest::put(kind.status_path(id), change.to_body(kind)))
            .await
    }

    async fn write(&self, kind: EntityKind, request: ApiRequest) -> Result<Option<Value>, ApiError> {
        let label = format!("{} {}", request.method.as_str(), request.path);
        let outcome = async {
            let body = self.transport.send(request).await?.into_success()?;
            Ok::<_, ApiError>(normalize_mutation(&body)?)
        }
        .await;

        match &outcome {
            Ok(_) => {
                self.cache().invalidate_entity(kind);
            }
            Err(e) => log::warn!("{} failed: {}", label, e),
        }
        outcome
    }

    pub async fn get_settings(&self) -> Result<SiteSettings, ApiError> {
        let body = self
            .transport
            .send(ApiRequest::get(SETTINGS_PATH))
            .await?
            .into_success()?;
        Ok(normalize_object(&body)?)
    }

    /// Save settings; returns what the server stored, or `settings` when the
    /// response carries no data.
    pub async fn put_settings(&self, settings: &SiteSettings) -> Result<SiteSettings, ApiError> {
        let payload =
            serde_json::to_value(settings).map_err(|e| ApiError::Decode(e.to_string()))?;
        let body = self
            .transport
            .send(ApiRequest::put(SETTINGS_PATH, payload))
            .await?
            .into_success()?;
        match normalize_mutation(&body)? {
            Some(data) => serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string())),
            None => Ok(settings.clone()),
        }
    }
}
