use crate::shared::query::QueryClient;
use contracts::domain::common::EntityKind;
use contracts::shared::dashboard::OverviewStats;
use futures::future::join_all;

/// Record counts of every collection, fetched concurrently.
///
/// A failing collection does not fail the overview; its counter reads 0.
pub async fn load_overview(client: &QueryClient) -> OverviewStats {
    let results = join_all(EntityKind::ALL.into_iter().map(|kind| async move {
        let result = client.fetch_total(kind).await;
        if let Err(e) = &result {
            log::warn!("overview counter for {} failed: {}", kind, e);
        }
        (kind, result)
    }))
    .await;
    OverviewStats::from_settled(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::fake::FakeApi;
    use crate::shared::api::{ApiError, Method};
    use futures::executor::block_on;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_one_failure_keeps_other_counters() {
        let api = Arc::new(FakeApi::new());
        api.seed(
            EntityKind::Students,
            (0..12).map(|i| json!({"id": format!("s-{}", i)})).collect(),
        );
        api.seed(EntityKind::News, vec![json!({"id": "n-1"}), json!({"id": "n-2"})]);
        api.fail_next(Method::Get, ApiError::Network("offline".to_string()));
        let client = QueryClient::new(api.clone());

        let stats = block_on(load_overview(&client));

        // The first GET (news) was the failing one.
        assert_eq!(stats.news, 0);
        assert_eq!(stats.students, 12);
        assert_eq!(stats.teachers, 0);
        assert_eq!(api.request_count(Method::Get), EntityKind::ALL.len());
        assert!(api
            .requests()
            .iter()
            .all(|r| r.path.ends_with("?page=1&limit=1")));
    }
}
