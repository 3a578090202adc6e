use crate::shared::api::ApiError;
use crate::shared::i18n::{tr, trf, Msg};
use crate::shared::query::QueryClient;
use contracts::domain::common::{EntityKind, StatusChange};
use contracts::shared::language::Language;
use serde_json::Value;

/// One write issued from a management screen.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
    Create(Value),
    Update { id: String, payload: Value },
    Delete { id: String },
    Status { id: String, change: StatusChange },
}

impl WriteOp {
    pub async fn run(&self, client: &QueryClient, kind: EntityKind) -> Result<Option<Value>, ApiError> {
        match self {
            WriteOp::Create(payload) => client.create(kind, payload.clone()).await,
            WriteOp::Update { id, payload } => client.update(kind, id, payload.clone()).await,
            WriteOp::Delete { id } => client.delete(kind, id).await,
            WriteOp::Status { id, change } => client.change_status(kind, id, change).await,
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, WriteOp::Create(_))
    }

    pub fn success_message(&self, lang: Language, item: &str) -> String {
        match self {
            WriteOp::Create(_) => trf(lang, Msg::Created, &[item]),
            WriteOp::Update { .. } => trf(lang, Msg::Updated, &[item]),
            WriteOp::Delete { .. } => trf(lang, Msg::Deleted, &[item]),
            WriteOp::Status { .. } => tr(lang, Msg::StatusUpdated).to_string(),
        }
    }

    /// Toast title and description of a failed write. The description is the
    /// server's message when it sent one.
    pub fn failure_message(&self, lang: Language, item: &str, error: &ApiError) -> (String, Option<String>) {
        let msg = match self {
            WriteOp::Create(_) => Msg::CreateFailed,
            WriteOp::Update { .. } => Msg::UpdateFailed,
            WriteOp::Delete { .. } => Msg::DeleteFailed,
            WriteOp::Status { .. } => Msg::StatusFailed,
        };
        let title = trf(lang, msg, &[&item.to_lowercase()]);
        let description = error.server_message().map(str::to_string).or_else(|| match error {
            ApiError::Network(detail) => Some(detail.clone()),
            _ => None,
        });
        (title, description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::fake::FakeApi;
    use crate::shared::api::{ApiResponse, Method};
    use futures::executor::block_on;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_status_op_sends_entity_keys() {
        let api = Arc::new(FakeApi::new());
        api.seed(
            EntityKind::Contacts,
            vec![json!({"id": "c-1", "name": "Awa", "status": "new"})],
        );
        let client = QueryClient::new(api.clone());
        let op = WriteOp::Status {
            id: "c-1".to_string(),
            change: StatusChange::new("responded")
                .with_note("Called back")
                .with_actor(Some("admin-7".to_string())),
        };

        block_on(op.run(&client, EntityKind::Contacts)).unwrap();

        let sent = api.requests().pop().unwrap();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.path, "/api/contacts/c-1/status");
        assert_eq!(
            sent.body,
            Some(json!({"status": "responded", "response": "Called back", "responderId": "admin-7"}))
        );
        assert_eq!(api.rows(EntityKind::Contacts)[0]["status"], "responded");
    }

    #[test]
    fn test_failed_delete_reports_server_message() {
        let api = Arc::new(FakeApi::new());
        api.respond_next(
            Method::Delete,
            ApiResponse::new(409, json!({"success": false, "message": "Booking is confirmed"})),
        );
        let client = QueryClient::new(api.clone());
        let op = WriteOp::Delete { id: "b-1".to_string() };

        let err = block_on(op.run(&client, EntityKind::Bookings)).unwrap_err();
        let (title, description) = op.failure_message(Language::En, "Booking", &err);
        assert_eq!(title, "Failed to delete booking");
        assert_eq!(description.as_deref(), Some("Booking is confirmed"));
    }

    #[test]
    fn test_messages_follow_language() {
        let op = WriteOp::Create(json!({"name": "Library"}));
        assert!(op.is_create());
        assert_eq!(op.success_message(Language::En, "Facility"), "Facility created successfully");
        assert_eq!(op.success_message(Language::Fr, "Installation"), "Installation : création réussie");
        let delete = WriteOp::Delete { id: "n-1".to_string() };
        assert_eq!(delete.success_message(Language::Fr, "Actualité"), "Actualité : suppression réussie");

        let status = WriteOp::Status {
            id: "a-1".to_string(),
            change: StatusChange::new("accepted"),
        };
        assert_eq!(status.success_message(Language::Fr, "Candidature"), "Statut mis à jour");
        let (title, description) =
            status.failure_message(Language::En, "Application", &ApiError::Network("offline".to_string()));
        assert_eq!(title, "Failed to update the status of application");
        assert_eq!(description.as_deref(), Some("offline"));
    }
}
