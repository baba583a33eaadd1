use super::{DeliveryOutcome, DeliverySummary, NotificationPayload, NotifierService};
use crate::{repository::UsersRepository, service::push_service::PushService};
use async_trait::async_trait;
use futures_util::future::join_all;
use std::sync::Arc;

pub struct NotifierServiceImpl {
    users_repository: Arc<dyn UsersRepository>,
    push_service: Arc<dyn PushService>,
}

impl NotifierServiceImpl {
    pub fn new(
        users_repository: Arc<dyn UsersRepository>,
        push_service: Arc<dyn PushService>,
    ) -> Self {
        Self {
            users_repository,
            push_service,
        }
    }

    async fn notify_user(&self, user_id: &str, payload: &NotificationPayload) -> DeliveryOutcome {
        let token = match self.users_repository.find_fcm_token(user_id).await {
            Ok(Some(token)) => token,
            Ok(None) => {
                tracing::debug!(user_id, "user has no fcm token, skipping");
                return DeliveryOutcome::Skipped;
            }
            Err(err) => {
                tracing::warn!(user_id, %err, "failed to find fcm token");
                return DeliveryOutcome::Failed {
                    user_id: user_id.to_string(),
                    error: err.to_string(),
                };
            }
        };

        match self.push_service.send(&token, payload).await {
            Ok(()) => {
                tracing::debug!(user_id, "notification sent");
                DeliveryOutcome::Sent
            }
            Err(err) => {
                tracing::warn!(user_id, %err, "failed to send notification");
                DeliveryOutcome::Failed {
                    user_id: user_id.to_string(),
                    error: err.to_string(),
                }
            }
        }
    }
}

#[async_trait]
impl NotifierService for NotifierServiceImpl {
    async fn notify(
        &self,
        user_ids: &[String],
        payload: &NotificationPayload,
    ) -> DeliverySummary {
        tracing::info!(users = user_ids.len(), "notifying users");

        let outcomes = join_all(
            user_ids
                .iter()
                .map(|user_id| self.notify_user(user_id, payload)),
        )
        .await;

        let summary = outcomes.into_iter().collect::<DeliverySummary>();
        tracing::info!(
            sent = summary.sent,
            skipped = summary.skipped,
            failed = summary.failed(),
            "users notified"
        );

        summary
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        repository::{self, MockUsersRepository},
        service::push_service::{self, MockPushService},
    };

    #[tokio::test]
    async fn notify_no_users() {
        let mut users_repository = MockUsersRepository::new();
        users_repository.expect_find_fcm_token().never();
        let mut push_service = MockPushService::new();
        push_service.expect_send().never();
        let service = create_service(users_repository, push_service);

        let summary = service.notify(&[], &payload()).await;

        assert_eq!(summary, DeliverySummary::default());
    }

    #[tokio::test]
    async fn notify_one_lookup_per_user() {
        let mut users_repository = MockUsersRepository::new();
        for user_id in ["u1", "u2", "u3"] {
            users_repository
                .expect_find_fcm_token()
                .withf(move |id| id == user_id)
                .times(1)
                .returning(|_| Ok(None));
        }
        let mut push_service = MockPushService::new();
        push_service.expect_send().never();
        let service = create_service(users_repository, push_service);

        let summary = service.notify(&user_ids(&["u1", "u2", "u3"]), &payload()).await;

        assert_eq!(summary.skipped, 3);
        assert_eq!(summary.total(), 3);
    }

    #[tokio::test]
    async fn notify_sent_only_to_users_with_token() {
        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_fcm_token()
            .withf(|id| id == "u1")
            .times(1)
            .returning(|_| Ok(Some("tokA".to_string())));
        users_repository
            .expect_find_fcm_token()
            .withf(|id| id == "u2")
            .times(1)
            .returning(|_| Ok(None));
        let mut push_service = MockPushService::new();
        push_service
            .expect_send()
            .withf(|token, sent_payload| token == "tokA" && *sent_payload == payload())
            .times(1)
            .returning(|_, _| Ok(()));
        let service = create_service(users_repository, push_service);

        let summary = service.notify(&user_ids(&["u1", "u2"]), &payload()).await;

        assert_eq!(summary.sent, 1);
        assert_eq!(summary.skipped, 1);
        assert!(summary.failures.is_empty());
    }

    #[tokio::test]
    async fn notify_lookup_failure_does_not_stop_other_users() {
        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_fcm_token()
            .withf(|id| id == "u1")
            .returning(|_| {
                Err(repository::Error::Mongo(
                    mongodb::error::ErrorKind::Custom(Arc::new("any database error")).into(),
                ))
            });
        users_repository
            .expect_find_fcm_token()
            .withf(|id| id == "u2")
            .returning(|_| Ok(Some("tokB".to_string())));
        let mut push_service = MockPushService::new();
        push_service
            .expect_send()
            .withf(|token, _| token == "tokB")
            .times(1)
            .returning(|_, _| Ok(()));
        let service = create_service(users_repository, push_service);

        let summary = service.notify(&user_ids(&["u1", "u2"]), &payload()).await;

        assert_eq!(summary.sent, 1);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.failures[0].user_id, "u1");
    }

    #[tokio::test]
    async fn notify_send_failure_does_not_stop_other_users() {
        let mut users_repository = MockUsersRepository::new();
        users_repository
            .expect_find_fcm_token()
            .returning(|id| Ok(Some(format!("token-{id}"))));
        let mut push_service = MockPushService::new();
        push_service
            .expect_send()
            .withf(|token, _| token == "token-u1")
            .times(1)
            .returning(|_, _| {
                Err(push_service::Error::Fcm(fcm_client::Error::Rejected {
                    status: 404,
                    code: Some("UNREGISTERED".to_string()),
                    message: "Requested entity was not found.".to_string(),
                }))
            });
        push_service
            .expect_send()
            .withf(|token, _| token != "token-u1")
            .times(2)
            .returning(|_, _| Ok(()));
        let service = create_service(users_repository, push_service);

        let summary = service
            .notify(&user_ids(&["u1", "u2", "u3"]), &payload())
            .await;

        assert_eq!(summary.sent, 2);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.failures[0].user_id, "u1");
    }

    fn create_service(
        users_repository: MockUsersRepository,
        push_service: MockPushService,
    ) -> NotifierServiceImpl {
        NotifierServiceImpl::new(Arc::new(users_repository), Arc::new(push_service))
    }

    fn payload() -> NotificationPayload {
        NotificationPayload::meeting_added("Sync")
    }

    fn user_ids(user_ids: &[&str]) -> Vec<String> {
        user_ids.iter().map(|user_id| user_id.to_string()).collect()
    }
}
