use super::{DeliverySummary, NotificationPayload};
use async_trait::async_trait;

#[async_trait]
pub trait NotifierService: Send + Sync {
    ///
    /// Sends payload to every user that has FCM token.
    /// Users are notified concurrently and independently,
    /// function returns when every user was handled.
    ///
    async fn notify(&self, user_ids: &[String], payload: &NotificationPayload)
        -> DeliverySummary;
}
