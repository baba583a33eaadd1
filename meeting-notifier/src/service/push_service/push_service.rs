use super::Error;
use crate::service::notifier_service::NotificationPayload;
use async_trait::async_trait;

///
/// Delivers notifications to user devices
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushService: Send + Sync {
    async fn send(&self, token: &str, payload: &NotificationPayload) -> Result<(), Error>;
}
