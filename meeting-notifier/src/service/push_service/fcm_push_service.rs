use super::{Error, PushService};
use crate::service::notifier_service::NotificationPayload;
use async_trait::async_trait;
use fcm_client::{FcmClient, Notification};

pub struct FcmPushService {
    fcm_client: FcmClient,
}

impl FcmPushService {
    pub fn new(fcm_client: FcmClient) -> Self {
        Self { fcm_client }
    }
}

#[async_trait]
impl PushService for FcmPushService {
    async fn send(&self, token: &str, payload: &NotificationPayload) -> Result<(), Error> {
        let notification = Notification::from(payload);
        let name = self.fcm_client.send(token, &notification).await?;
        tracing::trace!(name, "notification pushed");

        Ok(())
    }
}

impl From<&NotificationPayload> for Notification {
    fn from(value: &NotificationPayload) -> Self {
        Self {
            title: value.title.clone(),
            body: value.body.clone(),
        }
    }
}
