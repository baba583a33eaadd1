use super::{into_result, MeetingHandler};
use crate::{
    dto::input::Meeting,
    error::Error,
    service::notifier_service::{DeliverySummary, NotificationPayload, NotifierService},
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct MeetingDeletedHandler {
    notifier_service: Arc<dyn NotifierService>,
}

impl MeetingDeletedHandler {
    pub fn new(notifier_service: Arc<dyn NotifierService>) -> Self {
        Self { notifier_service }
    }
}

#[async_trait]
impl MeetingHandler for MeetingDeletedHandler {
    ///
    /// Notifies every invited user that meeting was cancelled
    ///
    async fn handle(&self, meeting: Meeting) -> Result<DeliverySummary, Error> {
        tracing::info!(id = meeting.id, title = meeting.title, "meeting deleted");

        if meeting.user_ids.is_empty() {
            tracing::debug!("meeting has no users");
            return Ok(DeliverySummary::default());
        }

        let payload = NotificationPayload::meeting_cancelled(&meeting.title);
        let summary = self
            .notifier_service
            .notify(&meeting.user_ids, &payload)
            .await;

        into_result(summary)
    }
}
