use super::{into_result, MeetingHandler};
use crate::{
    dto::input::Meeting,
    error::Error,
    service::notifier_service::{DeliverySummary, NotificationPayload, NotifierService},
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct MeetingCreatedHandler {
    notifier_service: Arc<dyn NotifierService>,
}

impl MeetingCreatedHandler {
    pub fn new(notifier_service: Arc<dyn NotifierService>) -> Self {
        Self { notifier_service }
    }
}

#[async_trait]
impl MeetingHandler for MeetingCreatedHandler {
    ///
    /// Notifies every invited user about new meeting
    ///
    async fn handle(&self, meeting: Meeting) -> Result<DeliverySummary, Error> {
        tracing::info!(id = meeting.id, title = meeting.title, "meeting added");

        if meeting.user_ids.is_empty() {
            tracing::debug!("meeting has no users");
            return Ok(DeliverySummary::default());
        }

        let payload = NotificationPayload::meeting_added(&meeting.title);
        let summary = self
            .notifier_service
            .notify(&meeting.user_ids, &payload)
            .await;

        into_result(summary)
    }
}
