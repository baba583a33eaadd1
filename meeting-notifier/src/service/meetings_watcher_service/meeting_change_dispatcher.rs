use crate::{
    dto::input::Meeting,
    error::Error,
    repository::{MeetingChange, MeetingChangeKind},
    service::{meeting_handlers::MeetingHandler, notifier_service::DeliverySummary},
};
use std::sync::Arc;
use uuid::Uuid;

///
/// Routes meeting changes to the handler of their kind
///
pub struct MeetingChangeDispatcher {
    created_handler: Arc<dyn MeetingHandler>,
    deleted_handler: Arc<dyn MeetingHandler>,
}

impl MeetingChangeDispatcher {
    pub fn new(
        created_handler: Arc<dyn MeetingHandler>,
        deleted_handler: Arc<dyn MeetingHandler>,
    ) -> Self {
        Self {
            created_handler,
            deleted_handler,
        }
    }

    #[tracing::instrument(
        name = "Meeting Event",
        skip_all,
        fields(
            invocation_id = %Uuid::new_v4(),
            kind = change.kind.as_ref(),
            meeting_id = %change.meeting_id,
        )
    )]
    pub async fn dispatch(&self, change: MeetingChange) {
        tracing::info!("processing event");

        match self.try_dispatch(change).await {
            Ok(summary) => tracing::info!(
                sent = summary.sent,
                skipped = summary.skipped,
                "event processed"
            ),
            Err(Error::Delivery(summary)) => {
                for failure in summary.failures.iter() {
                    tracing::warn!(
                        user_id = failure.user_id,
                        err = failure.error,
                        "user not notified"
                    );
                }
                tracing::warn!(
                    sent = summary.sent,
                    skipped = summary.skipped,
                    failed = summary.failed(),
                    "event processed with failures"
                );
            }
            Err(err) => tracing::warn!(%err, "failed to process event"),
        }
    }

    async fn try_dispatch(&self, change: MeetingChange) -> Result<DeliverySummary, Error> {
        let MeetingChange {
            kind,
            meeting_id,
            document,
        } = change;

        let Some(document) = document else {
            return match kind {
                MeetingChangeKind::Created => {
                    Err(Error::InvalidEvent("inserted document missing".to_string()))
                }
                MeetingChangeKind::Deleted => {
                    tracing::warn!("deleted meeting pre-image unavailable, skipping");
                    Ok(DeliverySummary::default())
                }
            };
        };

        let meeting = Meeting::from_document(meeting_id, document)
            .map_err(|err| Error::InvalidEvent(format!("invalid meeting: {err}")))?;

        let handler = match kind {
            MeetingChangeKind::Created => &self.created_handler,
            MeetingChangeKind::Deleted => &self.deleted_handler,
        };

        handler.handle(meeting).await
    }
}
