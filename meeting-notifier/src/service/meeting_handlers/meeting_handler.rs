use crate::{dto::input::Meeting, error::Error, service::notifier_service::DeliverySummary};
use async_trait::async_trait;

///
/// Reacts to a single meeting lifecycle event
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MeetingHandler: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::Delivery] when at least one user could not be notified
    ///
    async fn handle(&self, meeting: Meeting) -> Result<DeliverySummary, Error>;
}

///
/// Turns summary with failures into [Error::Delivery]
///
pub fn into_result(summary: DeliverySummary) -> Result<DeliverySummary, Error> {
    match summary.failures.is_empty() {
        true => Ok(summary),
        false => Err(Error::Delivery(summary)),
    }
}
