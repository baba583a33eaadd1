use crate::service::notifier_service::DeliverySummary;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid event: {0}")]
    InvalidEvent(String),

    ///
    /// At least one user could not be notified.
    /// Summary describes outcome of every user, including successful ones.
    ///
    #[error("delivery failed for {} of {} users", .0.failed(), .0.total())]
    Delivery(DeliverySummary),
}
