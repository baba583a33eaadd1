///
/// Result of notifying a single user
///
#[derive(Debug)]
pub enum DeliveryOutcome {
    Sent,

    /// User does not exist or has no FCM token
    Skipped,

    Failed { user_id: String, error: String },
}
