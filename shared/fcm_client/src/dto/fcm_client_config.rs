use std::time::Duration;

#[derive(Clone)]
pub struct FcmClientConfig {
    /// e.g. `https://fcm.googleapis.com`
    pub base_url: String,
    pub request_timeout: Duration,
}
