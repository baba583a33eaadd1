use crate::repository;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Finds FCM token registered by the user.
    ///
    /// Returns `None` when user does not exist
    /// or user has no token (missing or empty `fcmToken`).
    ///
    async fn find_fcm_token(&self, user_id: &str) -> Result<Option<String>, repository::Error>;
}
