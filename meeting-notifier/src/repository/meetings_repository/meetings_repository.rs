use super::{MeetingsChangeStream, WatchPosition};
use crate::repository;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MeetingsRepository: Send + Sync {
    ///
    /// Opens stream of meeting inserts and deletes starting at `position`.
    ///
    /// Returns `ResumePointLost` when the server no longer accepts
    /// the token carried by `position`.
    ///
    async fn watch(
        &self,
        position: WatchPosition,
    ) -> Result<Box<dyn MeetingsChangeStream>, repository::Error>;
}
