use super::MeetingsStreamEvent;
use crate::repository;
use async_trait::async_trait;
use mongodb::change_stream::event::ResumeToken;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MeetingsChangeStream: Send {
    ///
    /// Waits for next insert, delete or invalidation.
    /// Returns `None` when stream was closed by the server
    ///
    async fn next(&mut self) -> Option<Result<MeetingsStreamEvent, repository::Error>>;

    ///
    /// Token of the last event seen by the stream
    ///
    fn resume_token(&self) -> Option<ResumeToken>;
}
