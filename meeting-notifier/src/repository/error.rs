use mongodb::error::{CommandError, ErrorKind};

// Server codes of change stream errors that repeat for as long as the same
// resume token is used
const INVALID_RESUME_TOKEN: i32 = 260;
const CHANGE_STREAM_FATAL_ERROR: i32 = 280;
const CHANGE_STREAM_HISTORY_LOST: i32 = 286;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    ///
    /// Change stream can't be resumed from requested point.
    /// It either fell out of the oplog or belongs to an invalidated stream
    ///
    #[error("resume point lost: {0}")]
    ResumePointLost(mongodb::error::Error),
}

impl Error {
    pub fn from_change_stream(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::Command(CommandError {
                code:
                    INVALID_RESUME_TOKEN | CHANGE_STREAM_FATAL_ERROR | CHANGE_STREAM_HISTORY_LOST,
                ..
            }) => Self::ResumePointLost(err),
            _ => Self::Mongo(err),
        }
    }
}
