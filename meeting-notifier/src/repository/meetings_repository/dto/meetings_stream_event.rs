use super::MeetingChange;
use mongodb::change_stream::event::ResumeToken;

#[derive(Debug, Clone, PartialEq)]
pub enum MeetingsStreamEvent {
    Changed(MeetingChange),

    ///
    /// Collection was dropped or renamed and the stream ended.
    /// Watching can continue only after this event's token
    ///
    Invalidated(ResumeToken),
}
