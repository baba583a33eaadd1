mod meeting_change;
mod meetings_stream_event;
mod watch_position;

pub use meeting_change::*;
pub use meetings_stream_event::*;
pub use watch_position::*;
