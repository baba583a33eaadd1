mod dto;
mod meeting_change_dispatcher;
mod meetings_watcher_service;

pub use dto::MeetingsWatcherServiceConfig;
pub use meeting_change_dispatcher::*;
pub use meetings_watcher_service::*;
