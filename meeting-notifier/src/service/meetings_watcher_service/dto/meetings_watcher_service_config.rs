use std::time::Duration;

pub struct MeetingsWatcherServiceConfig {
    /// Delay between attempts to reopen failed change stream
    pub retry_interval: Duration,
}
