mod meetings_watcher_service_config;

pub use meetings_watcher_service_config::*;
