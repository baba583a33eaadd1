pub mod meeting_handlers;
pub mod meetings_watcher_service;
pub mod notifier_service;
pub mod push_service;
