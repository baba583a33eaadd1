mod error;
mod fcm_push_service;
mod push_service;

pub use error::Error;
pub use fcm_push_service::*;
pub use push_service::*;
