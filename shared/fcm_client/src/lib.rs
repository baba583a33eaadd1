mod access_token_provider;
mod dto;
mod error;
mod fcm_client;
mod service_account_key;

pub use dto::{FcmClientConfig, Notification};
pub use error::Error;
pub use fcm_client::FcmClient;
pub use service_account_key::ServiceAccountKey;
