mod access_token_response;
mod error_response;
mod fcm_client_config;
mod jwt_claims;
mod message;

pub use access_token_response::*;
pub use error_response::*;
pub use fcm_client_config::*;
pub use jwt_claims::*;
pub use message::*;
