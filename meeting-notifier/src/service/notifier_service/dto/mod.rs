mod delivery_outcome;
mod delivery_summary;
mod notification_payload;

pub use delivery_outcome::*;
pub use delivery_summary::*;
pub use notification_payload::*;
