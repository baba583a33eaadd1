mod meeting_created_handler;
mod meeting_deleted_handler;
mod meeting_handler;

pub use meeting_created_handler::*;
pub use meeting_deleted_handler::*;
pub use meeting_handler::*;
