mod dto;
mod meetings_change_stream;
mod meetings_change_stream_impl;
mod meetings_repository;
mod meetings_repository_impl;

pub use dto::*;
pub use meetings_change_stream::*;
pub use meetings_change_stream_impl::*;
pub use meetings_repository::*;
pub use meetings_repository_impl::*;
