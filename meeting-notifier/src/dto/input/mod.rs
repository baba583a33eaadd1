mod meeting;

pub use meeting::Meeting;
