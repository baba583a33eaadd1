//!
//! Data transfer objects
//!

pub mod input;
