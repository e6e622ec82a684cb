//! Command implementations.

pub mod info;
pub mod search;
