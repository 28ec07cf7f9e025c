//! Business logic

pub mod export;
