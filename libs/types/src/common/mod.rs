//! Common types shared across the registry crate

pub mod errors;
