//! Builders for test payloads

pub mod payloads;
