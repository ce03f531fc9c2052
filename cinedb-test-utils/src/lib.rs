//! Test utilities for the cinedb client
//!
//! Scriptable remote mock, a manually advanced clock, and JSON payload
//! builders, shared by unit and integration tests across the workspace.

pub mod builders;
pub mod clock;
pub mod mocks;

pub use builders::payloads;
pub use clock::ManualClock;
pub use mocks::MockRemote;
