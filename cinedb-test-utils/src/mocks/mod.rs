//! Mock implementations for testing

pub mod remote;

pub use remote::MockRemote;
