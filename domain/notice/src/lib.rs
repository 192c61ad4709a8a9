//! Alerts broadcast to everyone, notifications addressed to one user and the audit trail.
pub mod exception;
#[cfg(feature = "mock")]
pub mod mock;
pub mod model;
pub mod repository;
pub mod service;
