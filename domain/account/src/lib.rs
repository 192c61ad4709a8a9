//! Users, credentials and login sessions.
pub mod exception;
#[cfg(feature = "mock")]
pub mod mock;
pub mod model;
pub mod repository;
pub mod service;
