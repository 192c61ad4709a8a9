//! Stock ledger: resources, per-city stock levels, their change history and
//! the distribution plans that move quantities between cities.
pub mod exception;
#[cfg(feature = "mock")]
pub mod mock;
pub mod model;
pub mod repository;
pub mod service;
