//! Read-side views derived from the ledger, requests and alerts on every call.
pub mod exception;
pub mod model;
pub mod service;
