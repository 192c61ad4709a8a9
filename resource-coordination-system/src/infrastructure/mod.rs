pub mod config;
pub mod database;
pub mod middleware;
pub mod repository;
pub mod seed;
pub mod service_provider;
pub mod session;
pub mod telemetry;

pub use service_provider::{ServiceProvider, ServiceProviderScoped};
