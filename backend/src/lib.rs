//! Arithmetic and user-collection service library modules.

pub mod api;
pub mod config;
pub mod doc;
pub mod domain;
pub mod server;
pub mod store;
pub mod telemetry;

/// Public OpenAPI surface used by debug builds and tooling.
pub use doc::ApiDoc;
