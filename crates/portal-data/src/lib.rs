//! Portal Data - Resource Access for the Longevity Portal
//!
//! The analytics and tab crates are pure; this crate is the seam to the
//! backend resources they consume:
//!
//! - [`PatientDataSource`] abstracts `/patients/{id}/...` and `/tab-configs`
//! - [`FileDataSource`] serves the same resources from a directory tree
//! - [`RetryPolicy`] retries transient failures with exponential backoff
//! - [`PortalClient`] applies the documented fallbacks so a failed fetch
//!   never reaches the render path as an error
//!
//! Configuration ([`config`]) and logging setup ([`telemetry`]) live here
//! too, since this is the only crate with a process around it.

pub mod client;
pub mod config;
pub mod error;
pub mod file_source;
pub mod retry;
pub mod source;
pub mod telemetry;

pub use client::PortalClient;
pub use config::{ConfigError, PortalConfig, RetrySettings};
pub use error::DataError;
pub use file_source::FileDataSource;
pub use retry::RetryPolicy;
pub use source::{PatientDataSource, Resource};
