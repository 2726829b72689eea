//! Shared HTTP infrastructure for the distance conversion service.
//!
//! This crate provides the glue between `conversor-lib` and the hosting
//! runtime:
//!
//! - [`ConvertOutcome`]: maps the core conversion result onto HTTP responses
//! - [`health_live`] / [`health_ready`]: Kubernetes probe handlers
//! - [`init_logging`]: structured JSON or text logging setup
//! - [`RequestId`]: correlation ID extraction/generation
//!
//! The service follows a thin-handler pattern: validation and conversion
//! live in `conversor-lib` and handlers only parse the request, call the
//! library, and format the response.

#![deny(warnings)]

mod health;
pub mod logging;
mod request_id;
mod response;

pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use request_id::{extract_or_generate_request_id, RequestId};
pub use response::ConvertOutcome;
