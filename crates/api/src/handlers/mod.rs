//! Request handlers for the SWIFT code catalog.
//!
//! Handlers stay thin: they deserialize input, delegate to
//! [`SwiftCodeService`](crate::service::SwiftCodeService), and shape the
//! response. Errors are mapped via [`AppError`](crate::error::AppError).

pub mod health;
pub mod swift_codes;
