//! Domain logic for the SWIFT/BIC bank identifier catalog.
//!
//! This crate is pure: code-format rules, the canonical entity model, the
//! CSV record reader and the record validator live here, with no database
//! or HTTP dependencies. Persistence and transport layers build on top.

pub mod bank;
pub mod code;
pub mod error;
pub mod parser;
pub mod reader;

pub use bank::SwiftBank;
pub use code::BankKind;
pub use error::{CoreError, CoreResult};
