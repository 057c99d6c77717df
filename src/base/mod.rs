//! Base types and configuration.
//!
//! Provides the crate's foundational pieces:
//! - [`error::Error`]: unified error enum
//! - [`error::RequestError`]: a failed response materialized as an error
//! - [`truncation`]: process-wide excerpt-truncation default

pub mod error;
pub mod truncation;
