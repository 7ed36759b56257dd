//! Utility module - errors and logging
//!
//! - [`AppError`] - request-scoped error type
//! - [`AppResult`] - handler result alias
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
