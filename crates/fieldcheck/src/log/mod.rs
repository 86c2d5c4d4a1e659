//! Failure accumulation
//!
//! Two ways to collect failures for one validation session:
//!
//! - [`check`] threads an `Option<FieldErrors>` through single outcomes.
//! - [`ValidationLog`] records batches of [`Rule`](crate::foundation::Rule)s
//!   per field.
//!
//! Neither calls a predicate; callers evaluate checks and hand over the
//! outcomes.

pub mod errors;
pub mod validation_log;

pub use errors::{FieldErrors, check};
pub use validation_log::ValidationLog;
