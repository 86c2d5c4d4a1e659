//! # fieldcheck
//!
//! Format predicates for string input, and a per-field accumulator for the
//! failure messages they produce.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let name = "";
//! let age = "-3";
//!
//! let mut log = ValidationLog::new();
//! log.check("name", [
//!     Rule::new(!name.is_empty(), "required"),
//!     CharLimit::new(1, 40).rule(name, "must be 1 to 40 characters"),
//! ]);
//! log.record("age", is_uint(age, 10, 8), "must be a whole number");
//!
//! assert!(!log.is_valid());
//! assert_eq!(log.errors().to_string(),
//!     "name: required, must be 1 to 40 characters; age: must be a whole number");
//! ```
//!
//! ## Predicates
//!
//! Every predicate is pure and total: malformed input, or malformed format
//! parameters, yield `false`.
//!
//! - **Membership**: [`is_member`](predicates::is_member)
//! - **Length**: [`is_in_char_limit`](predicates::is_in_char_limit) (counts chars, not bytes)
//! - **Boolean**: [`is_bool`](predicates::is_bool)
//! - **Numeric**: [`is_int`](predicates::is_int), [`is_uint`](predicates::is_uint),
//!   [`is_float`](predicates::is_float)
//! - **Time**: `is_time`, `is_time_past`, `is_time_future` (`temporal` feature)
//! - **URL**: `is_url` (`network` feature)
//!
//! ## Accumulators
//!
//! - [`log::check`] threads an `Option<FieldErrors>` through single outcomes.
//! - [`log::ValidationLog`] records batches of [`Rule`](foundation::Rule)s.
//!
//! Neither accumulator calls predicates; callers decide what to check.

pub mod foundation;
pub mod log;
mod macros;
pub mod predicates;
pub mod prelude;
