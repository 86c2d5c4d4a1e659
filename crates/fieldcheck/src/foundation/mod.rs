//! Core predicate types and traits
//!
//! This module contains the building blocks shared by the predicate library
//! and the validation log:
//!
//! - **Traits**: `Predicate`
//! - **Outcomes**: `Rule`
//! - **Errors**: `FormatError`, `ValidationFailed`
//!
//! # Architecture
//!
//! ## 1. Pure predicates
//!
//! A predicate answers one question about a string and nothing else:
//!
//! ```rust
//! use fieldcheck::foundation::Predicate;
//! use fieldcheck::predicates::CharLimit;
//!
//! let name = CharLimit::new(1, 20);
//! assert!(name.test("alice"));
//! assert!(!name.test(""));
//! ```
//!
//! ## 2. Outcomes are data
//!
//! A failed check is a [`Rule`] with `ok == false` and a caller-supplied
//! message. Nothing in the crate raises on a failed check:
//!
//! ```rust
//! use fieldcheck::foundation::{Predicate, Rule};
//! use fieldcheck::predicates::Boolean;
//!
//! let rule = Boolean.rule("maybe", "must be a boolean");
//! assert_eq!(rule, Rule::new(false, "must be a boolean"));
//! ```

pub mod error;
pub mod rule;
pub mod traits;

pub use error::{FormatError, ValidationFailed};
pub use rule::Rule;
pub use traits::Predicate;
