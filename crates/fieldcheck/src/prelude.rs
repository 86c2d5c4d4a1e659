//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck::prelude::*;` import that brings in the
//! `Predicate` trait, every built-in predicate, and both accumulators.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let mut log = ValidationLog::new();
//! log.check("color", [OneOf::new(["red", "green"]).rule("blue", "unknown color")]);
//! assert!(!log.ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, outcomes, errors
// ============================================================================

pub use crate::foundation::{FormatError, Predicate, Rule, ValidationFailed};

// ============================================================================
// PREDICATES: All built-in predicates
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::predicates::*;

// ============================================================================
// ACCUMULATORS
// ============================================================================

pub use crate::log::{FieldErrors, ValidationLog, check};
