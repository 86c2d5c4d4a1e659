//! Built-in predicates
//!
//! Every predicate comes in two shapes: a shorthand function returning
//! `bool`, and a struct implementing [`Predicate`](crate::foundation::Predicate)
//! that can be stored, shared, or turned into a [`Rule`](crate::foundation::Rule).
//!
//! # Categories
//!
//! - **Membership**: [`is_member`], [`OneOf`]
//! - **Length**: [`is_in_char_limit`], [`CharLimit`]
//! - **Boolean**: [`is_bool`], [`Boolean`]
//! - **Numeric**: [`is_int`], [`is_uint`], [`is_float`]
//! - **Time** (`temporal` feature): [`is_time`], [`is_time_past`], [`is_time_future`]
//! - **Network** (`network` feature): [`is_url`], [`RequestUri`]
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::predicates::*;
//!
//! assert!(is_member("red", &["red", "green"]));
//! assert!(is_in_char_limit("日本語", 1, 3));
//! assert!(is_int("-0x1f", 0, 16));
//! assert!(is_float("2.5e3", 32));
//! ```

// String predicates
pub mod boolean;
pub mod length;
pub mod membership;

// Numeric predicates
pub mod numeric;

// Time predicates
#[cfg(feature = "temporal")]
pub mod time;

// Network predicates
#[cfg(feature = "network")]
pub mod uri;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use boolean::{Boolean, is_bool, parse_bool};
pub use length::{CharLimit, is_in_char_limit};
pub use membership::{OneOf, is_member};

pub use numeric::{
    Float, FloatBits, IntFormat, SignedInt, UnsignedInt, is_float, is_int, is_uint,
};

#[cfg(feature = "temporal")]
pub use time::{
    Clock, FixedClock, FutureTime, PastTime, SystemClock, Time, is_time, is_time_future,
    is_time_future_with, is_time_past, is_time_past_with, layouts, parse_time,
};

#[cfg(feature = "network")]
pub use uri::{RequestUri, is_url};
