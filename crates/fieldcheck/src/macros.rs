//! Macros for declaring predicates with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::predicate;
//! use fieldcheck::foundation::Predicate;
//!
//! // Unit predicate (no parameters) with a shorthand function
//! predicate! {
//!     pub NoSpaces for str;
//!     test(input) { !input.contains(' ') }
//!     fn has_no_spaces(value);
//! }
//!
//! // Predicate with parameters
//! predicate! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MaxBytes { max: usize } for str;
//!     test(self, input) { input.len() <= self.max }
//!     fn is_within_bytes(value);
//! }
//!
//! assert!(has_no_spaces("alice"));
//! assert!(MaxBytes::new(3).test("abc"));
//! assert!(!is_within_bytes("abcd", 3));
//! ```

// ============================================================================
// PREDICATE MACRO
// ============================================================================

/// Creates a complete predicate: struct definition, `Predicate`
/// implementation, constructor, and an optional shorthand function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`.
///
/// The shorthand takes the value under test first, followed by the struct's
/// fields in declaration order, and returns `bool`.
#[macro_export]
macro_rules! predicate {
    // ── Unit predicate + shorthand fn ────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        test($inp:ident) $rule:block
        fn $shorthand:ident($arg:ident);
    ) => {
        $crate::predicate! {
            $(#[$meta])*
            $vis $name for $input;
            test($inp) $rule
        }

        #[must_use]
        $vis fn $shorthand($arg: &$input) -> bool {
            $crate::foundation::Predicate::test(&$name, $arg)
        }
    };

    // ── Unit predicate, no shorthand ─────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        test($inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Predicate for $name {
            type Input = $input;

            #[inline]
            fn test(&self, $inp: &Self::Input) -> bool $rule
        }
    };

    // ── Struct with fields + shorthand fn ────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        test($self_:ident, $inp:ident) $rule:block
        fn $shorthand:ident($arg:ident);
    ) => {
        $crate::predicate! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            test($self_, $inp) $rule
        }

        #[must_use]
        $vis fn $shorthand($arg: &$input, $($field: $fty),+) -> bool {
            $crate::foundation::Predicate::test(&$name::new($($field),+), $arg)
        }
    };

    // ── Struct with fields, no shorthand ─────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        test($self_:ident, $inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Predicate for $name {
            type Input = $input;

            #[inline]
            fn test(&$self_, $inp: &Self::Input) -> bool $rule
        }
    };
}
