//! Core traits for the predicate library

use crate::foundation::Rule;

// ============================================================================
// CORE PREDICATE TRAIT
// ============================================================================

/// The trait every predicate implements.
///
/// A predicate is pure and total: it never panics, never reports an error,
/// and returns `false` for any input it cannot interpret.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::Predicate;
///
/// struct NoSpaces;
///
/// impl Predicate for NoSpaces {
///     type Input = str;
///
///     fn test(&self, input: &str) -> bool {
///         !input.contains(' ')
///     }
/// }
///
/// assert!(NoSpaces.test("alice"));
/// assert!(!NoSpaces.test("alice smith"));
/// ```
pub trait Predicate {
    /// The type being tested.
    ///
    /// Use `?Sized` to allow testing unsized types like `str`.
    type Input: ?Sized;

    /// Returns `true` if `input` satisfies the constraint.
    fn test(&self, input: &Self::Input) -> bool;

    /// Evaluates the predicate and pairs the outcome with `message`,
    /// ready to be fed into [`ValidationLog::check`](crate::log::ValidationLog::check).
    fn rule(&self, input: &Self::Input, message: impl Into<String>) -> Rule
    where
        Self: Sized,
    {
        Rule::new(self.test(input), message)
    }
}

impl<P> Predicate for &P
where
    P: Predicate + ?Sized,
{
    type Input = P::Input;

    #[inline]
    fn test(&self, input: &Self::Input) -> bool {
        (**self).test(input)
    }
}
