//! Set membership predicate

use crate::foundation::Predicate;

/// Passes when the input equals one of the candidates exactly.
///
/// Comparison is plain string equality: no case folding, no trimming.
/// An empty candidate set never matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OneOf {
    candidates: Vec<String>,
}

impl OneOf {
    /// Creates a membership predicate from any list of strings.
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// The accepted values.
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}

impl Predicate for OneOf {
    type Input = str;

    fn test(&self, input: &str) -> bool {
        is_member(input, &self.candidates)
    }
}

/// Returns `true` if `value` equals some element of `candidates`.
#[must_use]
pub fn is_member<S: AsRef<str>>(value: &str, candidates: &[S]) -> bool {
    candidates.iter().any(|candidate| candidate.as_ref() == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a", true)]
    #[case("c", true)]
    #[case("z", false)]
    #[case("A", false)]
    #[case(" a", false)]
    #[case("", false)]
    fn membership(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_member(value, &["a", "b", "c"]), expected);
    }

    #[test]
    fn empty_set_never_matches() {
        let empty: [&str; 0] = [];
        assert!(!is_member("", &empty));
        assert!(!OneOf::default().test("anything"));
    }

    #[test]
    fn one_of_owns_candidates() {
        let roles = OneOf::new(["admin", "editor"]);
        assert!(roles.test("editor"));
        assert!(!roles.test("viewer"));
        assert_eq!(roles.candidates().len(), 2);
    }

    #[test]
    fn accepts_owned_strings() {
        let owned = vec![String::from("x"), String::from("y")];
        assert!(is_member("y", &owned));
    }
}
