//! Batch-rule accumulator.

use crate::foundation::{Rule, ValidationFailed};
use crate::log::FieldErrors;

/// Collects failing [`Rule`]s per field for one validation session.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
///
/// let name = "al";
/// let age = "abc";
///
/// let mut log = ValidationLog::new();
/// log.check("name", [
///     Rule::new(!name.is_empty(), "required"),
///     CharLimit::new(3, 20).rule(name, "must be 3 to 20 characters"),
/// ]);
/// log.check("age", [(is_uint(age, 10, 8), "must be a number")]);
///
/// assert!(!log.is_valid());
/// assert_eq!(log.messages("name"), Some(&["must be 3 to 20 characters".to_string()][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ValidationLog {
    errors: FieldErrors,
}

impl ValidationLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates `rules` in order and records the message of every failing
    /// one under `field`. Calls for the same field append.
    pub fn check<I>(&mut self, field: &str, rules: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Rule>,
    {
        for rule in rules {
            let rule = rule.into();
            if rule.is_failure() {
                self.errors.add(field, rule.message);
            }
        }
        self
    }

    /// Records a single outcome under `field`.
    pub fn record(&mut self, field: &str, ok: bool, message: impl Into<String>) -> &mut Self {
        self.errors.check(field, ok, message);
        self
    }

    /// Returns `true` when no failure has been recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_valid()
    }

    /// Alias for [`is_valid`](Self::is_valid).
    #[must_use]
    pub fn ok(&self) -> bool {
        self.is_valid()
    }

    /// Messages recorded for `field`, in recording order.
    #[must_use]
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field)
    }

    /// Every recorded failure.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Appends every failure of `other` after this log's own.
    pub fn merge(&mut self, other: ValidationLog) -> &mut Self {
        self.errors.merge(other.errors);
        self
    }

    /// Consumes the log, returning its failures.
    #[must_use]
    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    /// Converts into `Ok(())` when valid, or `Err` carrying every failure.
    pub fn into_result(self) -> Result<(), ValidationFailed> {
        self.errors.into_result()
    }
}

impl From<FieldErrors> for ValidationLog {
    fn from(errors: FieldErrors) -> Self {
        Self { errors }
    }
}

impl From<ValidationLog> for FieldErrors {
    fn from(log: ValidationLog) -> Self {
        log.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn new_log_is_valid() {
        let log = ValidationLog::new();
        assert!(log.is_valid());
        assert!(log.ok());
    }

    #[test]
    fn check_records_only_failures_in_rule_order() {
        let mut log = ValidationLog::new();
        log.check(
            "password",
            [
                Rule::new(false, "too short"),
                Rule::new(true, "has digit"),
                Rule::new(false, "missing symbol"),
            ],
        );
        assert_eq!(
            log.messages("password").map(<[String]>::to_vec),
            Some(strings(&["too short", "missing symbol"]))
        );
    }

    #[test]
    fn repeated_checks_append() {
        let mut log = ValidationLog::new();
        log.check("name", [(false, "first")]);
        log.check("name", [(false, "second")]);
        assert_eq!(
            log.messages("name").map(<[String]>::to_vec),
            Some(strings(&["first", "second"]))
        );
    }

    #[test]
    fn all_passing_rules_leave_log_valid() {
        let mut log = ValidationLog::new();
        log.check("name", [(true, "a"), (true, "b")]);
        assert!(log.is_valid());
        assert!(log.messages("name").is_none());
    }

    #[test]
    fn empty_rule_list_is_a_no_op() {
        let mut log = ValidationLog::new();
        log.check("name", Vec::<Rule>::new());
        assert!(log.is_valid());
    }

    #[test]
    fn record_and_check_share_storage() {
        let mut log = ValidationLog::new();
        log.record("email", false, "required")
            .check("email", [(false, "invalid")]);
        assert_eq!(
            log.messages("email").map(<[String]>::to_vec),
            Some(strings(&["required", "invalid"]))
        );
    }

    #[test]
    fn merge_keeps_per_field_order() {
        let mut a = ValidationLog::new();
        a.record("name", false, "a1");
        let mut b = ValidationLog::new();
        b.record("name", false, "b1").record("age", false, "b2");

        a.merge(b);
        assert_eq!(
            a.messages("name").map(<[String]>::to_vec),
            Some(strings(&["a1", "b1"]))
        );
        assert_eq!(a.errors().len(), 2);
    }

    #[test]
    fn into_result_surfaces_failures() {
        let mut log = ValidationLog::new();
        assert!(log.clone().into_result().is_ok());

        log.record("name", false, "required");
        let err = log.into_result().unwrap_err();
        assert_eq!(err.messages("name").map(<[String]>::len), Some(1));
    }
}
