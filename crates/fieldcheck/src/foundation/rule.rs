//! Pre-evaluated check outcomes.

/// One already-evaluated check: its outcome and the message recorded if it
/// failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    /// Whether the check passed.
    pub ok: bool,
    /// Message recorded when `ok` is `false`. May be empty.
    pub message: String,
}

impl Rule {
    /// Creates a rule from an outcome and a message.
    pub fn new(ok: bool, message: impl Into<String>) -> Self {
        Self {
            ok,
            message: message.into(),
        }
    }

    /// Returns `true` if this rule records a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.ok
    }
}

impl<M: Into<String>> From<(bool, M)> for Rule {
    fn from((ok, message): (bool, M)) -> Self {
        Self::new(ok, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tuple() {
        let rule: Rule = (false, "too short").into();
        assert!(rule.is_failure());
        assert_eq!(rule.message, "too short");
    }

    #[test]
    fn empty_message_is_kept() {
        let rule = Rule::new(false, "");
        assert!(rule.is_failure());
        assert!(rule.message.is_empty());
    }
}
