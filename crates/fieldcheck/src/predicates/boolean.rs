//! Boolean literal predicate

/// Parses a textual boolean.
///
/// Accepted literals: `1 t T TRUE true True yes Yes YES` and
/// `0 f F FALSE false False no No NO`.
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" | "yes" | "Yes" | "YES" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" | "no" | "No" | "NO" => Some(false),
        _ => None,
    }
}

crate::predicate! {
    /// Passes when the input is a recognised boolean literal (see [`parse_bool`]).
    pub Boolean for str;
    test(input) { parse_bool(input).is_some() }
    fn is_bool(value);
}
