//! Per-field failure messages.

use std::fmt;

use indexmap::IndexMap;

use crate::foundation::ValidationFailed;

/// Field name to the ordered failure messages recorded for it.
///
/// A field is present only once a failure has been recorded for it, so an
/// empty collection means every check passed. Messages within a field keep
/// their recording order; fields keep the order of their first failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: IndexMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` under `field` when `ok` is `false`.
    ///
    /// A passing check leaves the collection untouched and never converts
    /// `message`.
    pub fn check(&mut self, field: &str, ok: bool, message: impl Into<String>) -> &mut Self {
        if !ok {
            self.add(field, message);
        }
        self
    }

    /// Appends a failure message to `field`. Empty messages are kept.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        tracing::trace!(field, message = %message, "recorded validation failure");
        match self.errors.get_mut(field) {
            Some(messages) => messages.push(message),
            None => {
                self.errors.insert(field.to_owned(), vec![message]);
            }
        }
    }

    /// Appends every message of `other` after the ones already recorded for
    /// the same field.
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, mut messages) in other.errors {
            self.errors.entry(field).or_default().append(&mut messages);
        }
    }

    /// Returns `true` when no failure has been recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` when no failure has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one failure.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Total number of recorded messages across all fields.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Messages recorded for `field`, in recording order.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Returns `true` if `field` has at least one failure.
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Iterates over failing field names.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Iterates over `(field, messages)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Converts into `Ok(())` when valid, or `Err` carrying every failure.
    pub fn into_result(self) -> Result<(), ValidationFailed> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationFailed { errors: self })
        }
    }

    /// Returns the underlying map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.errors
    }
}

/// Records `message` under `field` when `ok` is `false`, allocating the
/// collection on first use.
///
/// The returned collection must be stored back, usually in the variable
/// that was passed in:
///
/// ```rust
/// use fieldcheck::log::{FieldErrors, check};
///
/// let name = "";
/// let mut errors: Option<FieldErrors> = None;
/// errors = Some(check(errors, "name", !name.is_empty(), "name cannot be blank"));
///
/// let errors = errors.unwrap_or_default();
/// assert_eq!(errors.get("name"), Some(&["name cannot be blank".to_string()][..]));
/// ```
pub fn check(
    errors: Option<FieldErrors>,
    field: &str,
    ok: bool,
    message: impl Into<String>,
) -> FieldErrors {
    let mut errors = errors.unwrap_or_default();
    errors.check(field, ok, message);
    errors
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, messages)) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {}", messages.join(", "))?;
        }
        Ok(())
    }
}

impl From<IndexMap<String, Vec<String>>> for FieldErrors {
    fn from(mut errors: IndexMap<String, Vec<String>>) -> Self {
        errors.retain(|_, messages| !messages.is_empty());
        Self { errors }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.errors, serializer)
    }
}

// Goes through `From` so a field can never come back with zero messages.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FieldErrors {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <IndexMap<String, Vec<String>> as serde::Deserialize<'de>>::deserialize(deserializer)
            .map(Self::from)
    }
}

impl IntoIterator for FieldErrors {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
