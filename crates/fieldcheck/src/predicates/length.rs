//! Character-count predicate
//!
//! Length is measured in Unicode scalar values (chars), never bytes, so a
//! multi-byte character counts once.

crate::predicate! {
    /// Passes when the number of chars lies within `min..=max`.
    ///
    /// An inverted range (`min > max`) matches nothing.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub CharLimit { min: usize, max: usize } for str;
    test(self, input) {
        let count = input.chars().count();
        count >= self.min && count <= self.max
    }
    fn is_in_char_limit(value);
}
