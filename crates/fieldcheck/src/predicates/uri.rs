//! Request-URI predicate

use std::sync::LazyLock;

use url::Url;

// Any fixed origin works; only the path syntax of the input is checked.
static PATH_BASE: LazyLock<Option<Url>> =
    LazyLock::new(|| Url::parse("http://request.invalid/").ok());

fn is_request_uri(input: &str) -> bool {
    if input.is_empty() || input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    if !escapes_are_well_formed(input) {
        return false;
    }
    if input == "*" {
        return true;
    }
    if input.starts_with('/') {
        return PATH_BASE
            .as_ref()
            .is_some_and(|base| base.join(input).is_ok());
    }
    Url::parse(input).is_ok()
}

// Every `%` must start a two-hex-digit escape; `Url::parse` lets bad ones through.
fn escapes_are_well_formed(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}

crate::predicate! {
    /// Passes when the input is usable as an HTTP request target.
    ///
    /// Accepted forms:
    /// - an absolute URI with a scheme (`https://example.com/a?b=c`, `mailto:x@y`)
    /// - an absolute path (`/search?q=rust`)
    /// - the asterisk form `*`
    ///
    /// Relative references such as `images/a.png`, malformed percent-escapes
    /// (`/%zz`), and anything containing whitespace or control characters,
    /// fail.
    pub RequestUri for str;
    test(input) { is_request_uri(input) }
    fn is_url(value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://example.com", true)]
    #[case("http://example.com/path?q=1#frag", true)]
    #[case("ftp://files.example.com/a.txt", true)]
    #[case("mailto:someone@example.com", true)]
    #[case("/search?q=rust", true)]
    #[case("*", true)]
    #[case("not a url", false)]
    #[case("https://exa mple.com", false)]
    #[case("/path with space", false)]
    #[case("https://example.com/\tx", false)]
    #[case("images/a.png", false)]
    #[case("example.com", false)]
    #[case("", false)]
    #[case("http://[::1", false)]
    #[case("http://example.com/a%20b", true)]
    #[case("/caf%C3%A9?q=%2Fx", true)]
    #[case("http://example.com/%zz", false)]
    #[case("/%zz", false)]
    #[case("/trailing%", false)]
    #[case("/short%4", false)]
    #[case("http://example.com/?q=%G1", false)]
    fn request_targets(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_url(value), expected);
    }
}
