//! Default scheme handling for user-typed links.

use std::borrow::Cow;
use url::Url;

const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Prepends `https://` unless the input already starts with `http`.
///
/// The check is a plain prefix test, so `http://`, `https://` and anything
/// else beginning with `http` are left untouched.
pub fn with_default_scheme(raw: &str) -> Cow<'_, str> {
    if raw.starts_with("http") {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(format!("{DEFAULT_SCHEME_PREFIX}{raw}"))
    }
}

/// Parses `raw` after applying the default scheme.
///
/// Returns `None` when the result is not a well-formed absolute URL.
pub fn parse_with_default_scheme(raw: &str) -> Option<Url> {
    let candidate = with_default_scheme(raw);
    match Url::parse(&candidate) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::trace!(input = raw, error = %e, "link is not a parseable URL");
            None
        }
    }
}
