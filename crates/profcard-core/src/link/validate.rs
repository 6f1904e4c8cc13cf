//! Per-platform host validation.

use super::scheme::parse_with_default_scheme;
use crate::platform::Platform;

/// Checks that `url` looks like a link to `platform`.
///
/// - Empty input is valid; an absent link is handled by omission, not as an error.
/// - Otherwise the input (with default scheme) must parse, and its host must
///   contain one of the platform's allow-listed substrings.
pub fn validate_url(url: &str, platform: Platform) -> bool {
    if url.is_empty() {
        return true;
    }
    let Some(parsed) = parse_with_default_scheme(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        tracing::debug!(%platform, url, "link has no host");
        return false;
    };
    let ok = platform
        .host_allow_list()
        .iter()
        .any(|needle| host.contains(needle));
    if !ok {
        tracing::debug!(%platform, host, "host not allowed for platform");
    }
    ok
}

/// String-tag form of [`validate_url`]. Unknown tags never validate a non-empty link.
pub fn validate_url_tag(url: &str, tag: &str) -> bool {
    if url.is_empty() {
        return true;
    }
    match tag.parse::<Platform>() {
        Ok(platform) => validate_url(url, platform),
        Err(_) => false,
    }
}
