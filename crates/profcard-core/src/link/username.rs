//! Handle extraction from profile URL paths.

use super::scheme::parse_with_default_scheme;
use crate::platform::{PathRule, Platform};
use regex::Regex;
use std::sync::OnceLock;

// Searches, not anchored: the first match anywhere in the path wins.
fn in_segment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/in/([^/]+)").expect("static regex"))
}

fn first_segment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/([^/]+)").expect("static regex"))
}

fn path_regex(rule: PathRule) -> &'static Regex {
    match rule {
        PathRule::InSegment => in_segment_re(),
        PathRule::FirstSegment => first_segment_re(),
    }
}

/// Recovers the display handle from a profile URL.
///
/// Returns an empty string for empty input, unparseable input, or a path the
/// platform rule does not match. The path is matched in its percent-encoded
/// form. Only the shape of the path is checked; the account may not exist.
///
/// # Examples
///
/// - `extract_username("https://linkedin.com/in/jane-doe", Platform::Linkedin)` → `"jane-doe"`
/// - `extract_username("github.com/octocat/hello-world", Platform::Github)` → `"octocat"`
pub fn extract_username(url: &str, platform: Platform) -> String {
    if url.is_empty() {
        return String::new();
    }
    let Some(parsed) = parse_with_default_scheme(url) else {
        return String::new();
    };
    path_regex(platform.path_rule())
        .captures(parsed.path())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// String-tag form of [`extract_username`]. Unknown tags yield an empty string.
pub fn extract_username_tag(url: &str, tag: &str) -> String {
    match tag.parse::<Platform>() {
        Ok(platform) => extract_username(url, platform),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github(url: &str) -> String {
        extract_username(url, Platform::Github)
    }

    #[test]
    fn linkedin_in_segment() {
        assert_eq!(
            extract_username("https://linkedin.com/in/jane-doe", Platform::Linkedin),
            "jane-doe"
        );
        assert_eq!(
            extract_username("linkedin.com/in/jane-doe/", Platform::Linkedin),
            "jane-doe"
        );
    }

    #[test]
    fn linkedin_without_in_segment_is_empty() {
        assert_eq!(
            extract_username("https://linkedin.com/company/acme", Platform::Linkedin),
            ""
        );
        let li = Platform::Linkedin;
        assert_eq!(extract_username("https://linkedin.com/in/", li), "");
    }

    #[test]
    fn linkedin_in_segment_is_unanchored() {
        assert_eq!(
            extract_username("https://linkedin.com/pub/in/jane", Platform::Linkedin),
            "jane"
        );
    }

    #[test]
    fn first_segment_platforms() {
        assert_eq!(github("https://github.com/octocat"), "octocat");
        assert_eq!(github("https://github.com/octocat/hello-world"), "octocat");
        assert_eq!(
            extract_username("instagram.com/some.one?hl=en", Platform::Instagram),
            "some.one"
        );
        assert_eq!(
            extract_username("https://www.facebook.com/jdoe#about", Platform::Facebook),
            "jdoe"
        );
    }

    #[test]
    fn root_path_is_empty() {
        assert_eq!(github("https://github.com"), "");
        assert_eq!(github("https://github.com/"), "");
    }

    #[test]
    fn leading_empty_segments_are_skipped() {
        assert_eq!(github("https://github.com//octocat"), "octocat");
    }

    #[test]
    fn host_is_not_checked() {
        assert_eq!(github("https://example.com/someone"), "someone");
    }

    #[test]
    fn malformed_is_empty() {
        assert_eq!(github("not a url"), "");
        assert_eq!(extract_username("", Platform::Linkedin), "");
    }

    #[test]
    fn percent_encoded_path_is_kept_encoded() {
        assert_eq!(github("https://github.com/a b"), "a%20b");
    }

    #[test]
    fn unknown_tag_is_empty() {
        let jack = extract_username_tag("https://twitter.com/jack", "twitter");
        assert_eq!(jack, "");
        let octocat = extract_username_tag("https://github.com/octocat", "github");
        assert_eq!(octocat, "octocat");
    }
}
