//! Supported social platforms and their per-platform tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Social network a link belongs to.
///
/// Declaration order is the order links appear on a profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linkedin,
    Facebook,
    Instagram,
    Github,
}

/// How a handle is recovered from a platform's URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRule {
    /// `/in/<handle>` anywhere in the path.
    InSegment,
    /// First `/<handle>` in the path.
    FirstSegment,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Linkedin,
        Platform::Facebook,
        Platform::Instagram,
        Platform::Github,
    ];

    /// Lowercase tag used in forms, JSON and on the command line.
    pub fn tag(self) -> &'static str {
        match self {
            Platform::Linkedin => "linkedin",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Github => "github",
        }
    }

    /// Tag with the first letter upper-cased, as shown on the card.
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Linkedin => "Linkedin",
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::Github => "Github",
        }
    }

    /// Host substrings accepted for this platform; any one match is enough.
    pub fn host_allow_list(self) -> &'static [&'static str] {
        match self {
            Platform::Linkedin => &["linkedin.com"],
            Platform::Facebook => &["facebook.com", "fb.com"],
            Platform::Instagram => &["instagram.com"],
            Platform::Github => &["github.com"],
        }
    }

    pub fn path_rule(self) -> PathRule {
        match self {
            Platform::Linkedin => PathRule::InSegment,
            Platform::Facebook | Platform::Instagram | Platform::Github => PathRule::FirstSegment,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform `{0}` (expected linkedin, facebook, instagram or github)")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    /// Exact, case-sensitive match on the lowercase tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.tag() == s)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}
