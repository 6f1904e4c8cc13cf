//! Profile assembly from form input.

use super::{FormData, Profile, SocialLink};
use crate::link::extract_username;
use crate::platform::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name used when the form's name is blank.
pub const DEFAULT_NAME: &str = "Anonymous User";
/// Bio used when the form's bio is empty.
pub const DEFAULT_BIO: &str = "Social media enthusiast";
/// Placeholder avatar shared by every profile.
pub const DEFAULT_AVATAR_URL: &str =
    "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=200&h=200&fit=crop";

/// Fallback values applied during assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDefaults {
    pub name: String,
    pub bio: String,
    pub avatar_url: String,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            bio: DEFAULT_BIO.to_string(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
        }
    }
}

/// Assembles a profile stamped with the current time.
///
/// Never fails and never validates: an invalid link is still included, with
/// whatever handle (possibly empty) extraction yields.
pub fn generate_profile(form: &FormData) -> Profile {
    generate_profile_at(form, Utc::now())
}

/// Like [`generate_profile`] with an explicit creation time.
pub fn generate_profile_at(form: &FormData, created_at: DateTime<Utc>) -> Profile {
    generate_profile_with(form, &ProfileDefaults::default(), created_at)
}

/// Assembles a profile using `defaults` for blank name/bio and the avatar.
pub fn generate_profile_with(
    form: &FormData,
    defaults: &ProfileDefaults,
    created_at: DateTime<Utc>,
) -> Profile {
    let social_links: Vec<SocialLink> = Platform::ALL
        .into_iter()
        .filter_map(|platform| {
            let raw = form.social(platform);
            if raw.is_empty() {
                return None;
            }
            let username = extract_username(raw, platform);
            Some(SocialLink::new(platform, raw, username))
        })
        .collect();

    let name = match form.name.trim() {
        "" => defaults.name.clone(),
        trimmed => trimmed.to_string(),
    };
    let bio = if form.bio.is_empty() {
        defaults.bio.clone()
    } else {
        form.bio.clone()
    };

    tracing::debug!(links = social_links.len(), "assembled profile");

    Profile {
        name,
        bio,
        social_links,
        avatar: defaults.avatar_url.clone(),
        created_at,
    }
}
