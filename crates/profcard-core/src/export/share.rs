//! Share message for a profile card.

use crate::profile::Profile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareMessage {
    pub title: String,
    pub text: String,
}

impl ShareMessage {
    pub fn for_profile(profile: &Profile) -> Self {
        Self {
            title: format!("{}'s Profile", profile.name()),
            text: format!(
                "Check out {}'s social media profile: {}",
                profile.name(),
                profile.bio()
            ),
        }
    }
}
