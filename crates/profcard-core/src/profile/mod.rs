//! Profile model and assembly.
//!
//! [`FormData`] is raw user input. [`generate_profile`] turns it into an
//! immutable [`Profile`]; editing means building a new one from fresh input.

mod generate;
mod timestamp;

pub(crate) use timestamp::serialize_millis;

pub use generate::{
    generate_profile, generate_profile_at, generate_profile_with, ProfileDefaults,
    DEFAULT_AVATAR_URL, DEFAULT_BIO, DEFAULT_NAME,
};

use crate::link::with_default_scheme;
use crate::platform::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw, unvalidated form input. Missing keys deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormData {
    pub name: String,
    pub bio: String,
    pub linkedin: String,
    pub facebook: String,
    pub instagram: String,
    pub github: String,
}

impl FormData {
    /// Raw link field for `platform`.
    pub fn social(&self, platform: Platform) -> &str {
        match platform {
            Platform::Linkedin => &self.linkedin,
            Platform::Facebook => &self.facebook,
            Platform::Instagram => &self.instagram,
            Platform::Github => &self.github,
        }
    }

    pub fn social_mut(&mut self, platform: Platform) -> &mut String {
        match platform {
            Platform::Linkedin => &mut self.linkedin,
            Platform::Facebook => &mut self.facebook,
            Platform::Instagram => &mut self.instagram,
            Platform::Github => &mut self.github,
        }
    }
}

/// One platform link on a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    platform: Platform,
    url: String,
    username: String,
}

impl SocialLink {
    pub fn new(platform: Platform, url: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            platform,
            url: url.into(),
            username: username.into(),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The link exactly as the user typed it.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Extracted handle; empty when extraction failed.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// URL to open: the raw input with the default scheme applied.
    pub fn href(&self) -> String {
        with_default_scheme(&self.url).into_owned()
    }

    /// `@handle`, or `@profile` when no handle could be extracted.
    pub fn display_handle(&self) -> String {
        if self.username.is_empty() {
            "@profile".to_string()
        } else {
            format!("@{}", self.username)
        }
    }
}

/// Assembled profile card. Built once per submission and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    name: String,
    bio: String,
    social_links: Vec<SocialLink>,
    avatar: String,
    #[serde(serialize_with = "timestamp::serialize_millis")]
    created_at: DateTime<Utc>,
}

impl Profile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Links in card order: linkedin, facebook, instagram, github.
    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Link for `platform`, if the form had one.
    pub fn link(&self, platform: Platform) -> Option<&SocialLink> {
        self.social_links.iter().find(|l| l.platform == platform)
    }
}
