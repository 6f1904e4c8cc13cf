//! Profile export: JSON download document and share message.

mod file_name;
mod share;

pub use file_name::export_file_name;
pub use share::ShareMessage;

use crate::profile::{serialize_millis, Profile, SocialLink};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Exported subset of a profile. The avatar is not part of the document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileExport<'a> {
    pub name: &'a str,
    pub bio: &'a str,
    pub social_links: &'a [SocialLink],
    #[serde(serialize_with = "serialize_millis")]
    pub created_at: DateTime<Utc>,
}

impl<'a> ProfileExport<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self {
            name: profile.name(),
            bio: profile.bio(),
            social_links: profile.social_links(),
            created_at: profile.created_at(),
        }
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize profile export")
    }
}

/// Full card as pretty JSON, avatar included.
pub fn card_json(profile: &Profile) -> Result<String> {
    serde_json::to_string_pretty(profile).context("serialize profile")
}

/// Writes `<name>_profile.json` into `dir` and returns its path.
pub fn write_export(profile: &Profile, dir: &Path) -> Result<PathBuf> {
    let json = ProfileExport::new(profile).to_json()?;
    fs::create_dir_all(dir).with_context(|| format!("create export dir {}", dir.display()))?;
    let path = dir.join(export_file_name(profile.name()));
    fs::write(&path, json).with_context(|| format!("write export {}", path.display()))?;
    tracing::info!("exported profile to {}", path.display());
    Ok(path)
}
