//! Form → profile, shared by generate/export/share.

use crate::cli::FormArgs;
use anyhow::Result;
use profcard_core::config::ProfcardConfig;
use profcard_core::form::check_submission;
use profcard_core::profile::{generate_profile_with, Profile};

/// Reads the form, runs the submission check unless skipped, and assembles the card.
pub fn build_profile(
    cfg: &ProfcardConfig,
    args: &FormArgs,
    allow_invalid: bool,
) -> Result<Profile> {
    let form = args.to_form_data()?;
    if cfg.require_valid_links && !allow_invalid {
        check_submission(&form)?;
    }
    Ok(generate_profile_with(
        &form,
        &cfg.profile_defaults(),
        chrono::Utc::now(),
    ))
}
