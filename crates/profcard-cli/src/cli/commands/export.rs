//! `profcard export` – write `<Name>_profile.json`.

use super::build_profile;
use crate::cli::FormArgs;
use anyhow::Result;
use profcard_core::config::ProfcardConfig;
use profcard_core::export::write_export;
use std::path::Path;

pub fn run_export(
    cfg: &ProfcardConfig,
    args: &FormArgs,
    dir: &Path,
    allow_invalid: bool,
) -> Result<()> {
    let profile = build_profile(cfg, args, allow_invalid)?;
    let path = write_export(&profile, dir)?;
    println!("Exported profile to {}", path.display());
    Ok(())
}
