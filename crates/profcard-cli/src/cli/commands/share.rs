//! `profcard share` – print the share title and text.

use super::build_profile;
use crate::cli::FormArgs;
use anyhow::Result;
use profcard_core::config::ProfcardConfig;
use profcard_core::export::ShareMessage;

pub fn run_share(cfg: &ProfcardConfig, args: &FormArgs, allow_invalid: bool) -> Result<()> {
    let profile = build_profile(cfg, args, allow_invalid)?;
    let msg = ShareMessage::for_profile(&profile);
    println!("{}", msg.title);
    println!("{}", msg.text);
    Ok(())
}
