//! `profcard validate <platform> <url>`

use anyhow::Result;
use profcard_core::form::FieldError;
use profcard_core::{validate_url, Platform};

pub fn run_validate(platform: Platform, url: &str) -> Result<()> {
    if validate_url(url, platform) {
        println!("valid");
        Ok(())
    } else {
        println!("invalid");
        Err(FieldError::InvalidUrl(platform).into())
    }
}
