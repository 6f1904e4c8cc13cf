//! `profcard username <platform> <url>`

use profcard_core::{extract_username, Platform};

pub fn run_username(platform: Platform, url: &str) {
    println!("{}", extract_username(url, platform));
}
