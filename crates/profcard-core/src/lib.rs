//! Profile cards from social links.
//!
//! Validates LinkedIn, Facebook, Instagram and GitHub profile URLs, extracts
//! the handle from each, and assembles an immutable [`profile::Profile`] that
//! can be exported as JSON or turned into a share message.

pub mod config;
pub mod export;
pub mod form;
pub mod link;
pub mod logging;
pub mod platform;
pub mod profile;

pub use link::{extract_username, validate_url};
pub use platform::Platform;
pub use profile::{generate_profile, FormData, Profile, SocialLink};
