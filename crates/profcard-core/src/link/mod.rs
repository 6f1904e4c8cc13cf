//! Social link checks: host validation and handle extraction.
//!
//! Both operations are lexical. Input gets a default `https://` scheme when it
//! does not start with `http`, is parsed with the `url` crate, and then the
//! host (validation) or path (extraction) is matched against the platform's
//! table. Neither ever fails: malformed input yields `false` or `""`.

mod scheme;
mod username;
mod validate;

pub use scheme::{parse_with_default_scheme, with_default_scheme};
pub use username::{extract_username, extract_username_tag};
pub use validate::{validate_url, validate_url_tag};
