//! CLI command handlers, one per file.

mod build;
mod export;
mod generate;
mod share;
mod username;
mod validate;

pub use build::build_profile;
pub use export::run_export;
pub use generate::run_generate;
pub use share::run_share;
pub use username::run_username;
pub use validate::run_validate;
