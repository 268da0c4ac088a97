// change-index-path - rewrites image paths and changelog links in the docs index

pub mod core;
pub mod error;
pub mod logging;
pub mod rewriter;
pub mod rules;
pub mod utils;

pub use crate::core::{RewriterConfig, DEFAULT_TARGET};
pub use error::{Result, RewriteError};
pub use rewriter::{rewrite_file, RewriteReport, Rewriter};
pub use rules::{apply_rules, SubstitutionRule, INDEX_RULES};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
