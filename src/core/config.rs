use std::path::{Path, PathBuf};

/// Docs index path, relative to the working directory
pub const DEFAULT_TARGET: &str = "docs/index.md";

/// Settings for a single rewrite run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriterConfig {
    /// File rewritten in place
    pub target: PathBuf,
    /// Compute the rewrite without writing it back
    pub check: bool,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET),
            check: false,
        }
    }
}

impl RewriterConfig {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    pub fn target(&self) -> &Path {
        &self.target
    }
}
