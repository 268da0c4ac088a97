//! Rewrites the docs index in place.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::RewriterConfig;
use crate::error::Result;
use crate::rules::{rewrite_index, RuleOutcome};
use crate::utils::{read_document, write_document};

/// Outcome of a rewrite run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteReport {
    pub target: PathBuf,
    pub outcomes: Vec<RuleOutcome>,
    /// Whether the rewritten content differs from what was read
    pub changed: bool,
    /// Whether the file was written back
    pub written: bool,
}

impl RewriteReport {
    pub fn total_replacements(&self) -> usize {
        self.outcomes.iter().map(|o| o.replacements).sum()
    }
}

pub struct Rewriter {
    config: RewriterConfig,
}

impl Rewriter {
    pub fn new(config: RewriterConfig) -> Self {
        Self { config }
    }

    /// Read the target, apply the index rules in order and write it back.
    ///
    /// The file is written even when no rule matched. In check mode nothing
    /// is written.
    pub fn run(&self) -> Result<RewriteReport> {
        let target = self.config.target();
        info!("Rewriting {}", target.display());

        let original = read_document(target)?;
        let transformed = rewrite_index(&original);
        let changed = transformed.content != original;

        if self.config.check {
            debug!(
                "Check mode, leaving {} untouched (changed: {})",
                target.display(),
                changed
            );
        } else {
            write_document(target, &transformed.content)?;
        }

        let report = RewriteReport {
            target: target.to_path_buf(),
            outcomes: transformed.outcomes,
            changed,
            written: !self.config.check,
        };

        info!(
            "{} replacement(s) in {}",
            report.total_replacements(),
            target.display()
        );
        Ok(report)
    }
}

/// Rewrite `path` in place with the index rules
pub fn rewrite_file(path: impl AsRef<Path>) -> Result<RewriteReport> {
    Rewriter::new(RewriterConfig::new(path.as_ref())).run()
}
