pub mod config;

pub use config::{RewriterConfig, DEFAULT_TARGET};
