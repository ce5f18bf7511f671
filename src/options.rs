use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "folders.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Format of the written report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Structure section followed by `## path ##` content blocks.
    #[default]
    Text,
    /// The collected [`Report`](crate::Report) as pretty-printed JSON.
    Json,
}

/// Traversal knobs used by [`collect`](crate::collect).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectOptions {
    /// Sort directory entries by file name. When false the file system's
    /// native listing order is kept.
    pub sorted: bool,
    /// Descend into symlinked directories.
    pub follow_links: bool,
}
impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            sorted: true,
            follow_links: false,
        }
    }
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathdumpOptions {
    pub config_path: PathBuf,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub collect: CollectOptions,
}
impl Default for PathdumpOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            format: OutputFormat::Text,
            collect: CollectOptions::default(),
        }
    }
}
#[derive(Debug, Default)]
pub struct PathdumpBuilder {
    options: PathdumpOptions,
}
impl PathdumpBuilder {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            options: PathdumpOptions {
                config_path: config_path.into(),
                ..Default::default()
            },
        }
    }
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output_path = path.into();
        self
    }
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.options.format = format;
        self
    }
    pub fn sorted(mut self, yes: bool) -> Self {
        self.options.collect.sorted = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.collect.follow_links = yes;
        self
    }
    pub fn build(self) -> PathdumpOptions {
        self.options
    }
}
