use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Indentation unit for one level of depth below a root.
pub(crate) const INDENT: &str = "  ";

/// One line of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructureLine {
    /// A directory, rendered with a trailing `/`.
    Directory { depth: usize, name: String },
    /// A regular file.
    File { depth: usize, name: String },
    /// A root path that is neither a file nor a directory.
    NotFound { path: String },
}

impl fmt::Display for StructureLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureLine::Directory { depth, name } => {
                write!(f, "{}{}/", INDENT.repeat(*depth), name)
            }
            StructureLine::File { depth, name } => write!(f, "{}{}", INDENT.repeat(*depth), name),
            StructureLine::NotFound { path } => write!(f, "[Not found: {}]", path),
        }
    }
}

/// What was read from a file.
///
/// Read failures are carried as data instead of errors so a single bad file
/// never aborts a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum FileContent {
    /// The file decoded as UTF-8.
    Text(String),
    /// The file could not be opened, read or decoded; holds the error message.
    Unreadable(String),
}

impl FileContent {
    pub fn is_unreadable(&self) -> bool {
        matches!(self, FileContent::Unreadable(_))
    }
}

impl fmt::Display for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileContent::Text(text) => f.write_str(text),
            FileContent::Unreadable(message) => write!(f, "[Error reading file: {}]", message),
        }
    }
}

/// A visited file and its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// The path as given for a file root, or the root joined with the
    /// relative path for files found inside a directory root.
    pub path: PathBuf,
    pub content: FileContent,
}

/// Everything gathered from the root paths, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub structure: Vec<StructureLine>,
    pub contents: Vec<ContentRecord>,
}

impl Report {
    /// The structure section as rendered lines.
    pub fn structure_lines(&self) -> Vec<String> {
        self.structure.iter().map(ToString::to_string).collect()
    }

    pub fn unreadable_count(&self) -> usize {
        self.contents
            .iter()
            .filter(|record| record.content.is_unreadable())
            .count()
    }
}

/// Outcome of a full [`run`](crate::run).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub output: PathBuf,
    pub roots: usize,
    pub files: usize,
    pub unreadable: usize,
}
