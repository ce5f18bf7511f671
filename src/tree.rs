//! Internal helpers for naming and indenting structure lines.

use crate::types::StructureLine;
use std::path::{Component, Path};

/// Number of path components `dir` lies below `root`.
///
/// Both paths are compared component-wise, so a trailing separator or a `.`
/// segment on the root does not shift the result. The root itself is depth 0.
pub(crate) fn depth_below(root: &Path, dir: &Path) -> usize {
    match dir.strip_prefix(root) {
        Ok(relative) => relative
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .count(),
        Err(_) => 0,
    }
}

/// Base name of `path` as shown in the tree.
///
/// Paths ending in `.` or `..` use that component. Other paths without a
/// final name (`/`) fall back to the path as written, minus trailing separators.
pub(crate) fn display_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }
    match path.components().next_back() {
        Some(Component::ParentDir) => return "..".to_owned(),
        Some(Component::CurDir) => return ".".to_owned(),
        _ => {}
    }
    path.to_string_lossy()
        .trim_end_matches(std::path::is_separator)
        .to_owned()
}

pub(crate) fn directory_line(root: &Path, dir: &Path) -> StructureLine {
    StructureLine::Directory {
        depth: depth_below(root, dir),
        name: display_name(dir),
    }
}

pub(crate) fn file_line(depth: usize, file: &Path) -> StructureLine {
    StructureLine::File {
        depth,
        name: display_name(file),
    }
}
