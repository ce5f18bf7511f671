use crate::error::PathdumpError;
use crate::loader::load_root_paths;
use crate::options::{CollectOptions, PathdumpOptions};
use crate::output::write_report_to_file;
use crate::tree::{depth_below, directory_line, file_line};
use crate::types::{ContentRecord, FileContent, Report, RunSummary, StructureLine};
use ignore::WalkBuilder;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
struct Walker {
    root: PathBuf,
    inner: ignore::Walk,
}
/// A directory reached by the walk and the regular files directly inside it.
struct DirListing {
    path: PathBuf,
    files: Vec<PathBuf>,
}
impl Walker {
    fn new(root: &Path, options: &CollectOptions) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links);
        if options.sorted {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        Self {
            root: root.to_path_buf(),
            inner: builder.build(),
        }
    }
    /// Groups walk entries by directory, keeping directories in pre-order.
    fn collect_listings(self) -> Vec<DirListing> {
        let mut listings: Vec<DirListing> = Vec::new();
        let mut index: HashMap<PathBuf, usize> = HashMap::new();
        for result in self.inner {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping entry under {}: {}", self.root.display(), e);
                    continue;
                }
            };
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            let is_root = entry.depth() == 0;
            let path = entry.into_path();
            if file_type.is_dir() || (is_root && path.is_dir()) {
                if let Err(e) = fs::read_dir(&path) {
                    tracing::warn!("Skipping unreadable directory {}: {}", path.display(), e);
                    continue;
                }
                index.insert(path.clone(), listings.len());
                listings.push(DirListing {
                    path,
                    files: Vec::new(),
                });
            } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
                let slot = path.parent().and_then(|parent| index.get(parent)).copied();
                match slot {
                    Some(i) => listings[i].files.push(path),
                    None => tracing::warn!("No parent directory recorded for {}", path.display()),
                }
            } else {
                tracing::debug!("Skipping non-regular entry {}", path.display());
            }
        }
        listings
    }
}
fn read_text(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.utf8_error()))
}
fn read_file_content(path: &Path) -> FileContent {
    match read_text(path) {
        Ok(text) => FileContent::Text(text),
        Err(e) => {
            tracing::warn!("Could not read {}: {}", path.display(), e);
            FileContent::Unreadable(e.to_string())
        }
    }
}
/// Walks every root path in order and gathers the tree lines and file contents.
///
/// Never fails: unreadable files become [`FileContent::Unreadable`] records,
/// walk errors are logged and skipped, and roots that are neither a file nor
/// a directory become [`StructureLine::NotFound`] lines.
pub fn collect(roots: &[String], options: &CollectOptions) -> Report {
    let mut report = Report::default();
    for root in roots {
        let path = Path::new(root);
        if path.is_file() {
            tracing::debug!("Collecting file root {}", root);
            report.structure.push(file_line(0, path));
            report.contents.push(ContentRecord {
                path: path.to_path_buf(),
                content: read_file_content(path),
            });
        } else if path.is_dir() {
            tracing::debug!("Collecting directory root {}", root);
            collect_directory(path, options, &mut report);
        } else {
            tracing::warn!("Root path not found: {}", root);
            report
                .structure
                .push(StructureLine::NotFound { path: root.clone() });
        }
    }
    report
}
fn collect_directory(root: &Path, options: &CollectOptions, report: &mut Report) {
    for listing in Walker::new(root, options).collect_listings() {
        let line = directory_line(root, &listing.path);
        let file_depth = depth_below(root, &listing.path) + 1;
        report.structure.push(line);
        for file in listing.files {
            report.structure.push(file_line(file_depth, &file));
            let content = read_file_content(&file);
            report.contents.push(ContentRecord {
                path: file,
                content,
            });
        }
    }
    tracing::debug!("Finished walking {}", root.display());
}
/// Loads the root paths, collects them and writes the report.
///
/// # Errors
///
/// Returns [`PathdumpError::ConfigNotFound`] before touching anything else if
/// the configuration file does not exist, and propagates loader and writer
/// failures.
pub fn run(options: &PathdumpOptions) -> Result<RunSummary, PathdumpError> {
    if !options.config_path.exists() {
        return Err(PathdumpError::ConfigNotFound(options.config_path.clone()));
    }
    let roots = load_root_paths(&options.config_path)?;
    let report = collect(&roots, &options.collect);
    write_report_to_file(&report, options.format, &options.output_path)?;
    tracing::info!(
        "Wrote {} file(s) from {} root(s) to {}",
        report.contents.len(),
        roots.len(),
        options.output_path.display()
    );
    Ok(RunSummary {
        output: options.output_path.clone(),
        roots: roots.len(),
        files: report.contents.len(),
        unreadable: report.unreadable_count(),
    })
}
