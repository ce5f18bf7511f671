//! # Pathdump
//!
//! `pathdump` walks a list of files and directories, renders an indented tree of
//! everything it visits and concatenates the contents of every file into a
//! single text report.
//!
//! The work happens in three stages: [`load_root_paths`] reads the list of
//! roots, [`collect`] walks them into a [`Report`], and
//! [`output::write_report_to_file`] serializes it. [`run`] chains all three.
//!
//! A file that cannot be read or decoded never aborts a run. Its record holds
//! [`FileContent::Unreadable`], rendered inline as `[Error reading file: ...]`.
//!
//! # Example
//!
//! ```no_run
//! use pathdump::{PathdumpBuilder, run};
//!
//! let options = PathdumpBuilder::new("folders.txt")
//!     .output_path("output.txt")
//!     .sorted(true)
//!     .build();
//!
//! let summary = run(&options).expect("Failed to write report");
//! println!("{} files written to {}", summary.files, summary.output.display());
//! ```

mod engine;
mod error;
mod loader;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{collect, run};
pub use error::PathdumpError;
pub use loader::{load_root_paths, parse_root_paths};
pub use options::{
    CollectOptions, DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_FILE, OutputFormat, PathdumpBuilder,
    PathdumpOptions,
};
pub use types::{ContentRecord, FileContent, Report, RunSummary, StructureLine};
