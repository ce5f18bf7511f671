//! Command-line interface for pathdump.
//!
//! Reads the root paths listed in a configuration file, walks them and writes
//! the tree plus every file's contents into a single report.

use clap::{Parser, ValueEnum};
use pathdump::{
    DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_FILE, PathdumpBuilder, PathdumpError, PathdumpOptions, run,
};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::exit;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// pathdump — dump a tree and the contents of listed paths into one file
#[derive(Parser)]
#[command(name = "pathdump", version, about, long_about = None)]
struct Cli {
    /// File listing one root path per line
    #[arg(default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Report file to write (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Keep the file system's directory order instead of sorting by name
    #[arg(long)]
    unsorted: bool,

    /// Descend into symlinked directories
    #[arg(long)]
    follow_links: bool,

    /// Exit without waiting for Enter
    #[arg(long)]
    no_pause: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for pathdump::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => pathdump::OutputFormat::Text,
            OutputFormat::Json => pathdump::OutputFormat::Json,
        }
    }
}

impl Cli {
    fn into_options(self) -> (PathdumpOptions, bool) {
        let options = PathdumpBuilder::new(self.config)
            .output_path(self.output)
            .format(self.format.into())
            .sorted(!self.unsorted)
            .follow_links(self.follow_links)
            .build();
        (options, !self.no_pause)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let (options, pause) = cli.into_options();

    let code = match run(&options) {
        Ok(summary) => {
            println!("Done: output written to '{}'.", summary.output.display());
            0
        }
        Err(PathdumpError::ConfigNotFound(path)) => {
            eprintln!("Configuration file '{}' not found.", path.display());
            1
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    if pause {
        wait_for_enter();
    }
    exit(code);
}

/// Blocks until Enter is pressed, only when attached to a terminal.
fn wait_for_enter() {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return;
    }
    print!("Press Enter to exit...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = stdin.lock().read_line(&mut line);
}
