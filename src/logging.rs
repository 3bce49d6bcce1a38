//! Log setup
//!
//! The TUI owns the terminal, so its logs go to a file under the cache
//! directory. Print mode logs to stderr. `RUST_LOG` controls the filter.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

const LOG_DIR: &str = "linkwise";
const LOG_FILE: &str = "linkwise.log";

fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder
}

/// Location of the TUI log file
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(LOG_DIR).join(LOG_FILE))
}

/// Route logs to the log file; returns its path when logging is active
pub fn init_file() -> Option<PathBuf> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = File::options().create(true).append(true).open(&path).ok()?;

    builder()
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .ok()
        .map(|_| path)
}

/// Route logs to stderr
pub fn init_stderr() {
    let _ = builder().target(Target::Stderr).try_init();
}
