//! Tracing setup
//!
//! The TUI owns the terminal, so logs go to a file under the local data
//! directory. Stderr is only used when that file can't be created.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log file name inside the data directory
const LOG_FILE_NAME: &str = "dialogkit.log";

/// Default log location, e.g. `~/.local/share/dialogkit/dialogkit.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("dialogkit").join(LOG_FILE_NAME))
}

fn create_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

/// Install the global subscriber; returns the log file in use, if any
///
/// Filtering follows `RUST_LOG`, defaulting to `dialogkit=info`.
pub fn init(path: Option<&Path>) -> Option<PathBuf> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dialogkit=info,dialogkit_core=info,dialogkit_tui=info"));

    let file = path.and_then(|p| match create_log_file(p) {
        Ok(file) => Some((file, p.to_path_buf())),
        Err(e) => {
            eprintln!("Cannot open log file {}: {}", p.display(), e);
            None
        }
    });

    match file {
        Some((file, path)) => {
            let fmt_layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .init();
            Some(path)
        }
        None => {
            let fmt_layer = fmt::layer().with_target(false).with_writer(io::stderr);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .init();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_log_file_makes_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(LOG_FILE_NAME);
        create_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
