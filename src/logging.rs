//! `env_logger` setup.
//!
//! The TUI owns stdout, so log lines either go to stderr (quiet by default)
//! or to a file configured under `[logging]`.

use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};

use crate::config::LoggingSettings;

/// Install the global logger. `RUST_LOG` wins over `settings.level`.
///
/// Failing to open the log file falls back to stderr; installing a second
/// logger is ignored.
pub fn init(settings: &LoggingSettings) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(settings.level.as_str()));

    let mut file_error = None;
    if let Some(path) = &settings.file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Err(e) => file_error = Some((path.clone(), e)),
        }
    }

    if builder.try_init().is_err() {
        return;
    }

    if let Some((path, e)) = file_error {
        log::warn!(
            "encore: cannot open log file {}, logging to stderr: {e}",
            path.display()
        );
    }
}
