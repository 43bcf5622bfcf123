//! Log setup for the terminal binary.
//!
//! The game owns the terminal in raw mode, so log lines can never go to
//! stdout/stderr. Logging is off unless a file is named, either with
//! `--log-file` or the `TUI_BREAKOUT_LOG` environment variable. The level
//! comes from `RUST_LOG` and defaults to `info`.

use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

pub const LOG_FILE_ENV: &str = "TUI_BREAKOUT_LOG";

/// Pick the log file: the command-line path wins over the environment.
pub fn resolve_log_path(cli: Option<&Path>, env: Option<OsString>) -> Option<PathBuf> {
    cli.map(Path::to_path_buf)
        .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Install `env_logger` writing to the resolved log file, if any.
///
/// Returns the path that is being logged to.
pub fn init(cli: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(path) = resolve_log_path(cli, std::env::var_os(LOG_FILE_ENV)) else {
        return Ok(None);
    };

    let file = File::create(&path)
        .map_err(|e| anyhow!("breakout: cannot create log file {}: {}", path.display(), e))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| anyhow!("breakout: logger init failed: {}", e))?;

    Ok(Some(path))
}
