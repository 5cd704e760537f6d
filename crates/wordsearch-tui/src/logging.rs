use env_logger::{Env, Target};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

/// Where log records go; stderr would corrupt the alternate screen
pub fn log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("wordsearch").join("wordsearch.log"))
}

/// Send `log` records to the log file, filtered by `RUST_LOG` (default `warn`).
///
/// Returns the file path, or `None` if logging could not be set up.
pub fn init() -> Option<PathBuf> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()
        .ok()?;
    Some(path)
}
