use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;
use env_logger::{Builder, Env, Target};

use crate::errors::{AppError, AppResult};

/// Log file name for a process started at the current local time.
pub fn log_file_name() -> String {
    format!("{}.log", Local::now().format("%Y_%m_%d_%H_%M"))
}

fn open_log_file(dir: &Path) -> AppResult<(PathBuf, File)> {
    fs::create_dir_all(dir)
        .map_err(|e| AppError::ConfigError(format!("Cannot create log directory {}: {}", dir.display(), e)))?;

    let path = dir.join(log_file_name());
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| AppError::ConfigError(format!("Cannot open log file {}: {}", path.display(), e)))?;

    Ok((path, file))
}

/// Installs the global logger. `RUST_LOG` wins over the `info` default; with a log
/// directory, records go to a per-start file instead of stderr.
pub fn init(log_dir: Option<&Path>) -> AppResult<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{}] {} {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.line().unwrap_or(0),
            record.target(),
            record.level(),
            record.args()
        )
    });

    let log_path = match log_dir {
        Some(dir) => {
            let (path, file) = open_log_file(dir)?;
            builder.target(Target::Pipe(Box::new(file)));
            Some(path)
        }
        None => None,
    };

    builder
        .try_init()
        .map_err(|e| AppError::ConfigError(format!("Logger already initialised: {}", e)))?;

    log::info!("Logging is initiated");
    if let Some(path) = log_path {
        log::info!("Writing logs to {}", path.display());
    }
    Ok(())
}
