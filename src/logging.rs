//! Debug-build logging to a file
//!
//! The terminal is owned by the UI, so records go to `tickr.log` in the OS
//! cache directory. Level comes from `TICKR_LOG` (default `info`).

use std::path::PathBuf;

pub const LOG_ENV: &str = "TICKR_LOG";
pub const LOG_FILE: &str = "tickr.log";

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("tickr").join(LOG_FILE))
}

/// Initialise `env_logger`. Only active in debug builds; a no-op otherwise.
pub fn init() {
    #[cfg(debug_assertions)]
    {
        use std::fs::OpenOptions;
        use std::io::Write;

        let Some(path) = log_path() else {
            return;
        };
        if let Some(dir) = path.parent()
            && std::fs::create_dir_all(dir).is_err()
        {
            return;
        }
        let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
            return;
        };

        let result = env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {}: {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    record.args()
                )
            })
            .try_init();

        if result.is_ok() {
            log::debug!("Logging to {}", path.display());
        }
    }
}
