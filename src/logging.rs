use std::backtrace::Backtrace;
use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::LoggingConfig;

pub fn init_tracing(cfg: &LoggingConfig) -> Result<()> {
    subscriber(cfg)?
        .try_init()
        .context("failed to install tracing subscriber")?;
    set_panic_hook();
    Ok(())
}

/// Console output filtered by `RUST_LOG` (or `cfg.rust_log`), plus an optional
/// plain-text file receiving INFO and above with source locations.
fn subscriber(cfg: &LoggingConfig) -> Result<impl Subscriber + Send + Sync + 'static> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.rust_log));
    let file = cfg.file.as_deref().map(open_log_file).transpose()?;

    Ok(tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_filter(filter))
        .with(file.map(|file| {
            fmt::layer()
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_writer(file)
                .with_filter(LevelFilter::INFO)
        })))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let message = if let Some(message) = info.payload().downcast_ref::<&str>() {
            *message
        } else if let Some(message) = info.payload().downcast_ref::<String>() {
            message.as_str()
        } else {
            "unknown panic"
        };

        let backtrace = Backtrace::capture();

        if let Some(location) = info.location() {
            tracing::error!(
                panic = %message,
                location = %location,
                backtrace = %backtrace,
                "panic"
            );
        } else {
            tracing::error!(panic = %message, backtrace = %backtrace, "panic");
        }
    }));
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::subscriber;
    use crate::config::LoggingConfig;

    fn scratch_log(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("fyyur-logging-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn log_file_keeps_info_and_above_with_location() {
        let path = scratch_log("app.log");
        let _ = std::fs::remove_file(&path);
        let cfg = LoggingConfig {
            rust_log: "warn".to_string(),
            file: Some(path.clone()),
        };

        let subscriber = subscriber(&cfg).expect("subscriber should build");
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("debug line stays out");
            tracing::info!("venue 7 was listed");
            tracing::error!("venue 8 could not be saved");
        });

        let contents = std::fs::read_to_string(&path).expect("log file should exist");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2, "{contents}");
        assert!(lines[0].contains("INFO") && lines[0].contains("venue 7 was listed"));
        assert!(lines[1].contains("ERROR") && lines[1].contains("venue 8 could not be saved"));
        assert!(lines.iter().all(|line| line.contains("src/logging.rs:")));
        assert!(lines.iter().all(|line| line.starts_with(|c: char| c.is_ascii_digit())));
        assert!(!contents.contains('\u{1b}'), "file output should be plain text");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unwritable_log_path_is_reported() {
        let blocker = scratch_log("not-a-dir");
        std::fs::create_dir_all(blocker.parent().expect("scratch dir has a parent"))
            .expect("scratch dir");
        std::fs::write(&blocker, b"").expect("blocker file");
        let cfg = LoggingConfig {
            rust_log: "info".to_string(),
            file: Some(blocker.join("app.log")),
        };

        let err = subscriber(&cfg).err().expect("a file cannot hold a log directory");

        assert!(err.to_string().contains("failed to create log directory"), "{err:#}");
    }
}
