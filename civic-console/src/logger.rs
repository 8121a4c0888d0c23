//! Logging setup
//!
//! Console output always; a daily rotating file when a log directory is set.
//! Both sinks switch to JSON lines together.

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the logging system
///
/// # Arguments
/// * `level` - default filter, `RUST_LOG` wins when set
/// * `json_format` - JSON lines instead of human-readable text
/// * `log_dir` - directory for `civic-console.YYYY-MM-DD` files
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (console_text, console_json) = if json_format {
        let layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr);
        (None, Some(layer))
    } else {
        let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
        (Some(layer), None)
    };

    let (file_text, file_json) = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            fs::create_dir_all(log_dir)?;
            let writer = std::sync::Mutex::new(RollingFileAppender::new(
                Rotation::DAILY,
                log_dir,
                "civic-console",
            ));
            if json_format {
                (None, Some(fmt::layer().json().with_writer(writer)))
            } else {
                (Some(fmt::layer().with_ansi(false).with_writer(writer)), None)
            }
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_text)
        .with(console_json)
        .with(file_text)
        .with(file_json)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_file_logging_creates_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let log_dir = dir.path().join("logs");
        init_logger_with_file("info", true, log_dir.to_str()).unwrap();
        tracing::info!(test = true, "file logging ready");
        assert!(log_dir.is_dir());
    }
}
