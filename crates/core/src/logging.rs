use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

/// Directory for rolling log files: `TRUEGOTO_LOG_DIR`, else `$HOME/.truegoto/logs`.
pub fn log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TRUEGOTO_LOG_DIR") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".truegoto").join("logs")
}

/// Install the global subscriber: `<log_dir>/<component>.<date>` files, plus
/// stderr when `to_stderr` is set. `RUST_LOG` overrides the `info` default.
///
/// The returned guard flushes the file writer on drop. If the host already
/// installed a subscriber, that one stays and the failure is reported on it.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    init_logging_in(&log_dir(), component, to_stderr)
}

pub fn init_logging_in(dir: &Path, component: &str, to_stderr: bool) -> WorkerGuard {
    if let Err(err) = std::fs::create_dir_all(dir) {
        eprintln!("truegoto: cannot create log directory {}: {}", dir.display(), err);
    }

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, component));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = vec![
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .boxed(),
    ];
    if to_stderr {
        layers.push(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .boxed(),
        );
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init();

    match installed {
        Ok(()) => tracing::debug!("Logging to {}", dir.display()),
        Err(err) => tracing::warn!(
            "Keeping the existing tracing subscriber, {} logs not written to {}: {}",
            component,
            dir.display(),
            err
        ),
    }

    guard
}
