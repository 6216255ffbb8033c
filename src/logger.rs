use log::LevelFilter;
use std::io::Write;

/// Initialize console logging.
///
/// Output goes to stderr so parsed command output on stdout stays clean.
/// The level is controlled via the `RUST_LOG` environment variable:
/// - `RUST_LOG=warn` - Warnings and errors (default)
/// - `RUST_LOG=debug` - Every git invocation with its arguments
/// - `RUST_LOG=trace` - Also exit status and output sizes
///
/// `verbose` raises the default to `debug` when `RUST_LOG` is unset.
pub fn init_logger(verbose: bool) {
    let fallback = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(fallback);

    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{:5}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .try_init()
        .ok(); // Ignore error if logger is already initialized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_is_idempotent() {
        init_logger(false);
        init_logger(true);
        log::debug!("logger initialized twice without panicking");
    }
}
