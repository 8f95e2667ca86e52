//! Log filtering for the preview binary.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset, blank or unparsable
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the log filter from `RUST_LOG`-style directives
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| match EnvFilter::try_new(d) {
            Ok(filter) => Some(filter),
            Err(e) => {
                eprintln!("Ignoring invalid RUST_LOG '{}': {}", d, e);
                None
            }
        })
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the stderr subscriber; stdout carries the rendered output
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(directives.as_deref()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_directives_are_applied() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(
            log_filter(Some("warn,schemaform=trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }

    #[test]
    fn test_invalid_directives_fall_back() {
        assert_eq!(
            log_filter(Some("schemaform=verbose")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}
