/// Application-level constants
pub const APP_NAME: &str = "Goutlab";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable that overrides the log filter.
pub const LOG_ENV_VAR: &str = "RUST_LOG";

/// Log filter used when `RUST_LOG` is unset or invalid.
/// Extraction emits a trace event per skipped line, so keep this crate at info.
pub fn default_log_filter() -> &'static str {
    "goutlab_lib=info,warn"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_goutlab() {
        assert_eq!(APP_NAME, "Goutlab");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn default_filter_parses() {
        let filter = tracing_subscriber::EnvFilter::try_new(default_log_filter());
        assert!(filter.is_ok());
    }
}
