use tracing_subscriber::EnvFilter;

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured filter. Calling this twice is a no-op.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(default_filter)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// A bare level applies to this crate only; anything else is a full
/// directive and passes through untouched.
fn directive(configured: &str) -> String {
    let configured = configured.trim();
    if LEVELS.iter().any(|l| l.eq_ignore_ascii_case(configured)) {
        format!("{}={configured}", env!("CARGO_PKG_NAME").replace('-', "_"))
    } else {
        configured.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_is_scoped_to_this_crate() {
        assert_eq!(directive("debug"), "projex_manager=debug");
        assert_eq!(directive(" WARN "), "projex_manager=WARN");
    }

    #[test]
    fn full_directives_pass_through() {
        for raw in ["projex_manager=trace", "info,wgpu=warn", "eframe=debug"] {
            assert_eq!(directive(raw), raw);
        }
    }
}
