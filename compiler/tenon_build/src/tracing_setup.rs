//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Crates whose events a bare level in `RUST_LOG` selects.
const TENON_TARGETS: [&str; 3] = ["tenon_ir", "tenon_build", "tenon_value"];

/// Install a global subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, and only the first call has an
/// effect. A bare level such as `RUST_LOG=debug` applies to the Tenon crates
/// only; full directives (`RUST_LOG=tenon_build=trace,other=info`) are used
/// as given. Other targets log warnings and errors.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Ok(raw) = std::env::var("RUST_LOG") else {
            return;
        };
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .parse_lossy(scoped_directives(&raw));
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already installed");
        }
    });
}

/// Expand a bare level into one directive per Tenon crate.
fn scoped_directives(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() || raw.contains(['=', ',']) {
        return raw.to_string();
    }
    TENON_TARGETS
        .iter()
        .map(|target| format!("{target}={raw}"))
        .collect::<Vec<_>>()
        .join(",")
}
