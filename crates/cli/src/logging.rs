//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable holding a level or a full filter spec.
pub const LOG_ENV: &str = "SWAGGER_TS_LOG";

const CRATE_TARGETS: [&str; 2] = ["swagger_ts", "swagger_ts_core"];

/// Install the stderr `fmt` subscriber.
///
/// `SWAGGER_TS_LOG` controls the level: "trace", "debug", "info", "warn", "error"
/// or a full tracing filter spec like "swagger_ts_core=debug".
pub fn init_tracing() {
    let filter = filter_spec(std::env::var(LOG_ENV).ok().as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

/// Build the filter spec from the raw environment value.
fn filter_spec(env_value: Option<&str>) -> String {
    let scoped = |level: &str| {
        CRATE_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    };

    match env_value {
        Some(level) if is_plain_level(level) => scoped(&level.to_ascii_lowercase()),
        Some(spec) if !spec.trim().is_empty() => spec.to_string(),
        _ => scoped("info"),
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
