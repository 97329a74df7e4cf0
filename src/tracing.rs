//! Tracing initialization.
//!
//! Filtering comes from `RECIPE_FORGE_LOG` (falling back to `RUST_LOG`), and
//! `RECIPE_FORGE_LOG_FORMAT=json` switches to one JSON object per line. Output
//! always goes to stderr; stdout carries the MCP protocol.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan, util::SubscriberInitExt};

static INIT: Once = Once::new();

const LOG_ENV: &str = "RECIPE_FORGE_LOG";
const LOG_FORMAT_ENV: &str = "RECIPE_FORGE_LOG_FORMAT";

/// Initialize tracing. Safe to call multiple times.
pub fn init() {
    INIT.call_once(|| {
        let is_test =
            std::env::var("NEXTEST").is_ok() || std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let default_level = if is_test {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        let filter = if std::env::var_os(LOG_ENV).is_some() {
            EnvFilter::from_env(LOG_ENV)
        } else {
            EnvFilter::from_default_env()
        }
        .add_directive(default_level.into());

        let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE);

        let result = if is_test {
            builder.compact().with_test_writer().finish().try_init()
        } else if json {
            builder.json().with_writer(std::io::stderr).finish().try_init()
        } else {
            builder.compact().with_writer(std::io::stderr).finish().try_init()
        };

        // Tests share one process, where another harness may already own the subscriber
        if let Err(e) = result
            && !is_test
        {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
