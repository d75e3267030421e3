//! Process-wide tracing subscriber for the server binary.
//!
//! `RUST_LOG` overrides the default filter. `ABOUTME_LOG_FORMAT=text` swaps
//! the JSON lines for human-readable output during local runs.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,aboutme=info,actix_web=info,sqlx=warn,sea_orm=warn";

fn wants_text_output() -> bool {
    std::env::var("ABOUTME_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("text"))
}

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    if wants_text_output() {
        registry.with(fmt::layer().with_target(true)).init();
    } else {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true),
            )
            .init();
    }
}
