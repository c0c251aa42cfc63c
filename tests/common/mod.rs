//! Common test utilities and logging infrastructure
//!
//! Import this module in integration tests:
//! ```rust,ignore
//! mod common;
//! use common::init_test_logging;
//! ```
//!
//! The library logs through the `log` facade; `tracing-subscriber` bridges
//! those records so they show up in captured test output.
//!
//! # Environment Variables
//!
//! - `RUST_LOG=debug` - Enable debug logging in tests
//! - `RUST_LOG=charm_text::renderables=debug` - Table layout decisions
//! - `TEST_LOG_JSON=1` - Output JSON format for CI parsing

#![allow(dead_code)]

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use charm_text::ansi::strip_ansi;

static INIT: Once = Once::new();

/// Initialize test logging. Idempotent.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let use_json = std::env::var("TEST_LOG_JSON").is_ok();

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("charm_text=debug,test=info"));

        if use_json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_ansi(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// Strip escape sequences and return an owned string.
pub fn plain(s: &str) -> String {
    strip_ansi(s).into_owned()
}

/// Assert every line of `rendered` has the same visible width.
pub fn assert_rectangular(rendered: &str) {
    let widths: Vec<usize> = rendered
        .lines()
        .map(charm_text::cells::visible_len)
        .collect();
    if widths.windows(2).any(|w| w[0] != w[1]) {
        tracing::error!(widths = ?widths, "ragged table");
        panic!("ragged table, line widths {widths:?}:\n{}", plain(rendered));
    }
    tracing::trace!(lines = widths.len(), width = widths.first().copied(), "table is rectangular");
}
