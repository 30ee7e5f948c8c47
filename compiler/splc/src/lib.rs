//! Command-line front end for the SPL interpreter.
//!
//! The `spl` binary is a thin argument parser over [`commands`]; error
//! rendering lives in [`report`] so it can be tested without a process.

pub mod commands;
pub mod report;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for diagnostic output on stderr.
///
/// Safe to call multiple times. Nothing is installed unless `RUST_LOG` or
/// `SPL_TRACE_TREE` is set; `SPL_TRACE_TREE` swaps the flat formatter for an
/// indented span tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let tree = std::env::var_os("SPL_TRACE_TREE").is_some();
        if std::env::var_os("RUST_LOG").is_none() && !tree {
            return;
        }
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let tree_layer = tree.then(|| {
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true)
        });
        let flat_layer = (!tree).then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
        });
        tracing_subscriber::registry()
            .with(filter)
            .with(tree_layer)
            .with(flat_layer)
            .init();
    });
}
