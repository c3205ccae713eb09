//! tree-sitter glue for the Kotlin external scanner.
//!
//! Exports the C symbols a generated `parser.c` expects from an external
//! scanner and forwards each call to [`kotlin_scanner_core`]. Link the
//! `staticlib` output next to the parser instead of compiling a
//! hand-written `scanner.c`.
//!
//! # Logging
//!
//! Scanner decisions are emitted as `tracing` events. Set `RUST_LOG`
//! (for example `RUST_LOG=kotlin_scanner_core=trace`) before the host
//! creates its first parser to print them to stderr.

use std::sync::Once;

pub mod ffi;
#[cfg(test)]
mod test_support;
mod ts_lexer;

pub use ts_lexer::{HostLexer, TSLexer};

/// Size of the buffer tree-sitter hands to `serialize`
/// (`TREE_SITTER_SERIALIZATION_BUFFER_SIZE`).
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// Tracing initialization guard (ensures init happens only once).
static TRACING_INIT: Once = Once::new();

/// Initialize tracing for scanner debugging.
///
/// Enable with `RUST_LOG=kotlin_scanner_core=trace`. Does nothing when
/// `RUST_LOG` is unset or when the host already installed a global
/// subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .try_init();
        }
    });
}
