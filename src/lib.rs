//! # Repcode
//!
//! Command-line tools for the repcode machine-control dialect:
//!
//! - **tokens** - dump the classified lexical symbols of every line in a file
//! - **tabulate** - count `G`/`M` codes across one or more files
//! - **send** - frame commands with sequence numbers and checksums and write
//!   them to a serial device
//!
//! The codec itself lives in `repcode-core`; transport in
//! `repcode-communication`. This crate only wires them to files, a terminal,
//! and a serial port.

pub mod cli;
pub mod scan;

pub use repcode_communication as communication;
pub use repcode_core::{
    build, build_with_comment, parse, tokenize, BuildError, NumericValue, ParseError, WordMap,
};

/// Initialize the tracing subscriber for CLI usage.
///
/// Respects `RUST_LOG`, defaulting to INFO. Diagnostics go to stderr so the
/// subcommands' own output (token dumps, tabulation tables) stays clean on
/// stdout.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
