//! The repcode codec: tokenizer, parser, and builder.
//!
//! The decode path runs raw line -> [`tokenize`] -> symbol sequence ->
//! [`parse_symbols`] -> [`WordMap`](crate::WordMap); the encode path runs
//! word map -> [`build`] -> raw line. All three stages are pure functions
//! over in-memory data, stateless between calls and safe to use from any
//! number of threads.

pub mod builder;
pub mod parser;
pub mod tokenizer;

pub use builder::{build, build_with_comment};
pub use parser::{parse, parse_symbols};
pub use tokenizer::{tokenize, Symbol, SymbolKind};
