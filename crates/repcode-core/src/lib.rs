//! # Repcode Core
//!
//! Codec for the repcode machine-control dialect: single-letter word codes
//! (`G`, `X`, `F`, ...) each followed by a signed numeric value, combined on
//! one line with an optional `;` comment.
//!
//! The decode path parses a raw line into a [`WordMap`] with zero loss of the
//! original numeric representation; the encode path serializes a map back
//! into canonical line text. Round-tripping `parse(build(m))` always yields a
//! map equal to `m`; `build(parse(line))` normalizes word order and redundant
//! `+` signs but preserves every digit.

pub mod codec;
pub mod error;
pub mod value;
pub mod words;

pub use codec::{build, build_with_comment, parse, parse_symbols, tokenize, Symbol, SymbolKind};
pub use error::{BuildError, BuildResult, ParseError, ParseResult};
pub use value::NumericValue;
pub use words::{is_valid_word, WordMap, WORD_ORDER};
