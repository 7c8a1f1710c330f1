//! Error types for the repcode codec.
//!
//! Two error families, both terminal for the call that raised them: decode
//! errors (`ParseError`) and encode errors (`BuildError`). The codec never
//! logs or retries; callers receive the error and reject the whole line or
//! map. Message formatting and exit codes are the caller's business.

use thiserror::Error;

/// Errors raised while decoding a line into a word map.
///
/// Any of these means the entire input line is rejected; no partial map is
/// ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character outside the repcode alphabet was found during tokenizing.
    #[error("Unrecognized character {ch:?} at column {position}")]
    UnrecognizedCharacter { ch: char, position: usize },

    /// Something other than a word letter appeared where a word must start.
    #[error("Expected a word letter, found {found} at column {position}")]
    ExpectedLetter { found: String, position: usize },

    /// The same word letter appeared twice on one line.
    #[error("Duplicate word: already saw {letter}")]
    DuplicateWord { letter: char },

    /// The symbols after a word letter do not form a valid numeric value.
    #[error("Invalid number for word {letter}: {detail} at column {position}")]
    InvalidNumber {
        letter: char,
        detail: String,
        position: usize,
    },
}

/// Errors raised while encoding a word map into line text.
///
/// The whole map is rejected; no partial line is emitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The key is not one of the 26 recognized word letters.
    #[error("Word {letter:?} is not a valid repcode word")]
    UnknownWord { letter: char },
}

/// Result type alias for the decode path.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type alias for the encode path.
pub type BuildResult<T> = Result<T, BuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::UnrecognizedCharacter {
            ch: ':',
            position: 9,
        };
        assert_eq!(err.to_string(), "Unrecognized character ':' at column 9");

        let err = ParseError::DuplicateWord { letter: 'X' };
        assert_eq!(err.to_string(), "Duplicate word: already saw X");
    }

    #[test]
    fn test_build_error_display() {
        let err = BuildError::UnknownWord { letter: 'x' };
        assert_eq!(err.to_string(), "Word 'x' is not a valid repcode word");
    }
}
