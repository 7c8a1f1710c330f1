//! Lexical scanning of one repcode line into classified symbols.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ParseError, ParseResult};

/// Classification of one lexical symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKind {
    /// A single uppercase letter `A`-`Z` (input is uppercased).
    Letter,
    /// A `+` or `-` sign.
    Sign,
    /// A maximal run of one or more decimal digits.
    Digits,
    /// A literal `.`.
    Dot,
    /// A maximal run of one or more spaces.
    ///
    /// Whitespace is kept as an explicit symbol rather than discarded so the
    /// parser can reject whitespace injected inside a word's sign/value run
    /// (e.g. `X +0`).
    Whitespace,
    /// Sentinel terminating every symbol sequence; carries no text.
    End,
}

/// One classified lexical unit, emitted in line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// What kind of symbol this is.
    pub kind: SymbolKind,
    /// The literal text, uppercased for letters. Empty for `End`.
    pub text: String,
    /// Byte offset of the first character within the line.
    pub position: usize,
}

impl Symbol {
    fn new(kind: SymbolKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Short human-readable description used in diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            SymbolKind::End => "end of line".to_string(),
            SymbolKind::Whitespace => "whitespace".to_string(),
            _ => format!("{:?} {:?}", self.kind, self.text),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10} {}", format!("{:?}", self.kind), self.text)
    }
}

/// Scan one line into its symbol sequence.
///
/// Everything from the first `;` to the end of the line is dropped before
/// scanning. Consecutive digits collapse into one `Digits` symbol and
/// consecutive spaces into one `Whitespace` symbol. A trailing `End` symbol
/// is always appended, so the result is never empty.
///
/// Fails with [`ParseError::UnrecognizedCharacter`] on any character outside
/// the repcode alphabet.
pub fn tokenize(line: &str) -> ParseResult<Vec<Symbol>> {
    let text = match line.find(';') {
        Some(comment_start) => &line[..comment_start],
        None => line,
    };

    let mut symbols: Vec<Symbol> = Vec::new();
    for (position, ch) in text.char_indices() {
        match ch {
            ' ' => match symbols.last_mut() {
                Some(last) if last.kind == SymbolKind::Whitespace => last.text.push(ch),
                _ => symbols.push(Symbol::new(SymbolKind::Whitespace, " ", position)),
            },
            'a'..='z' | 'A'..='Z' => {
                symbols.push(Symbol::new(
                    SymbolKind::Letter,
                    ch.to_ascii_uppercase(),
                    position,
                ));
            }
            '+' | '-' => symbols.push(Symbol::new(SymbolKind::Sign, ch, position)),
            '.' => symbols.push(Symbol::new(SymbolKind::Dot, ".", position)),
            '0'..='9' => match symbols.last_mut() {
                Some(last) if last.kind == SymbolKind::Digits => last.text.push(ch),
                _ => symbols.push(Symbol::new(SymbolKind::Digits, ch, position)),
            },
            _ => return Err(ParseError::UnrecognizedCharacter { ch, position }),
        }
    }
    symbols.push(Symbol::new(SymbolKind::End, "", text.len()));
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<SymbolKind> {
        tokenize(line).unwrap().iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_empty_line() {
        let symbols = tokenize("").unwrap();
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].kind, SymbolKind::End);
    }

    #[test]
    fn test_digit_runs_collapse() {
        let symbols = tokenize("G92").unwrap();
        assert_eq!(symbols[0].text, "G");
        assert_eq!(symbols[1].kind, SymbolKind::Digits);
        assert_eq!(symbols[1].text, "92");
        assert_eq!(symbols[2].kind, SymbolKind::End);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        use SymbolKind::*;
        assert_eq!(
            kinds("G1   X0"),
            vec![Letter, Digits, Whitespace, Letter, Digits, End]
        );
    }

    #[test]
    fn test_letters_are_uppercased() {
        let symbols = tokenize("m101").unwrap();
        assert_eq!(symbols[0].text, "M");
    }

    #[test]
    fn test_decimal_shape() {
        use SymbolKind::*;
        assert_eq!(
            kinds("X-1.23456"),
            vec![Letter, Sign, Digits, Dot, Digits, End]
        );
    }

    #[test]
    fn test_comment_is_stripped_before_scanning() {
        let symbols = tokenize("M101 ;S0 T0").unwrap();
        let texts: Vec<&str> = symbols.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["M", "101", " ", ""]);
    }

    #[test]
    fn test_comment_hides_bad_characters() {
        assert!(tokenize("G1 ; anything: goes, here!").is_ok());
    }

    #[test]
    fn test_unrecognized_character() {
        assert_eq!(
            tokenize("G1 X-5 Y:1 Z0"),
            Err(ParseError::UnrecognizedCharacter {
                ch: ':',
                position: 8
            })
        );
    }

    #[test]
    fn test_positions() {
        let symbols = tokenize("G1 X0").unwrap();
        let positions: Vec<usize> = symbols.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);
    }
}
