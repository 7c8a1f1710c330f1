//! Grammar layer: turns a symbol sequence into a word map.

use crate::codec::tokenizer::{tokenize, Symbol, SymbolKind};
use crate::error::{ParseError, ParseResult};
use crate::value::NumericValue;
use crate::words::WordMap;

/// Decode one raw line into a word map.
///
/// Tokenizes the line and parses the resulting symbol sequence. Fails fast on
/// the first grammar violation; on error the whole line is rejected and no
/// partial map is returned.
pub fn parse(line: &str) -> ParseResult<WordMap> {
    let symbols = tokenize(line)?;
    parse_symbols(&symbols)
}

/// Parse an already-tokenized symbol sequence into a word map.
///
/// Grammar, one word at a time until the `End` sentinel:
/// whitespace between words is skipped; each word is a letter, an optional
/// immediately-adjacent sign, and a numeric body shaped `DIGITS`,
/// `DIGITS . DIGITS`, or `. DIGITS` with no intervening whitespace.
/// Sequences from [`tokenize`] always end with the sentinel; a hand-built
/// slice without one is treated as ending at its last symbol.
pub fn parse_symbols(symbols: &[Symbol]) -> ParseResult<WordMap> {
    let mut words = WordMap::new();
    let mut pos = 0;

    loop {
        match kind_at(symbols, pos) {
            SymbolKind::End => break,
            SymbolKind::Whitespace => {
                pos += 1;
                continue;
            }
            SymbolKind::Letter => {}
            _ => {
                let (found, position) = describe_at(symbols, pos);
                return Err(ParseError::ExpectedLetter { found, position });
            }
        }

        let letter = symbols[pos].text.chars().next().unwrap_or('?');
        if words.contains(letter) {
            return Err(ParseError::DuplicateWord { letter });
        }
        pos += 1;

        // Optional sign, directly adjacent to the letter. Whitespace here
        // (or anywhere before the numeric body) falls through to the value
        // check below and is rejected.
        let mut negative = false;
        if kind_at(symbols, pos) == SymbolKind::Sign {
            negative = symbols[pos].text == "-";
            pos += 1;
        }

        let value = if kind_at(symbols, pos) == SymbolKind::Digits
            && kind_at(symbols, pos + 1) == SymbolKind::Dot
        {
            if kind_at(symbols, pos + 2) != SymbolKind::Digits {
                let (found, position) = describe_at(symbols, pos + 2);
                return Err(ParseError::InvalidNumber {
                    letter,
                    detail: format!("expected digits after the decimal point, found {}", found),
                    position,
                });
            }
            let value =
                NumericValue::decimal(negative, &symbols[pos].text, &symbols[pos + 2].text);
            pos += 3;
            value
        } else if kind_at(symbols, pos) == SymbolKind::Dot
            && kind_at(symbols, pos + 1) == SymbolKind::Digits
        {
            let value = NumericValue::decimal(negative, "", &symbols[pos + 1].text);
            pos += 2;
            value
        } else if kind_at(symbols, pos) == SymbolKind::Digits {
            let value = NumericValue::integer(negative, &symbols[pos].text);
            pos += 1;
            value
        } else {
            let (found, position) = describe_at(symbols, pos);
            return Err(ParseError::InvalidNumber {
                letter,
                detail: format!("expected a numeric value, found {}", found),
                position,
            });
        };

        words.insert_unchecked(letter, value);
    }

    Ok(words)
}

fn kind_at(symbols: &[Symbol], index: usize) -> SymbolKind {
    symbols
        .get(index)
        .map(|s| s.kind)
        .unwrap_or(SymbolKind::End)
}

fn describe_at(symbols: &[Symbol], index: usize) -> (String, usize) {
    match symbols.get(index) {
        Some(symbol) => (symbol.describe(), symbol.position),
        None => (
            "end of line".to_string(),
            symbols
                .last()
                .map(|s| s.position + s.text.len())
                .unwrap_or(0),
        ),
    }
}
