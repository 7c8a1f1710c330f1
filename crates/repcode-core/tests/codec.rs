//! End-to-end codec tests: decode a line, check the map, rebuild the line.

use repcode_core::{build, parse, BuildError, NumericValue, ParseError, WordMap};

fn int(n: i64) -> NumericValue {
    NumericValue::from_i64(n)
}

fn dec(negative: bool, int_digits: &str, frac_digits: &str) -> NumericValue {
    NumericValue::decimal(negative, int_digits, frac_digits)
}

fn map(entries: &[(char, NumericValue)]) -> WordMap {
    WordMap::from_entries(entries.iter().cloned()).unwrap()
}

#[test]
fn test_simple_parse() {
    let block = parse("G92 X0 Y0 Z0 E0").unwrap();
    assert_eq!(
        block,
        map(&[
            ('G', int(92)),
            ('X', int(0)),
            ('Y', int(0)),
            ('Z', int(0)),
            ('E', int(0)),
        ])
    );
    assert_eq!(build(&block).unwrap(), "G92 X0 Y0 Z0 E0");
}

#[test]
fn test_unspecified_parameters() {
    let block = parse("A1 B2 C3 E5 H8").unwrap();
    assert_eq!(block.get('A'), Some(&int(1)));
    assert_eq!(block.get('H'), Some(&int(8)));
    // Absent words are a defined miss, not a crash.
    assert_eq!(block.get('G'), None);
    assert_eq!(block.get('W'), None);
    // Canonical order puts E before the A-D/H tail.
    assert_eq!(build(&block).unwrap(), "E5 A1 B2 C3 H8");
}

#[test]
fn test_decimal_parse_keeps_full_precision() {
    let block = parse("G0 X-1.23456 Y+9.870 Z9.870 E.22 F1.0").unwrap();
    assert_eq!(
        block,
        map(&[
            ('G', int(0)),
            ('X', dec(true, "1", "23456")),
            ('Y', dec(false, "9", "870")),
            ('Z', dec(false, "9", "870")),
            ('E', dec(false, "", "22")),
            ('F', dec(false, "1", "0")),
        ])
    );
    // `+` dropped, trailing zeros kept, `.22` rendered with a leading 0.
    assert_eq!(
        build(&block).unwrap(),
        "G0 X-1.23456 Y9.870 Z9.870 E0.22 F1.0"
    );
}

#[test]
fn test_without_spaces() {
    let block = parse("M113S9.8T-1Q0").unwrap();
    assert_eq!(
        block,
        map(&[
            ('M', int(113)),
            ('S', dec(false, "9", "8")),
            ('T', int(-1)),
            ('Q', int(0)),
        ])
    );
    assert_eq!(build(&block).unwrap(), "M113 Q0 S9.8 T-1");
}

#[test]
fn test_reordering() {
    let block = parse("G1 X-251.0 F2100.9 E0").unwrap();
    assert_eq!(build(&block).unwrap(), "G1 X-251.0 E0 F2100.9");
}

#[test]
fn test_comments() {
    let block = parse("M101 ;S0 T0").unwrap();
    assert_eq!(block, map(&[('M', int(101))]));
    assert_eq!(build(&block).unwrap(), "M101");
}

#[test]
fn test_empty() {
    let block = parse("").unwrap();
    assert!(block.is_empty());
    assert_eq!(build(&block).unwrap(), "");
}

#[test]
fn test_all_comment_line() {
    let block = parse("   ; G1 X0 Y0 Z0 ...this is a comment").unwrap();
    assert!(block.is_empty());
    assert_eq!(build(&block).unwrap(), "");
}

#[test]
fn test_case_insensitive() {
    let block = parse("M101 p0 s1").unwrap();
    assert_eq!(block, map(&[('M', int(101)), ('P', int(0)), ('S', int(1))]));
    assert_eq!(block, parse("M101 P0 S1").unwrap());
    assert_eq!(build(&block).unwrap(), "M101 P0 S1");
}

#[test]
fn test_duplicates() {
    assert_eq!(
        parse("G0 X-7.80 Y+7.80 Z0 X1.23 E0"),
        Err(ParseError::DuplicateWord { letter: 'X' })
    );
    // Case-insensitive: a lowercase g collides with an earlier G.
    assert_eq!(
        parse("G9 M101 g0 X0 Y0 Z0 F0 E0"),
        Err(ParseError::DuplicateWord { letter: 'G' })
    );
}

#[test]
fn test_invalid_numbers() {
    for line in ["X+.", "X-5..600", "X.", "X5. Y0 Z0", "T+."] {
        assert!(
            matches!(parse(line), Err(ParseError::InvalidNumber { .. })),
            "expected InvalidNumber for {:?}, got {:?}",
            line,
            parse(line)
        );
    }
}

#[test]
fn test_valueless_word() {
    assert!(matches!(
        parse("X17.560 Y Z1.23"),
        Err(ParseError::InvalidNumber { letter: 'Y', .. })
    ));
}

#[test]
fn test_invalid_chars() {
    assert_eq!(
        parse("G1 X-5 Y:1 Z0"),
        Err(ParseError::UnrecognizedCharacter {
            ch: ':',
            position: 8
        })
    );
}

#[test]
fn test_invalid_whitespace() {
    // Whitespace inside a word's sign/value run is always rejected.
    for line in [
        "G92 X +0",
        "G92 X+0 Y 1.23",
        "G92 X+0 Y1 .23",
        "G92 X+0 Y1. 23",
        "G92 X+0 Y1. 23Q1 22 Z0",
    ] {
        assert!(parse(line).is_err(), "expected rejection of {:?}", line);
    }
}

#[test]
fn test_invalid_symbol_order() {
    for line in ["X5.06-", "X5.-06", "+X0", "0-A1"] {
        assert!(parse(line).is_err(), "expected rejection of {:?}", line);
    }
}

#[test]
fn test_build() {
    let words = map(&[
        ('M', int(12345)),
        ('Z', int(1)),
        ('Y', dec(true, "6", "666")),
        ('X', int(-1)),
    ]);
    assert_eq!(build(&words).unwrap(), "M12345 X-1 Y-6.666 Z1");
}

#[test]
fn test_invalid_build() {
    // Unknown and lowercase letters are rejected at map construction.
    assert_eq!(
        WordMap::from_entries([('G', int(1)), ('\u{00c4}', int(2))]),
        Err(BuildError::UnknownWord { letter: '\u{00c4}' })
    );
    assert_eq!(
        WordMap::from_entries([('G', int(0)), ('x', int(1)), ('y', int(2))]),
        Err(BuildError::UnknownWord { letter: 'x' })
    );
}

#[test]
fn test_long_digit_runs_do_not_overflow() {
    let line = "X99999999999999999999999999999999999999 Y-170141183460469231731687303715884105728";
    let block = parse(line).unwrap();
    assert_eq!(build(&block).unwrap(), line);
}
