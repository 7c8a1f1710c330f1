//! Encode path: renders a word map back into canonical line text.

use crate::error::{BuildError, BuildResult};
use crate::words::{is_valid_word, WordMap, WORD_ORDER};

/// Render a word map as one line of canonical repcode text.
///
/// Words are emitted in the fixed canonical order (never insertion order),
/// each as the letter immediately followed by its value, joined by single
/// spaces. Negative values get a `-` prefix; non-negative values carry no
/// sign even if the source line had an explicit `+`. An empty map yields an
/// empty string.
pub fn build(words: &WordMap) -> BuildResult<String> {
    for (letter, _) in words.iter() {
        if !is_valid_word(letter) {
            return Err(BuildError::UnknownWord { letter });
        }
    }

    let mut rendered = Vec::with_capacity(words.len());
    for &letter in WORD_ORDER.iter() {
        if let Some(value) = words.get(letter) {
            rendered.push(format!("{}{}", letter, value));
        }
    }
    Ok(rendered.join(" "))
}

/// Like [`build`], appending a `;` comment after the rendered words.
pub fn build_with_comment(words: &WordMap, comment: &str) -> BuildResult<String> {
    let mut line = build(words)?;
    line.push_str(" ; ");
    line.push_str(comment);
    Ok(line)
}
