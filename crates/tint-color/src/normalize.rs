//! Input punctuation normalization
//!
//! Users on CJK input methods often type full-width punctuation, e.g.
//! `rgb（255，0，0）`. These are folded to their ASCII equivalents before any
//! parsing happens.

use std::borrow::Cow;

/// ASCII replacement for a full-width punctuation character
fn ascii_equivalent(c: char) -> Option<char> {
    Some(match c {
        '，' => ',',
        '。' => '.',
        '！' => '!',
        '？' => '?',
        '：' => ':',
        '；' => ';',
        '（' => '(',
        '）' => ')',
        '【' => '[',
        '】' => ']',
        '「' => '{',
        '」' => '}',
        '‘' | '’' => '\'',
        '“' | '”' => '"',
        _ => return None,
    })
}

/// Replace full-width punctuation with ASCII. Borrows when nothing changes.
pub fn normalize_punctuation(input: &str) -> Cow<'_, str> {
    if !input.chars().any(|c| ascii_equivalent(c).is_some()) {
        return Cow::Borrowed(input);
    }

    Cow::Owned(
        input
            .chars()
            .map(|c| ascii_equivalent(c).unwrap_or(c))
            .collect(),
    )
}
