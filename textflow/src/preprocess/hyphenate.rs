// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Soft hyphen handling.

use alloc::string::String;
use alloc::vec::Vec;

use crate::style::HyphenateLimitChars;

/// U+00AD SOFT HYPHEN.
pub(crate) const SOFT_HYPHEN: char = '\u{AD}';

/// Removes every soft hyphen.
pub(crate) fn strip_soft_hyphens(text: &str) -> String {
    if text.contains(SOFT_HYPHEN) {
        text.chars().filter(|ch| *ch != SOFT_HYPHEN).collect()
    } else {
        text.into()
    }
}

/// Removes soft hyphens that violate `limits`: those in words shorter than `limits.word`, and
/// those with fewer than `limits.before` characters before or `limits.after` after them within
/// their word.
pub(crate) fn apply_limit_chars(text: &str, limits: HyphenateLimitChars) -> String {
    if !text.contains(SOFT_HYPHEN) {
        return text.into();
    }
    let mut out = String::with_capacity(text.len());
    let mut word: Vec<char> = Vec::new();
    for ch in text.chars() {
        if ch.is_whitespace() {
            flush_word(&mut out, &mut word, limits);
            out.push(ch);
        } else {
            word.push(ch);
        }
    }
    flush_word(&mut out, &mut word, limits);
    out
}

fn flush_word(out: &mut String, word: &mut Vec<char>, limits: HyphenateLimitChars) {
    let len = word.iter().filter(|ch| **ch != SOFT_HYPHEN).count();
    let mut before = 0;
    for &ch in word.iter() {
        if ch == SOFT_HYPHEN {
            let after = len - before;
            if len >= limits.word && before >= limits.before && after >= limits.after {
                out.push(ch);
            }
        } else {
            before += 1;
            out.push(ch);
        }
    }
    word.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_all() {
        assert_eq!(strip_soft_hyphens("hy\u{AD}phen\u{AD}ate"), "hyphenate");
    }

    #[test]
    fn limits_suppress_breaks_near_word_edges() {
        let limits = HyphenateLimitChars {
            word: 5,
            before: 3,
            after: 3,
        };
        // The break in "about" is too close to the start; "hyphenate" keeps both.
        assert_eq!(
            apply_limit_chars("a\u{AD}bout hyp\u{AD}hen\u{AD}ate", limits),
            "about hyp\u{AD}hen\u{AD}ate"
        );
        // "cat" is shorter than the minimum word length.
        assert_eq!(apply_limit_chars("ca\u{AD}t", limits), "cat");
    }
}
