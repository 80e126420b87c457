// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! White space processing.

use alloc::string::String;

use crate::style::WhiteSpace;

/// Applies the white space processing rules of `mode` to `text`.
///
/// Segment breaks are folded to spaces unless the mode preserves them, then runs of spaces and
/// tabs collapse to a single space (and disappear at the start and end of the text, and around
/// preserved line breaks) when the mode collapses.
pub(crate) fn process(text: &str, mode: WhiteSpace) -> String {
    let preserve_breaks = mode.preserves_line_breaks();
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let folded = if preserve_breaks {
        normalized
    } else {
        normalized.replace('\n', " ")
    };
    if !mode.collapses_spaces() {
        return folded;
    }

    let mut out = String::with_capacity(folded.len());
    let mut pending_space = false;
    for ch in folded.chars() {
        match ch {
            ' ' | '\t' => pending_space = true,
            '\n' => {
                pending_space = false;
                out.push('\n');
            }
            _ => {
                if pending_space && !out.is_empty() && !out.ends_with('\n') {
                    out.push(' ');
                }
                pending_space = false;
                out.push(ch);
            }
        }
    }
    out
}
