// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unicode segmentation.

use alloc::vec::Vec;

use icu_properties::CodePointSetData;
use icu_properties::props::{EmojiPresentation, ExtendedPictographic, RegionalIndicator};
use icu_segmenter::options::{
    LineBreakOptions, LineBreakStrictness, LineBreakWordOption, WordBreakInvariantOptions,
};
use icu_segmenter::{GraphemeClusterSegmenter, LineSegmenter, WordSegmenter};

use crate::style::{LineBreak, WordBreak};

/// The unit a [`Segmenter`] splits text into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    /// Extended grapheme clusters.
    Grapheme,
    /// Word boundaries (words, spaces and punctuation as separate pieces).
    Word,
}

/// Text segmentation used by the preprocessor and the flow engine.
pub trait Segmenter {
    /// Splits `text` at `granularity` boundaries. The pieces concatenate back to `text`.
    fn segment<'t>(&self, text: &'t str, granularity: Granularity) -> Vec<&'t str>;

    /// Splits `text` after every line break opportunity. Each piece keeps its trailing spaces
    /// and, for mandatory breaks, its line terminator.
    fn line_units<'t>(
        &self,
        text: &'t str,
        word_break: WordBreak,
        line_break: LineBreak,
    ) -> Vec<&'t str>;
}

impl<T: Segmenter + ?Sized> Segmenter for &T {
    fn segment<'t>(&self, text: &'t str, granularity: Granularity) -> Vec<&'t str> {
        (**self).segment(text, granularity)
    }

    fn line_units<'t>(
        &self,
        text: &'t str,
        word_break: WordBreak,
        line_break: LineBreak,
    ) -> Vec<&'t str> {
        (**self).line_units(text, word_break, line_break)
    }
}

/// A [`Segmenter`] backed by ICU4X compiled data.
///
/// Word and line segmentation use the `auto` models, so scripts without spaces (Thai, Lao,
/// Khmer, Burmese, CJK) are segmented with dictionaries or LSTM models.
#[derive(Clone, Copy, Debug, Default)]
pub struct IcuSegmenter;

impl IcuSegmenter {
    /// Creates a segmenter.
    pub fn new() -> Self {
        Self
    }
}

impl Segmenter for IcuSegmenter {
    fn segment<'t>(&self, text: &'t str, granularity: Granularity) -> Vec<&'t str> {
        if text.is_empty() {
            return Vec::new();
        }
        match granularity {
            Granularity::Grapheme => {
                split_at_boundaries(text, GraphemeClusterSegmenter::new().segment_str(text))
            }
            Granularity::Word => split_at_boundaries(
                text,
                WordSegmenter::new_auto(WordBreakInvariantOptions::default()).segment_str(text),
            ),
        }
    }

    fn line_units<'t>(
        &self,
        text: &'t str,
        word_break: WordBreak,
        line_break: LineBreak,
    ) -> Vec<&'t str> {
        if text.is_empty() {
            return Vec::new();
        }
        let mut options = LineBreakOptions::default();
        options.word_option = Some(match word_break {
            WordBreak::BreakAll => LineBreakWordOption::BreakAll,
            WordBreak::KeepAll => LineBreakWordOption::KeepAll,
            _ => LineBreakWordOption::Normal,
        });
        options.strictness = match line_break {
            LineBreak::Loose => Some(LineBreakStrictness::Loose),
            LineBreak::Normal => Some(LineBreakStrictness::Normal),
            LineBreak::Strict => Some(LineBreakStrictness::Strict),
            LineBreak::Anywhere => Some(LineBreakStrictness::Anywhere),
            _ => None,
        };
        split_at_boundaries(text, LineSegmenter::new_auto(options).segment_str(text))
    }
}

/// Turns a boundary iterator (which includes `0` and `text.len()`) into slices.
fn split_at_boundaries(text: &str, boundaries: impl Iterator<Item = usize>) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for boundary in boundaries {
        if boundary > start {
            pieces.push(&text[start..boundary]);
            start = boundary;
        }
    }
    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

/// Whether `grapheme` renders as an emoji by default.
///
/// True for characters with default emoji presentation, for pictographs followed by the emoji
/// variation selector, and for regional indicator flags.
pub fn is_emoji_grapheme(grapheme: &str) -> bool {
    let Some(first) = grapheme.chars().next() else {
        return false;
    };
    if CodePointSetData::new::<EmojiPresentation>().contains(first)
        || CodePointSetData::new::<RegionalIndicator>().contains(first)
    {
        return true;
    }
    CodePointSetData::new::<ExtendedPictographic>().contains(first) && grapheme.contains('\u{FE0F}')
}
