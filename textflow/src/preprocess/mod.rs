// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning raw text and a resolved style into break-classified units.

mod hyphenate;
mod whitespace;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::flow::FlowConfig;
use crate::measure::{TextMeasurer, sanitize};
use crate::segment::{Granularity, Segmenter};
use crate::style::{
    BoxOrient, Hyphens, LineBreak, Overflow, OverflowWrap, TabSize, TextAlign, TextJustify,
    TextOverflow, TextStyle, TextTransform, TextWrap, WordBreak,
};

use hyphenate::SOFT_HYPHEN;

/// The marker used when no custom one is given.
pub const DEFAULT_ELLIPSIS: &str = "\u{2026}";

/// The immutable output of the preprocessor, shared by every flow engine invocation for one
/// text node.
///
/// `units`, `required_breaks` and `soft_hyphen_breaks` always have the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedText {
    units: Vec<String>,
    required_breaks: Vec<bool>,
    soft_hyphen_breaks: Vec<bool>,
    config: FlowConfig,
    ellipsis: Option<String>,
    text_wrap: TextWrap,
    text_align: TextAlign,
}

impl PreparedText {
    /// Creates prepared text from units that were segmented elsewhere.
    ///
    /// The flag vectors are padded with `false` (or truncated) to the number of units.
    pub fn from_units(
        units: Vec<String>,
        mut required_breaks: Vec<bool>,
        mut soft_hyphen_breaks: Vec<bool>,
        config: FlowConfig,
    ) -> Self {
        required_breaks.resize(units.len(), false);
        soft_hyphen_breaks.resize(units.len(), false);
        Self {
            units,
            required_breaks,
            soft_hyphen_breaks,
            config,
            ellipsis: None,
            text_wrap: TextWrap::Wrap,
            text_align: TextAlign::Start,
        }
    }

    /// Sets the truncation marker.
    pub fn with_ellipsis(mut self, ellipsis: Option<String>) -> Self {
        self.ellipsis = ellipsis;
        self
    }

    /// Sets the wrap strategy.
    pub fn with_text_wrap(mut self, text_wrap: TextWrap) -> Self {
        self.text_wrap = text_wrap;
        self
    }

    /// Sets the line alignment.
    pub fn with_text_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = text_align;
        self
    }

    /// The break-classified units.
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// `required_breaks()[i]` is true when a mandatory break precedes unit `i`.
    pub fn required_breaks(&self) -> &[bool] {
        &self.required_breaks
    }

    /// `soft_hyphen_breaks()[i]` is true when a soft hyphen precedes unit `i`.
    pub fn soft_hyphen_breaks(&self) -> &[bool] {
        &self.soft_hyphen_breaks
    }

    /// Scalars for the flow engine.
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// The truncation marker, when clamping or `text-overflow` asks for one.
    pub fn ellipsis(&self) -> Option<&str> {
        self.ellipsis.as_deref()
    }

    /// The wrap strategy.
    pub fn text_wrap(&self) -> TextWrap {
        self.text_wrap
    }

    /// The line alignment.
    pub fn text_align(&self) -> TextAlign {
        self.text_align
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether there are no units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Runs the preprocessor over `text`.
pub fn preprocess<S, M>(text: &str, style: &TextStyle, segmenter: &S, measurer: &M) -> PreparedText
where
    S: Segmenter + ?Sized,
    M: TextMeasurer + ?Sized,
{
    let transformed = transform(text, style.text_transform, segmenter);
    let processed = whitespace::process(&transformed, style.white_space);
    let processed = match style.hyphens {
        Hyphens::None => hyphenate::strip_soft_hyphens(&processed),
        _ => hyphenate::apply_limit_chars(&processed, style.hyphenate_limit_chars),
    };

    let word_break = if style.line_break == LineBreak::Anywhere {
        WordBreak::BreakAll
    } else {
        style.word_break
    };
    let allow_break_word = matches!(word_break, WordBreak::BreakAll | WordBreak::BreakWord)
        || matches!(
            style.overflow_wrap,
            OverflowWrap::Anywhere | OverflowWrap::BreakWord
        );
    let allow_soft_wrap = style.white_space.allows_soft_wrap() && style.text_wrap != TextWrap::NoWrap;

    let mut builder = UnitBuilder::default();
    for piece in segmenter.line_units(&processed, word_break, style.line_break) {
        builder.add(piece);
    }
    builder.finish();

    let (line_limit, ellipsis) = truncation(style, allow_soft_wrap);
    let tab_width = match style.tab_size {
        TabSize::Spaces(count) => sanitize(count) * sanitize(measurer.measure_grapheme(" ")),
        TabSize::Length(length) => sanitize(length.resolve(style.font_size, f32::INFINITY)),
    };
    let allowed_to_justify =
        style.text_align == TextAlign::Justify && style.text_justify != TextJustify::None;

    let config = FlowConfig {
        tab_width,
        hyphen_character: style.hyphenate_character.clone(),
        allow_soft_wrap,
        allow_break_word,
        collapse_spaces: style.white_space.collapses_spaces(),
        line_limit,
        allowed_to_justify,
        justify_by_character: allowed_to_justify
            && style.text_justify == TextJustify::InterCharacter,
        font_size: style.font_size,
        indent: style.text_indent,
    };
    log::trace!(
        "prepared {} units, line limit {line_limit}, soft wrap {allow_soft_wrap}",
        builder.units.len()
    );

    PreparedText {
        units: builder.units,
        required_breaks: builder.required_breaks,
        soft_hyphen_breaks: builder.soft_hyphen_breaks,
        config,
        ellipsis,
        text_wrap: if allow_soft_wrap {
            style.text_wrap
        } else {
            TextWrap::NoWrap
        },
        text_align: style.text_align,
    }
}

/// Whether `ch` forces a line break.
fn is_hard_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Accumulates units, moving hard breaks and soft hyphens out of unit text and into the flags
/// of the following unit.
#[derive(Default)]
struct UnitBuilder {
    units: Vec<String>,
    required_breaks: Vec<bool>,
    soft_hyphen_breaks: Vec<bool>,
    pending_required: bool,
    pending_soft_hyphen: bool,
}

impl UnitBuilder {
    fn add(&mut self, mut piece: &str) {
        while let Some(pos) = piece.find(|ch| is_hard_break(ch) || ch == SOFT_HYPHEN) {
            let prefix = &piece[..pos];
            let Some(ch) = piece[pos..].chars().next() else {
                break;
            };
            let mut rest = &piece[pos + ch.len_utf8()..];
            if ch == SOFT_HYPHEN {
                if !prefix.is_empty() {
                    self.push(prefix);
                }
                self.pending_soft_hyphen = true;
            } else {
                if ch == '\r' {
                    rest = rest.strip_prefix('\n').unwrap_or(rest);
                }
                if !prefix.is_empty() || self.pending_required {
                    // Consecutive breaks leave an empty line behind.
                    self.push(prefix);
                }
                self.pending_required = true;
                self.pending_soft_hyphen = false;
            }
            piece = rest;
        }
        if !piece.is_empty() {
            self.push(piece);
        }
    }

    fn push(&mut self, text: &str) {
        self.units.push(text.to_string());
        self.required_breaks
            .push(core::mem::take(&mut self.pending_required));
        self.soft_hyphen_breaks
            .push(core::mem::take(&mut self.pending_soft_hyphen));
    }

    fn finish(&mut self) {
        if self.pending_required {
            self.push("");
        }
    }
}

/// Applies `text-transform`.
fn transform<S: Segmenter + ?Sized>(text: &str, transform: TextTransform, segmenter: &S) -> String {
    match transform {
        TextTransform::Uppercase => text.to_uppercase(),
        TextTransform::Lowercase => text.to_lowercase(),
        TextTransform::Capitalize => {
            let mut out = String::with_capacity(text.len());
            for word in segmenter.segment(text, Granularity::Word) {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) if first.is_alphabetic() => {
                        out.extend(first.to_uppercase());
                        out.push_str(chars.as_str());
                    }
                    _ => out.push_str(word),
                }
            }
            out
        }
        _ => text.into(),
    }
}

/// Resolves the line limit and truncation marker.
fn truncation(style: &TextStyle, allow_soft_wrap: bool) -> (usize, Option<String>) {
    if let Some(clamp) = &style.line_clamp {
        let marker = clamp.marker.as_deref().unwrap_or(DEFAULT_ELLIPSIS);
        return (clamp.lines, Some(marker.into()));
    }
    if let (Some(lines), BoxOrient::Vertical) = (style.webkit_line_clamp, style.box_orient) {
        return (lines, Some(DEFAULT_ELLIPSIS.into()));
    }
    let marker = match &style.text_overflow {
        TextOverflow::Clip => None,
        TextOverflow::Ellipsis => Some(DEFAULT_ELLIPSIS.into()),
        TextOverflow::Custom(marker) => Some(marker.clone()),
    };
    match marker {
        Some(marker) if style.overflow != Overflow::Visible && !allow_soft_wrap => (1, Some(marker)),
        _ => (usize::MAX, None),
    }
}
