// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measurement oracle.

/// Font metrics and shaping, as seen by the flow engine.
///
/// Implementations wrap a shaper and the resolved font stack of one text node. Widths must
/// already include letter spacing, word spacing and kerning. The engine treats NaN and negative
/// results as zero, so implementations don't need to guard against degenerate fonts.
pub trait TextMeasurer {
    /// Advance width of a run of text.
    fn measure_text(&self, text: &str) -> f32;

    /// Advance width of text measured grapheme by grapheme.
    ///
    /// Defaults to [`measure_text`](Self::measure_text).
    fn measure_grapheme(&self, text: &str) -> f32 {
        self.measure_text(text)
    }

    /// Rounded line height. `unit` allows mixed-size fallback fonts to report a taller line;
    /// `None` asks for the height of an empty line.
    fn height(&self, unit: Option<&str>) -> f32;

    /// Ascender offset from the top of the line box.
    fn baseline(&self, unit: &str) -> f32;

    /// Whether `grapheme` is replaced content (an emoji image, for instance) rather than shaped
    /// text.
    ///
    /// Defaults to [`is_emoji_grapheme`](crate::segment::is_emoji_grapheme).
    fn is_image(&self, grapheme: &str) -> bool {
        crate::segment::is_emoji_grapheme(grapheme)
    }

    /// Whether the loaded fonts cover `grapheme`. Used to collect missing glyphs before layout
    /// is finalized.
    fn has_glyph(&self, grapheme: &str) -> bool {
        let _ = grapheme;
        true
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure_text(&self, text: &str) -> f32 {
        (**self).measure_text(text)
    }

    fn measure_grapheme(&self, text: &str) -> f32 {
        (**self).measure_grapheme(text)
    }

    fn height(&self, unit: Option<&str>) -> f32 {
        (**self).height(unit)
    }

    fn baseline(&self, unit: &str) -> f32 {
        (**self).baseline(unit)
    }

    fn is_image(&self, grapheme: &str) -> bool {
        (**self).is_image(grapheme)
    }

    fn has_glyph(&self, grapheme: &str) -> bool {
        (**self).has_glyph(grapheme)
    }
}

/// Clamps a measurement to a finite, non-negative number.
pub(crate) fn sanitize(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
