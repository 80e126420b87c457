// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::TextMeasurer;

/// A measurer where every character is `advance` wide.
#[derive(Clone, Debug)]
pub(crate) struct FixedMeasurer {
    pub(crate) advance: f32,
    pub(crate) line_height: f32,
    pub(crate) ascent: f32,
    /// Height of a line holding only white space.
    pub(crate) empty_height: f32,
    /// Units set in a taller fallback font.
    pub(crate) tall: &'static [&'static str],
    pub(crate) tall_height: f32,
    pub(crate) tall_ascent: f32,
    /// Graphemes reported as not covered by the fonts.
    pub(crate) missing: &'static [&'static str],
}

impl Default for FixedMeasurer {
    fn default() -> Self {
        Self {
            advance: 10.0,
            line_height: 20.0,
            ascent: 16.0,
            empty_height: 20.0,
            tall: &[],
            tall_height: 40.0,
            tall_ascent: 32.0,
            missing: &[],
        }
    }
}

impl TextMeasurer for FixedMeasurer {
    fn measure_text(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn height(&self, unit: Option<&str>) -> f32 {
        match unit {
            None => self.empty_height,
            Some(unit) if self.tall.contains(&unit) => self.tall_height,
            Some(_) => self.line_height,
        }
    }

    fn baseline(&self, unit: &str) -> f32 {
        if self.tall.contains(&unit) {
            self.tall_ascent
        } else {
            self.ascent
        }
    }

    fn has_glyph(&self, grapheme: &str) -> bool {
        !self.missing.contains(&grapheme)
    }
}
