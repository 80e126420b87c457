// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position-dependent advance computation.

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::measure::sanitize;

/// The width a unit occupies when placed at a given x.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct UnitWidth {
    /// Total advance, including trailing spaces.
    pub(crate) width: f32,
    /// Advance contributed by trailing spaces. Hangs past the line end.
    pub(crate) ending_spaces: f32,
}

impl UnitWidth {
    pub(crate) const ZERO: Self = Self {
        width: 0.0,
        ending_spaces: 0.0,
    };

    /// The part of the unit that must fit.
    pub(crate) fn visible(self) -> f32 {
        self.width - self.ending_spaces
    }
}

/// Advance of `text` starting at absolute position `x`.
///
/// Text before the first tab is measured with `measure`; a run of `n` tabs then moves to the
/// `n`th tab stop after that point, and the remainder is measured from the stop. With a zero
/// `tab_width`, tabs take no room.
pub(crate) fn advance(text: &str, x: f32, tab_width: f32, measure: &impl Fn(&str) -> f32) -> f32 {
    let Some(tab_start) = text.find('\t') else {
        return sanitize(measure(text));
    };
    let prefix = &text[..tab_start];
    let tabs = &text[tab_start..];
    let tab_count = tabs.len() - tabs.trim_start_matches('\t').len();
    let suffix = &text[tab_start + tab_count..];

    let prefix_width = if prefix.is_empty() {
        0.0
    } else {
        sanitize(measure(prefix))
    };
    let tab_end = if tab_width > 0.0 {
        let stop = ((prefix_width + x) / tab_width + tab_count as f32).floor() * tab_width;
        sanitize(stop - x)
    } else {
        prefix_width
    };
    let suffix_width = if suffix.is_empty() {
        0.0
    } else {
        advance(suffix, x + tab_end, tab_width, measure)
    };
    tab_end + suffix_width
}

/// Width of a whole unit at `x`, and the part of it taken by trailing spaces.
pub(crate) fn unit_width(
    text: &str,
    x: f32,
    tab_width: f32,
    measure: &impl Fn(&str) -> f32,
) -> UnitWidth {
    if text.is_empty() {
        return UnitWidth::ZERO;
    }
    let width = advance(text, x, tab_width, measure);
    let trimmed = text.trim_end_matches(' ');
    let ending_spaces = if trimmed.len() == text.len() {
        0.0
    } else if trimmed.is_empty() {
        width
    } else {
        sanitize(width - advance(trimmed, x, tab_width, measure))
    };
    UnitWidth {
        width,
        ending_spaces: ending_spaces.min(width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_per_char(text: &str) -> f32 {
        text.chars().count() as f32 * 10.0
    }

    #[test]
    fn tab_moves_to_next_stop() {
        // "AB" is 20 wide, stops every 40.
        assert_eq!(advance("AB\t", 0.0, 40.0, &ten_per_char), 40.0);
        assert_eq!(advance("AB\tX", 0.0, 40.0, &ten_per_char), 50.0);
    }

    #[test]
    fn tab_depends_on_start_position() {
        // Starting at 30, "AB" ends at 50 and the tab moves to 80.
        assert_eq!(advance("AB\t", 30.0, 40.0, &ten_per_char), 50.0);
        assert_eq!(advance("\t\t", 0.0, 40.0, &ten_per_char), 80.0);
    }

    #[test]
    fn multiple_tab_runs() {
        // "A" to 10, tab to 40, "B" to 50, tab to 80.
        assert_eq!(advance("A\tB\t", 0.0, 40.0, &ten_per_char), 80.0);
    }

    #[test]
    fn zero_tab_width_collapses_tabs() {
        assert_eq!(advance("AB\t\tC", 0.0, 0.0, &ten_per_char), 30.0);
    }

    #[test]
    fn trailing_spaces_are_reported() {
        let width = unit_width("Hello  ", 0.0, 0.0, &ten_per_char);
        assert_eq!(width.width, 70.0);
        assert_eq!(width.ending_spaces, 20.0);
        assert_eq!(width.visible(), 50.0);

        let space = unit_width(" ", 0.0, 0.0, &ten_per_char);
        assert_eq!(space.ending_spaces, space.width);
    }

    #[test]
    fn nan_measurements_are_zero() {
        let width = unit_width("abc", 0.0, 0.0, &|_: &str| f32::NAN);
        assert_eq!(width, UnitWidth::ZERO);
    }
}
