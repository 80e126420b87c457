// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Underline geometry that skips descenders.
//!
//! This implements `text-decoration-skip-ink`-like behavior from glyph bounding boxes: the
//! decoration line is interrupted wherever a glyph crosses it.

use smallvec::SmallVec;

/// Drawable `(start, end)` ranges of a decoration line.
pub type SkipInkSegments = SmallVec<[(f32, f32); 4]>;

/// A glyph's bounding box in the same coordinate space as the decoration line (y down).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GlyphBox {
    /// Left edge.
    pub x1: f32,
    /// Top edge.
    pub y1: f32,
    /// Right edge.
    pub x2: f32,
    /// Bottom edge.
    pub y2: f32,
}

/// Computes the parts of the decoration line from `start` to `end` that don't cross a glyph.
///
/// `y` is the decoration's position and `stroke_width` its thickness. A glyph interrupts the
/// line when its box reaches below `baseline + stroke_width / 2` and above
/// `y + stroke_width / 2`. Each interruption extends past the glyph by a bleed of
/// `max(stroke_width / 2, 1.25 * stroke_width)`.
pub fn build_skip_ink_segments(
    start: f32,
    end: f32,
    glyph_boxes: &[GlyphBox],
    y: f32,
    stroke_width: f32,
    baseline: f32,
) -> SkipInkSegments {
    let half_stroke = stroke_width / 2.0;
    let bleed = half_stroke.max(1.25 * stroke_width);

    let mut exclusions: SmallVec<[(f32, f32); 8]> = SmallVec::new();
    for glyph in glyph_boxes {
        if glyph.y2 < baseline + half_stroke || glyph.y1 > y + half_stroke {
            continue;
        }
        let skip_start = (glyph.x1 - bleed).max(start);
        let skip_end = (glyph.x2 + bleed).min(end);
        if skip_start >= skip_end {
            continue;
        }
        insert_and_merge_range(&mut exclusions, skip_start, skip_end);
    }

    if exclusions.is_empty() {
        return SmallVec::from_slice(&[(start, end)]);
    }

    let mut segments = SkipInkSegments::new();
    let mut current = start;
    for (skip_start, skip_end) in exclusions {
        if skip_start > current {
            segments.push((current, skip_start));
        }
        current = current.max(skip_end);
    }
    if end > current {
        segments.push((current, end));
    }
    segments
}

/// Inserts a range into a sorted list of disjoint ranges, merging it with any ranges it overlaps
/// or touches.
fn insert_and_merge_range(ranges: &mut SmallVec<[(f32, f32); 8]>, start: f32, end: f32) {
    let first = ranges.partition_point(|&(_, range_end)| range_end < start);
    let mut merged = (start, end);
    let mut last = first;
    while let Some(&(range_start, range_end)) = ranges.get(last) {
        if range_start > merged.1 {
            break;
        }
        merged = (merged.0.min(range_start), merged.1.max(range_end));
        last += 1;
    }
    ranges.drain(first..last);
    ranges.insert(first, merged);
}
