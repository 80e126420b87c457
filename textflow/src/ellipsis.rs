// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Truncation of the last visible line with a marker.

use alloc::string::String;

use crate::flow::{BreakReason, PositionedRun, TextFlowResult, advance};
use crate::measure::{TextMeasurer, sanitize};
use crate::preprocess::PreparedText;
use crate::segment::{Granularity, Segmenter};

/// Truncates `result` with `text`'s marker when content was clipped by the line limit, or when
/// the last line overflows `width`.
///
/// Runs past the last visible line are dropped, then trailing graphemes and white space are
/// removed from the last line until the marker fits after it. Returns whether the result was
/// truncated.
pub fn truncate<M, S>(
    result: &mut TextFlowResult,
    text: &PreparedText,
    measurer: &M,
    segmenter: &S,
    width: f32,
) -> bool
where
    M: TextMeasurer + ?Sized,
    S: Segmenter + ?Sized,
{
    let Some(marker) = text.ellipsis() else {
        return false;
    };
    let Some(last_line) = result.line_count().checked_sub(1) else {
        return false;
    };
    let overflows = result.line_widths[last_line] > width;
    if !result.is_clipped() && !overflows {
        return false;
    }

    let mut texts = core::mem::take(&mut result.texts);
    let mut runs = core::mem::take(&mut result.runs);
    let kept = runs.iter().take_while(|run| run.line <= last_line).count();
    texts.truncate(kept);
    runs.truncate(kept);

    let line_start = runs
        .iter()
        .position(|run| run.line == last_line)
        .unwrap_or(runs.len());
    let (start_x, y) = runs
        .get(line_start)
        .map_or((0.0, 0.0), |run| (run.x, run.y));

    let marker_width = sanitize(measurer.measure_text(marker));
    let tab_width = text.config().tab_width;
    loop {
        let Some(run) = runs[line_start..].last_mut() else {
            break;
        };
        let Some(run_text) = texts.last_mut() else {
            break;
        };
        let trimmed_end = run_text.trim_end().len();
        let line_end = run.x + run.width;
        if trimmed_end == run_text.len() && line_end + marker_width <= width {
            break;
        }
        let keep = if trimmed_end < run_text.len() {
            trimmed_end
        } else {
            segmenter
                .segment(run_text, Granularity::Grapheme)
                .last()
                .map_or(0, |grapheme| run_text.len() - grapheme.len())
        };
        if keep == 0 {
            texts.pop();
            runs.pop();
            continue;
        }
        run_text.truncate(keep);
        run.width = if run.is_image {
            run.width
        } else {
            advance(run_text, run.x, tab_width, &|text: &str| {
                measurer.measure_text(text)
            })
        };
    }

    let (marker_x, segment) = runs[line_start..]
        .last()
        .map_or((start_x, 0), |run| (run.x + run.width, run.segment));
    log::debug!("truncating line {last_line} at {marker_x} with {marker:?}");
    texts.push(String::from(marker));
    runs.push(PositionedRun {
        x: marker_x,
        y,
        width: marker_width,
        line: last_line,
        segment,
        is_image: false,
    });

    result.texts = texts;
    result.runs = runs;
    result.line_widths[last_line] = marker_x + marker_width;
    result.line_breaks[last_line] = BreakReason::None;
    result.clipped_line = None;
    result.measured_size.width = result
        .line_widths
        .iter()
        .copied()
        .fold(0.0, f32::max);
    true
}
