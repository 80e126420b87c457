// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal alignment of flowed lines.

use alloc::vec::Vec;

use crate::flow::{BreakReason, TextFlowResult};
use crate::style::TextAlign;

/// How one line is shifted.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LineAlignment {
    /// Offset applied to every run on the line.
    pub offset: f32,
    /// Extra offset per justification ordinal.
    pub gutter: f32,
}

impl LineAlignment {
    /// The shift of a run with justification ordinal `segment`.
    pub fn run_offset(&self, segment: usize) -> f32 {
        self.offset + self.gutter * segment as f32
    }
}

/// Computes the alignment of every line of `result` in a container of `container_width`.
///
/// Lines that overflow the container, and all lines of a container without a definite width,
/// stay start-aligned.
pub fn line_alignments(
    result: &TextFlowResult,
    container_width: f32,
    alignment: TextAlign,
) -> Vec<LineAlignment> {
    result
        .line_widths
        .iter()
        .zip(&result.line_segment_number)
        .zip(&result.line_breaks)
        .map(|((&line_width, &segments), &reason)| {
            let free_space = container_width - line_width;
            if !free_space.is_finite() || free_space <= 0.0 {
                return LineAlignment::default();
            }
            match alignment {
                TextAlign::Start | TextAlign::Left => LineAlignment::default(),
                TextAlign::End | TextAlign::Right => LineAlignment {
                    offset: free_space,
                    gutter: 0.0,
                },
                TextAlign::Center => LineAlignment {
                    offset: free_space * 0.5,
                    gutter: 0.0,
                },
                TextAlign::Justify => {
                    // The last line, and lines ended by a forced break, are not stretched.
                    if matches!(reason, BreakReason::None | BreakReason::Explicit) || segments < 2 {
                        return LineAlignment::default();
                    }
                    LineAlignment {
                        offset: 0.0,
                        gutter: free_space / (segments - 1) as f32,
                    }
                }
            }
        })
        .collect()
}

/// Computes the horizontal shift of every run of `result`.
///
/// Runs past the line limit are not shifted.
pub fn align(result: &TextFlowResult, container_width: f32, alignment: TextAlign) -> Vec<f32> {
    let lines = line_alignments(result, container_width, alignment);
    result
        .runs
        .iter()
        .map(|run| {
            lines
                .get(run.line)
                .map_or(0.0, |line| line.run_offset(run.segment))
        })
        .collect()
}
