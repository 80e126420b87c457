// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The text flow engine.
//!
//! [`compute_text_flow`] places a [`PreparedText`]'s units into lines for one container width.
//! Every call works on its own copy of the unit sequence, so it can be repeated at different
//! widths (by a constraint solver or by the [wrap refiner](crate::wrap)) without calls
//! influencing each other.

mod line_break;
mod width;

use alloc::string::String;
use alloc::vec::Vec;

use crate::measure::TextMeasurer;
use crate::preprocess::PreparedText;
use crate::segment::Segmenter;
use crate::style::TextIndent;

pub(crate) use width::advance;

/// Scalars controlling the flow engine, resolved by the preprocessor.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowConfig {
    /// Distance between tab stops, in pixels.
    pub tab_width: f32,
    /// Inserted at the end of a line broken at a soft hyphen.
    pub hyphen_character: String,
    /// Whether soft wrap opportunities may be taken.
    pub allow_soft_wrap: bool,
    /// Whether units wider than the container may be broken between graphemes.
    pub allow_break_word: bool,
    /// Whether spaces collapse (and vanish at the start of soft-wrapped lines).
    pub collapse_spaces: bool,
    /// Maximum number of lines; `usize::MAX` for no limit.
    pub line_limit: usize,
    /// Whether justification ordinals are assigned.
    pub allowed_to_justify: bool,
    /// Justify between graphemes instead of between units.
    pub justify_by_character: bool,
    /// Font size, used for replaced content and `em` indents.
    pub font_size: f32,
    /// Per-line indentation.
    pub indent: TextIndent,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            tab_width: 0.0,
            hyphen_character: "-".into(),
            allow_soft_wrap: true,
            allow_break_word: false,
            collapse_spaces: true,
            line_limit: usize::MAX,
            allowed_to_justify: false,
            justify_by_character: false,
            font_size: 16.0,
            indent: TextIndent::default(),
        }
    }
}

/// Why a line ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BreakReason {
    /// The last line of the text.
    #[default]
    None,
    /// A soft wrap opportunity was taken.
    Regular,
    /// A mandatory break.
    Explicit,
    /// The line was ended to break an overflowing unit between graphemes.
    Emergency,
}

/// One positioned piece of text.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PositionedRun {
    /// Horizontal offset within the container.
    pub x: f32,
    /// Top of the run's line.
    pub y: f32,
    /// Advance width.
    pub width: f32,
    /// Index of the run's line.
    pub line: usize,
    /// Justification ordinal within the line. Runs with ordinal `k` move by `k` gutters.
    pub segment: usize,
    /// Whether the run is replaced content sized to the font size.
    pub is_image: bool,
}

/// Width and height of laid out text.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

/// A line that was laid out past the line limit.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ClippedLine {
    /// Line width, excluding trailing spaces.
    pub width: f32,
    /// Baseline offset from the line top.
    pub baseline: f32,
}

/// The output of one flow engine invocation.
///
/// `texts` and `runs` are parallel, as are the four per-line vectors.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TextFlowResult {
    /// Text of each run.
    pub texts: Vec<String>,
    /// Position of each run.
    pub runs: Vec<PositionedRun>,
    /// Width of each line, including its indent and excluding trailing spaces.
    pub line_widths: Vec<f32>,
    /// Baseline offset of each line from its top.
    pub baselines: Vec<f32>,
    /// Number of justification segments on each line.
    pub line_segment_number: Vec<usize>,
    /// Why each line ended.
    pub line_breaks: Vec<BreakReason>,
    /// Metrics of content flowed past the line limit, if any.
    ///
    /// Runs on this line have `line == line_widths.len()`; its height is not part of
    /// `measured_size`.
    pub clipped_line: Option<ClippedLine>,
    /// Widest line and total height.
    pub measured_size: Size,
}

impl TextFlowResult {
    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.line_widths.len()
    }

    /// Iterates over `(text, run)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PositionedRun)> + '_ {
        self.texts.iter().map(String::as_str).zip(&self.runs)
    }

    /// Whether content was cut off by the line limit.
    pub fn is_clipped(&self) -> bool {
        self.clipped_line.is_some()
    }

    /// Width of the last line, or zero for empty text.
    pub fn last_line_width(&self) -> f32 {
        self.line_widths.last().copied().unwrap_or(0.0)
    }
}

/// Lays out `text` into lines no wider than `width` (where possible).
///
/// A NaN width is treated as unbounded.
pub fn compute_text_flow<M, S>(
    text: &PreparedText,
    measurer: &M,
    segmenter: &S,
    width: f32,
) -> TextFlowResult
where
    M: TextMeasurer + ?Sized,
    S: Segmenter + ?Sized,
{
    let width = if width.is_nan() { f32::INFINITY } else { width };
    line_break::BreakLines::new(text, measurer, segmenter, width).run()
}
