// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy line breaking over break-classified units.

use alloc::string::ToString;
use alloc::vec::Vec;

use super::width::{self, UnitWidth};
use super::{BreakReason, ClippedLine, FlowConfig, PositionedRun, Size, TextFlowResult};
use crate::measure::{TextMeasurer, sanitize};
use crate::preprocess::PreparedText;
use crate::segment::{Granularity, Segmenter};

/// Characters that may not begin a line after a soft wrap.
const NO_BREAK_BEFORE: [char; 13] = [',', '.', '!', '?', ':', '-', '@', ')', '>', ']', '}', '%', '#'];

/// One entry of the breaker's private copy of the unit sequence.
#[derive(Clone, Copy, Debug)]
struct Unit<'a> {
    text: &'a str,
    required_break: bool,
    soft_hyphen_break: bool,
}

/// The line currently being built.
#[derive(Clone, Debug, Default)]
struct LineState {
    /// The x cursor, starting at the line's indent.
    x: f32,
    indent: f32,
    /// Of the line currently being built, the tallest unit seen so far.
    height: f32,
    baseline: f32,
    /// Advance of the spaces at the end of the line, which hang past its end.
    trailing_spaces: f32,
    /// Whether any unit (even a zero-width one) has been placed.
    has_content: bool,
    /// Whether the previous line ended at a soft wrap.
    soft_wrapped: bool,
    /// Number of justification segments started on this line.
    segments: usize,
}

impl LineState {
    fn new(indent: f32) -> Self {
        Self {
            x: indent,
            indent,
            ..Self::default()
        }
    }

    /// Whether nothing with an advance has been placed yet.
    fn at_start(&self) -> bool {
        self.x <= self.indent
    }

    /// The ordinal of the most recently started segment.
    fn segment(&self) -> usize {
        self.segments.saturating_sub(1)
    }
}

/// Line breaking for one invocation of the flow engine.
pub(super) struct BreakLines<'a, M: ?Sized, S: ?Sized> {
    config: &'a FlowConfig,
    measurer: &'a M,
    segmenter: &'a S,
    width: f32,
    units: Vec<Unit<'a>>,
    line: LineState,
    /// The y coordinate of the bottom of the last committed line (or else 0).
    committed_y: f32,
    result: TextFlowResult,
}

impl<'a, M, S> BreakLines<'a, M, S>
where
    M: TextMeasurer + ?Sized,
    S: Segmenter + ?Sized,
{
    pub(super) fn new(text: &'a PreparedText, measurer: &'a M, segmenter: &'a S, width: f32) -> Self {
        let config = text.config();
        let units = text
            .units()
            .iter()
            .zip(text.required_breaks())
            .zip(text.soft_hyphen_breaks())
            .map(|((text, &required_break), &soft_hyphen_break)| Unit {
                text: text.as_str(),
                required_break,
                soft_hyphen_break,
            })
            .collect();
        let indent = config
            .indent
            .line_indent(0, false, width, config.font_size);
        Self {
            config,
            measurer,
            segmenter,
            width,
            units,
            line: LineState::new(indent),
            committed_y: 0.0,
            result: TextFlowResult::default(),
        }
    }

    fn lines(&self) -> usize {
        self.result.line_widths.len()
    }

    pub(super) fn run(mut self) -> TextFlowResult {
        let mut i = 0;
        while i < self.units.len() && self.lines() < self.config.line_limit {
            let mut unit = self.units[i];
            let at_line_start = self.line.at_start();
            if at_line_start {
                unit.text = self.collapse_line_start(unit.text);
            }
            let mut measured = self.measure_unit(unit.text, self.line.x);
            let forced = unit.required_break;
            let will_wrap = !at_line_start
                && self.config.allow_soft_wrap
                && measured.visible() > 0.0
                && !unit.text.starts_with(NO_BREAK_BEFORE)
                && self.line.x + measured.width > self.width + measured.ending_spaces;

            if self.config.allow_break_word
                && measured.visible() > self.width
                && (at_line_start || will_wrap || forced)
            {
                let graphemes = self.segmenter.segment(unit.text, Granularity::Grapheme);
                if graphemes.len() > 1 {
                    if forced {
                        self.commit_line(BreakReason::Explicit, false, unit.text);
                    } else if !at_line_start {
                        self.commit_line(BreakReason::Emergency, unit.soft_hyphen_break, unit.text);
                    }
                    self.units.splice(
                        i..=i,
                        graphemes.into_iter().map(|text| Unit {
                            text,
                            required_break: false,
                            soft_hyphen_break: false,
                        }),
                    );
                    if self.lines() >= self.config.line_limit {
                        // Start the clipped line so the cut is recorded.
                        let first = self.collapse_line_start(self.units[i].text);
                        let measured = self.measure_unit(first, self.line.x);
                        self.place(first, measured);
                        break;
                    }
                    continue;
                }
                log::debug!(
                    "{:?} is a single grapheme wider than {}, letting it overflow",
                    unit.text,
                    self.width
                );
            }

            if forced || will_wrap {
                let reason = if forced {
                    BreakReason::Explicit
                } else {
                    BreakReason::Regular
                };
                self.commit_line(reason, !forced && unit.soft_hyphen_break, unit.text);
                unit.text = self.collapse_line_start(unit.text);
                let (height, baseline) = self.unit_metrics(unit.text);
                self.line.height = height;
                self.line.baseline = baseline;
                measured = self.measure_unit(unit.text, self.line.x);
            }

            self.place(unit.text, measured);
            i += 1;
        }
        self.finish()
    }

    /// Drops collapsible spaces from the start of a soft-wrapped line.
    fn collapse_line_start(&self, text: &'a str) -> &'a str {
        if self.config.collapse_spaces && self.line.soft_wrapped {
            text.trim_start_matches(' ')
        } else {
            text
        }
    }

    /// Granularity of the runs a unit is split into.
    fn run_granularity(&self) -> Granularity {
        if self.config.justify_by_character {
            Granularity::Grapheme
        } else {
            Granularity::Word
        }
    }

    /// Advance of a run, which is the font size for replaced content.
    fn run_width(&self, piece: &str, x: f32) -> f32 {
        if self.measurer.is_image(piece) {
            sanitize(self.config.font_size)
        } else {
            width::advance(piece, x, self.config.tab_width, &|text: &str| {
                self.measurer.measure_text(text)
            })
        }
    }

    /// Width of a unit as the sum of the runs it will be placed as, so line widths end where
    /// their last run ends.
    fn measure_unit(&self, text: &str, x: f32) -> UnitWidth {
        let granularity = self.run_granularity();
        width::unit_width(text, x, self.config.tab_width, &|text: &str| {
            self.segmenter
                .segment(text, granularity)
                .into_iter()
                .map(|piece| self.run_width(piece, 0.0))
                .sum()
        })
    }

    /// Height and baseline a unit gives its line. Blank units get the empty-line height.
    fn unit_metrics(&self, text: &str) -> (f32, f32) {
        let height = if is_blank(text) {
            self.measurer.height(None)
        } else {
            self.measurer.height(Some(text))
        };
        (sanitize(height), sanitize(self.measurer.baseline(text)))
    }

    /// Adds a unit to the current line and records its runs.
    fn place(&mut self, text: &str, measured: UnitWidth) {
        let start_x = self.line.x;
        self.line.x += measured.width;
        self.line.has_content = true;
        if measured.visible() > 0.0 {
            self.line.trailing_spaces = measured.ending_spaces;
        } else {
            self.line.trailing_spaces += measured.width;
        }

        let (height, baseline) = self.unit_metrics(text);
        if height > self.line.height {
            self.line.height = height;
            self.line.baseline = baseline;
        }

        let line = self.lines();
        let y = self.committed_y;
        if measured.width <= 0.0 {
            let segment = self.justify_segment();
            self.push_run(
                text,
                PositionedRun {
                    x: start_x,
                    y,
                    width: 0.0,
                    line,
                    segment,
                    is_image: false,
                },
            );
            return;
        }

        let by_character = self.config.justify_by_character;
        if !by_character && !is_blank(text) {
            self.line.segments += 1;
        }
        let mut x = start_x;
        for piece in self.segmenter.segment(text, self.run_granularity()) {
            let is_image = self.measurer.is_image(piece);
            let width = self.run_width(piece, x);
            if by_character && !is_blank(piece) {
                self.line.segments += 1;
            }
            let segment = self.justify_segment();
            self.push_run(
                piece,
                PositionedRun {
                    x,
                    y,
                    width,
                    line,
                    segment,
                    is_image,
                },
            );
            x += width;
        }
    }

    fn justify_segment(&self) -> usize {
        if self.config.allowed_to_justify {
            self.line.segment()
        } else {
            0
        }
    }

    fn push_run(&mut self, text: &str, run: PositionedRun) {
        self.result.texts.push(text.to_string());
        self.result.runs.push(run);
    }

    /// Appends the hyphen character to the current line if it fits.
    fn append_hyphen(&mut self) {
        let hyphen_width = sanitize(self.measurer.measure_text(&self.config.hyphen_character));
        let end = self.line.x - self.line.trailing_spaces;
        if end + hyphen_width > self.width {
            return;
        }
        let run = PositionedRun {
            x: end,
            y: self.committed_y,
            width: hyphen_width,
            line: self.lines(),
            segment: self.justify_segment(),
            is_image: false,
        };
        self.result.texts.push(self.config.hyphen_character.clone());
        self.result.runs.push(run);
        self.line.x = end + hyphen_width;
        self.line.trailing_spaces = 0.0;
    }

    /// Ends the current line and starts the next one at its indent.
    fn commit_line(&mut self, reason: BreakReason, soft_hyphen: bool, next_unit: &str) {
        if soft_hyphen && self.line.has_content {
            self.append_hyphen();
        }
        if reason == BreakReason::Explicit && self.line.height == 0.0 {
            let (height, baseline) = self.unit_metrics(next_unit);
            self.line.height = height;
            self.line.baseline = baseline;
        }
        let width = self.line.x - self.line.trailing_spaces;
        log::trace!(
            "line {} ends ({reason:?}) with width {width} and height {}",
            self.lines(),
            self.line.height
        );
        self.result.line_widths.push(width);
        self.result.baselines.push(self.line.baseline);
        self.result
            .line_segment_number
            .push(self.line.segments.max(1));
        self.result.line_breaks.push(reason);
        self.committed_y += self.line.height;

        let indent = self.config.indent.line_indent(
            self.lines(),
            reason == BreakReason::Explicit,
            self.width,
            self.config.font_size,
        );
        self.line = LineState {
            soft_wrapped: reason != BreakReason::Explicit,
            ..LineState::new(indent)
        };
    }

    fn finish(mut self) -> TextFlowResult {
        if self.line.has_content && self.line.x - self.line.indent > 0.0 {
            let width = self.line.x - self.line.trailing_spaces;
            if self.lines() >= self.config.line_limit {
                // The line is recorded, but does not contribute to the height.
                self.result.clipped_line = Some(ClippedLine {
                    width,
                    baseline: self.line.baseline,
                });
            } else {
                self.result.line_widths.push(width);
                self.result.baselines.push(self.line.baseline);
                self.result
                    .line_segment_number
                    .push(self.line.segments.max(1));
                self.result.line_breaks.push(BreakReason::None);
                self.committed_y += self.line.height;
            }
        }
        let width = self
            .result
            .line_widths
            .iter()
            .copied()
            .fold(0.0, f32::max);
        self.result.measured_size = Size {
            width,
            height: self.committed_y,
        };
        self.result
    }
}

fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}
