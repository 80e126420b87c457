// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-phase text node driven by a document tree walker.
//!
//! A walker first asks every node for its [`Requirements`] (fonts to load, images to fetch),
//! resolves them, then lays out boxes with [`TextNode::measure`] and finally positions text with
//! [`TextNode::finalize`]. All three read the same [`PreparedText`], so each can be called any
//! number of times.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::align::line_alignments;
use crate::ellipsis::truncate;
use crate::flow::{Size, TextFlowResult};
use crate::measure::TextMeasurer;
use crate::preprocess::{PreparedText, preprocess};
use crate::segment::{Granularity, IcuSegmenter, Segmenter};
use crate::style::TextStyle;
use crate::wrap::flow_with_strategy;

/// What a text node needs before it can be laid out.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Requirements {
    /// Graphemes the measurer has no glyph for, in first-seen order.
    pub missing_glyphs: Vec<String>,
    /// Graphemes rendered as images, in first-seen order.
    pub images: Vec<String>,
}

impl Requirements {
    /// Whether nothing needs to be loaded.
    pub fn is_empty(&self) -> bool {
        self.missing_glyphs.is_empty() && self.images.is_empty()
    }
}

/// One run of finalized text, in absolute coordinates.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PlacedRun {
    /// The run's text.
    pub text: String,
    /// Left edge.
    pub x: f32,
    /// Top of the run's line.
    pub y: f32,
    /// Advance width.
    pub width: f32,
    /// Absolute y of the line's baseline.
    pub baseline: f32,
    /// Index of the run's line.
    pub line: usize,
    /// Whether the run is an image sized to the font size.
    pub is_image: bool,
}

/// The output of [`TextNode::finalize`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FinalText {
    /// The winning layout, after truncation.
    pub result: TextFlowResult,
    /// The width the text was flowed at.
    pub wrap_width: f32,
    /// Whether a truncation marker was appended.
    pub truncated: bool,
    /// Runs with alignment and the parent offset applied.
    pub runs: Vec<PlacedRun>,
}

/// A preprocessed text node.
#[derive(Clone, Debug)]
pub struct TextNode<S = IcuSegmenter> {
    prepared: PreparedText,
    segmenter: S,
}

impl TextNode<IcuSegmenter> {
    /// Preprocesses `text` with the default segmenter.
    pub fn with_default_segmenter<M>(text: &str, style: &TextStyle, measurer: &M) -> Self
    where
        M: TextMeasurer + ?Sized,
    {
        Self::new(text, style, IcuSegmenter::new(), measurer)
    }
}

impl<S: Segmenter> TextNode<S> {
    /// Preprocesses `text`.
    pub fn new<M>(text: &str, style: &TextStyle, segmenter: S, measurer: &M) -> Self
    where
        M: TextMeasurer + ?Sized,
    {
        let prepared = preprocess(text, style, &segmenter, measurer);
        Self {
            prepared,
            segmenter,
        }
    }

    /// The preprocessed text.
    pub fn prepared(&self) -> &PreparedText {
        &self.prepared
    }

    /// Phase 1: the glyphs and images this node needs.
    pub fn requirements<M>(&self, measurer: &M) -> Requirements
    where
        M: TextMeasurer + ?Sized,
    {
        let mut seen = HashSet::new();
        let mut requirements = Requirements::default();
        let extra = [
            Some(self.prepared.config().hyphen_character.as_str()),
            self.prepared.ellipsis(),
        ];
        let texts = self
            .prepared
            .units()
            .iter()
            .map(String::as_str)
            .chain(extra.into_iter().flatten());
        for text in texts {
            for grapheme in self.segmenter.segment(text, Granularity::Grapheme) {
                if grapheme.chars().all(char::is_whitespace) || !seen.insert(grapheme) {
                    continue;
                }
                if measurer.is_image(grapheme) {
                    requirements.images.push(grapheme.to_string());
                } else if !measurer.has_glyph(grapheme) {
                    requirements.missing_glyphs.push(grapheme.to_string());
                }
            }
        }
        requirements
    }

    /// Measures the text in a container of `width`, with its wrap strategy applied.
    pub fn measure<M>(&self, measurer: &M, width: f32) -> Size
    where
        M: TextMeasurer + ?Sized,
    {
        flow_with_strategy(&self.prepared, measurer, &self.segmenter, width)
            .result
            .measured_size
    }

    /// Phase 2: lays out, truncates and aligns the text in a container of `width` whose
    /// top-left corner is at `offset`.
    pub fn finalize<M>(&self, measurer: &M, width: f32, offset: (f32, f32)) -> FinalText
    where
        M: TextMeasurer + ?Sized,
    {
        let outcome = flow_with_strategy(&self.prepared, measurer, &self.segmenter, width);
        let mut result = outcome.result;
        let truncated = truncate(
            &mut result,
            &self.prepared,
            measurer,
            &self.segmenter,
            outcome.width,
        );

        let align_width = if width.is_finite() {
            width
        } else {
            result.measured_size.width
        };
        let lines = line_alignments(&result, align_width, self.prepared.text_align());
        let runs = result
            .iter()
            .map(|(text, run)| {
                let shift = lines
                    .get(run.line)
                    .map_or(0.0, |line| line.run_offset(run.segment));
                let baseline = result.baselines.get(run.line).copied().unwrap_or(0.0);
                PlacedRun {
                    text: text.to_string(),
                    x: offset.0 + run.x + shift,
                    y: offset.1 + run.y,
                    width: run.width,
                    baseline: offset.1 + run.y + baseline,
                    line: run.line,
                    is_image: run.is_image,
                }
            })
            .collect();

        FinalText {
            result,
            wrap_width: outcome.width,
            truncated,
            runs,
        }
    }
}
