// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrap strategies that search for a better wrap width than the container's.

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::flow::{TextFlowResult, compute_text_flow};
use crate::measure::TextMeasurer;
use crate::preprocess::PreparedText;
use crate::segment::Segmenter;
use crate::style::TextWrap;

/// The result of flowing text with its wrap strategy applied.
#[derive(Clone, Debug, PartialEq)]
pub struct WrapOutcome {
    /// The winning layout.
    pub result: TextFlowResult,
    /// The width the winning layout was flowed at.
    pub width: f32,
}

/// Flows `text` at `width`, then refines the width according to the text's wrap strategy.
pub fn flow_with_strategy<M, S>(
    text: &PreparedText,
    measurer: &M,
    segmenter: &S,
    width: f32,
) -> WrapOutcome
where
    M: TextMeasurer + ?Sized,
    S: Segmenter + ?Sized,
{
    let width = if width.is_nan() { f32::INFINITY } else { width };
    let natural = compute_text_flow(text, measurer, segmenter, width);
    let natural = WrapOutcome {
        result: natural,
        width,
    };
    if natural.result.line_count() <= 1 {
        return natural;
    }
    match text.text_wrap() {
        TextWrap::Balance => balance(text, measurer, segmenter, natural),
        TextWrap::Pretty => pretty(text, measurer, segmenter, natural),
        _ => natural,
    }
}

/// Narrows the width as far as possible without adding lines.
fn balance<M, S>(text: &PreparedText, measurer: &M, segmenter: &S, natural: WrapOutcome) -> WrapOutcome
where
    M: TextMeasurer + ?Sized,
    S: Segmenter + ?Sized,
{
    let natural_width = natural.result.measured_size.width;
    let natural_height = natural.result.measured_size.height;
    let mut lower = natural_width / 2.0;
    let mut upper = natural_width;
    while upper - lower >= 1.0 {
        let mid = (lower + upper) / 2.0;
        let candidate = compute_text_flow(text, measurer, segmenter, mid);
        log::trace!(
            "balance: {mid} gives height {} (natural {natural_height})",
            candidate.measured_size.height
        );
        if candidate.measured_size.height > natural_height {
            lower = mid;
        } else {
            upper = mid;
        }
    }
    let mut width = upper.ceil();
    if width > natural.width {
        width = upper;
    }
    let result = compute_text_flow(text, measurer, segmenter, width);
    if result.measured_size.height > natural_height
        || result.measured_size.width > natural_width
    {
        return natural;
    }
    WrapOutcome { result, width }
}

/// Avoids a last line shorter than a third of the text's width.
fn pretty<M, S>(text: &PreparedText, measurer: &M, segmenter: &S, natural: WrapOutcome) -> WrapOutcome
where
    M: TextMeasurer + ?Sized,
    S: Segmenter + ?Sized,
{
    let natural_width = natural.result.measured_size.width;
    if natural.result.last_line_width() >= natural_width / 3.0 {
        return natural;
    }
    let width = natural_width * 0.9;
    let result = compute_text_flow(text, measurer, segmenter, width);
    if result.measured_size.height <= natural.result.measured_size.height * 1.3 {
        WrapOutcome { result, width }
    } else {
        natural
    }
}
