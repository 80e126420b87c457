// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod measurer;

pub(crate) use measurer::FixedMeasurer;

use alloc::string::String;
use alloc::vec::Vec;

use crate::{FlowConfig, PreparedText, TextFlowResult, compute_text_flow};
use crate::segment::IcuSegmenter;

/// Prepared text from literal units without any break flags.
pub(crate) fn units(units: &[&str], config: FlowConfig) -> PreparedText {
    PreparedText::from_units(
        units.iter().map(|unit| String::from(*unit)).collect(),
        Vec::new(),
        Vec::new(),
        config,
    )
}

/// Flows `text` with the fixed measurer and the ICU segmenter.
pub(crate) fn flow(text: &PreparedText, width: f32) -> TextFlowResult {
    compute_text_flow(text, &FixedMeasurer::default(), &IcuSegmenter::new(), width)
}

/// The texts of the runs on `line`.
pub(crate) fn line_texts(result: &TextFlowResult, line: usize) -> Vec<&str> {
    result
        .iter()
        .filter(|(_, run)| run.line == line)
        .map(|(text, _)| text)
        .collect()
}
