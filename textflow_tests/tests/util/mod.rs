// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use textflow::style::TextStyle;
use textflow::{IcuSegmenter, PreparedText, TextFlowResult, TextMeasurer, compute_text_flow};

/// Every character is 10 wide, lines are 20 tall with the baseline at 16.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct MonoMeasurer;

impl TextMeasurer for MonoMeasurer {
    fn measure_text(&self, text: &str) -> f32 {
        text.chars().count() as f32 * 10.0
    }

    fn height(&self, _unit: Option<&str>) -> f32 {
        20.0
    }

    fn baseline(&self, _unit: &str) -> f32 {
        16.0
    }
}

/// Preprocesses `text` with declarations applied over the default style.
pub(crate) fn prepare(text: &str, declarations: &[(&str, &str)]) -> PreparedText {
    let style = TextStyle::from_declarations(declarations.iter().copied());
    textflow::preprocess(text, &style, &IcuSegmenter::new(), &MonoMeasurer)
}

pub(crate) fn flow(text: &PreparedText, width: f32) -> TextFlowResult {
    compute_text_flow(text, &MonoMeasurer, &IcuSegmenter::new(), width)
}

/// The concatenated text of each line.
pub(crate) fn lines(result: &TextFlowResult) -> Vec<String> {
    let mut lines = vec![String::new(); result.line_count()];
    for (text, run) in result.iter() {
        if let Some(line) = lines.get_mut(run.line) {
            line.push_str(text);
        }
    }
    lines
}
