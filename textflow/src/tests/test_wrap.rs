// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::FlowConfig;
use crate::segment::IcuSegmenter;
use crate::style::TextWrap;
use crate::wrap::flow_with_strategy;

use super::utils::{FixedMeasurer, flow, units};

#[test]
fn balance_narrows_to_even_lines() {
    let text = units(&["aaaa ", "bbbb ", "cccc ", "dddd"], FlowConfig::default())
        .with_text_wrap(TextWrap::Balance);
    let natural = flow(&text, 150.0);
    assert_eq!(natural.line_widths, [140.0, 40.0]);

    let outcome = flow_with_strategy(&text, &FixedMeasurer::default(), &IcuSegmenter::new(), 150.0);
    assert_eq!(outcome.width, 91.0);
    assert_eq!(outcome.result.line_widths, [90.0, 90.0]);
    assert!(outcome.result.measured_size.width <= natural.measured_size.width);
    assert!(outcome.result.measured_size.height <= natural.measured_size.height);
}

#[test]
fn balance_keeps_single_lines() {
    let text = units(&["aaaa ", "bbbb"], FlowConfig::default()).with_text_wrap(TextWrap::Balance);
    let outcome = flow_with_strategy(&text, &FixedMeasurer::default(), &IcuSegmenter::new(), 150.0);
    assert_eq!(outcome.width, 150.0);
    assert_eq!(outcome.result, flow(&text, 150.0));
}

#[test]
fn pretty_avoids_short_last_line() {
    let text = units(&["aaaa ", "bbbb ", "cccc ", "d"], FlowConfig::default())
        .with_text_wrap(TextWrap::Pretty);
    let outcome = flow_with_strategy(&text, &FixedMeasurer::default(), &IcuSegmenter::new(), 150.0);
    assert!((outcome.width - 126.0).abs() < 0.01, "width was {}", outcome.width);
    assert_eq!(outcome.result.line_widths, [90.0, 60.0]);
}

#[test]
fn pretty_keeps_balanced_enough_text() {
    let text = units(&["aaaa ", "bbbb ", "cccc ", "dddddd"], FlowConfig::default())
        .with_text_wrap(TextWrap::Pretty);
    let outcome = flow_with_strategy(&text, &FixedMeasurer::default(), &IcuSegmenter::new(), 150.0);
    assert_eq!(outcome.width, 150.0);
    assert_eq!(outcome.result.line_widths, [140.0, 60.0]);
}

#[test]
fn greedy_wrap_is_unchanged() {
    let text = units(&["aaaa ", "bbbb ", "cccc ", "d"], FlowConfig::default());
    let outcome = flow_with_strategy(&text, &FixedMeasurer::default(), &IcuSegmenter::new(), 150.0);
    assert_eq!(outcome.result, flow(&text, 150.0));
}
