// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use textflow::style::TextStyle;
use textflow::{BreakReason, IcuSegmenter, TextNode};

use crate::util::{MonoMeasurer, flow, lines, prepare};

#[test]
fn scenario_single_line() {
    let text = prepare("Hello World", &[]);
    let result = flow(&text, 200.0);

    assert_eq!(lines(&result), ["Hello World"]);
    assert_eq!(result.line_widths, [110.0]);
    assert_eq!(result.measured_size.height, 20.0);
}

#[test]
fn scenario_trailing_space_excluded() {
    let text = prepare("Hello World", &[]);
    let result = flow(&text, 60.0);

    assert_eq!(lines(&result), ["Hello ", "World"]);
    assert_eq!(result.line_widths, [50.0, 50.0]);
    assert_eq!(result.measured_size.width, 50.0);
}

#[test]
fn scenario_break_word_into_four_lines() {
    let text = prepare("Incomprehensibilities", &[("word-break", "break-word")]);
    let result = flow(&text, 60.0);

    assert_eq!(
        lines(&result),
        ["Incomp", "rehens", "ibilit", "ies"]
    );
    assert_eq!(result.line_widths, [60.0, 60.0, 60.0, 30.0]);
}

#[test]
fn scenario_line_clamp_with_ellipsis() {
    let style = TextStyle::from_declarations([("line-clamp", "2")]);
    let node = TextNode::new("one two three four five", &style, IcuSegmenter::new(), &MonoMeasurer);
    let text = node.finalize(&MonoMeasurer, 80.0, (0.0, 0.0));

    assert!(text.truncated);
    assert_eq!(lines(&text.result), ["one two ", "three\u{2026}"]);
    assert_eq!(text.result.line_count(), 2);
    assert_eq!(text.result.measured_size.height, 40.0);
}

#[test]
fn scenario_tab_stops() {
    let text = prepare("a\tb", &[("white-space", "pre"), ("tab-size", "4")]);
    let result = flow(&text, f32::INFINITY);

    assert_eq!(result.line_widths, [50.0]);
    let b = result.iter().find(|(text, _)| *text == "b").map(|(_, run)| run.x);
    assert_eq!(b, Some(40.0));
}

#[test]
fn scenario_balance_narrows() {
    let text = prepare("aaaa bbbb cccc dddd", &[("text-wrap", "balance")]);
    let outcome = textflow::wrap::flow_with_strategy(&text, &MonoMeasurer, &IcuSegmenter::new(), 150.0);

    assert_eq!(lines(&outcome.result), ["aaaa bbbb ", "cccc dddd"]);
    assert!(outcome.width < 150.0);
}

#[test]
fn scenario_pre_line_breaks() {
    let text = prepare("first  line\n  second", &[("white-space", "pre-line")]);
    let result = flow(&text, f32::INFINITY);

    assert_eq!(lines(&result), ["first line", "second"]);
    assert_eq!(
        result.line_breaks,
        [BreakReason::Explicit, BreakReason::None]
    );
}

#[test]
fn scenario_hanging_indent() {
    let text = prepare("aa bb cc", &[("text-indent", "20px hanging")]);
    let result = flow(&text, 60.0);

    assert_eq!(lines(&result), ["aa bb ", "cc"]);
    assert_eq!(result.runs[0].x, 0.0);
    assert_eq!(result.line_widths, [50.0, 40.0]);
}
