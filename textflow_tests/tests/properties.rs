// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use textflow::PreparedText;
use textflow::align::line_alignments;
use textflow::style::TextAlign;

use crate::util::{flow, prepare};

const SAMPLES: [&str; 4] = [
    "The quick brown fox jumps over the lazy dog.",
    "Antidisestablishmentarianism is long, and so is pneumonoultramicroscopic.",
    "tabs\tand\tmore\ttabs",
    "short\nlines\nwith\n\nbreaks",
];

const WIDTHS: [f32; 5] = [15.0, 45.0, 80.0, 200.0, f32::INFINITY];

#[test]
fn per_line_vectors_have_equal_length() {
    let variants: [&[(&str, &str)]; 2] = [
        &[],
        &[("overflow-wrap", "anywhere"), ("white-space", "pre-wrap")],
    ];
    for sample in SAMPLES {
        for declarations in variants {
            let text = prepare(sample, declarations);
            for width in WIDTHS {
                let result = flow(&text, width);
                let count = result.line_count();
                assert_eq!(result.baselines.len(), count, "{sample:?} at {width}");
                assert_eq!(result.line_segment_number.len(), count, "{sample:?} at {width}");
                assert_eq!(result.line_breaks.len(), count, "{sample:?} at {width}");
                assert_eq!(result.texts.len(), result.runs.len(), "{sample:?} at {width}");
            }
        }
    }
    let clamped = prepare(SAMPLES[0], &[("line-clamp", "3")]);
    for width in WIDTHS {
        assert!(flow(&clamped, width).line_count() <= 3);
    }
}

#[test]
fn run_positions_are_monotonic_within_lines() {
    for sample in SAMPLES {
        let text = prepare(sample, &[("word-break", "break-all"), ("white-space", "pre-wrap")]);
        for width in WIDTHS {
            let result = flow(&text, width);
            for pair in result.runs.windows(2) {
                if pair[0].line == pair[1].line {
                    assert!(pair[0].x <= pair[1].x, "{sample:?} at {width}: {pair:?}");
                }
            }
        }
    }
}

#[test]
fn flowing_is_idempotent() {
    for sample in SAMPLES {
        let text = prepare(sample, &[]);
        let first = flow(&text, 80.0);
        for width in WIDTHS {
            let _ = flow(&text, width);
        }
        assert_eq!(flow(&text, 80.0), first, "{sample:?}");
    }
}

#[test]
fn justification_fills_soft_wrapped_lines() {
    let text = prepare(SAMPLES[0], &[("text-align", "justify")]);
    let result = flow(&text, 120.0);
    let alignments = line_alignments(&result, 120.0, TextAlign::Justify);
    for (line, alignment) in alignments.iter().enumerate() {
        let segments = result.line_segment_number[line];
        if line + 1 < result.line_count() && segments > 1 {
            let filled = alignment.gutter * (segments - 1) as f32;
            let free = 120.0 - result.line_widths[line];
            assert!((filled - free).abs() < 1e-3, "line {line}: {filled} != {free}");
        }
    }
}

#[test]
fn balance_never_widens_or_adds_lines() {
    for sample in SAMPLES {
        let text = prepare(sample, &[("text-wrap", "balance")]);
        for width in [45.0, 80.0, 200.0] {
            let natural = flow(&text, width);
            let outcome = textflow::wrap::flow_with_strategy(
                &text,
                &crate::util::MonoMeasurer,
                &textflow::IcuSegmenter::new(),
                width,
            );
            assert!(outcome.result.measured_size.width <= natural.measured_size.width);
            assert!(outcome.result.measured_size.height <= natural.measured_size.height);
        }
    }
}

#[test]
fn zero_width_units_never_change_lines() {
    for sample in SAMPLES {
        for declarations in [&[][..], &[("overflow-wrap", "anywhere")][..]] {
            let text = prepare(sample, declarations);
            for width in WIDTHS {
                let natural = flow(&text, width);
                for at in 0..=text.len() {
                    let mut units = text.units().to_vec();
                    let mut required = text.required_breaks().to_vec();
                    let mut soft_hyphens = text.soft_hyphen_breaks().to_vec();
                    units.insert(at, String::new());
                    required.insert(at, false);
                    soft_hyphens.insert(at, false);
                    let padded =
                        PreparedText::from_units(units, required, soft_hyphens, text.config().clone());

                    let result = flow(&padded, width);
                    assert_eq!(
                        result.line_widths, natural.line_widths,
                        "{sample:?} at {width} with an empty unit at {at}"
                    );
                    assert_eq!(result.line_breaks, natural.line_breaks);
                }
            }
        }
    }
}
