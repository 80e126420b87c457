// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Textflow lays out styled text into lines for vector renderers.
//!
//! Text goes through a fixed pipeline:
//!
//! 1. The [preprocessor](preprocess()) applies white space, hyphenation, transform and
//!    truncation rules and splits the text into break-classified units.
//! 2. The [flow engine](flow::compute_text_flow) places the units into lines for a container
//!    width, asking a [`TextMeasurer`] for advances and metrics.
//! 3. The [wrap refiner](wrap::flow_with_strategy) re-flows at narrower widths for
//!    `text-wrap: balance` and `text-wrap: pretty`.
//! 4. [Truncation](ellipsis::truncate) and [alignment](align::align) finish the layout.
//!
//! [`TextNode`] drives all of these with an explicit two-phase API. Underline geometry that
//! skips descenders is computed separately by [`ink::build_skip_ink_segments`].
//!
//! ## Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library.
//! - `libm`: Use floating point implementations from [libm].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! [libm]: https://crates.io/crates/libm

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("textflow requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

mod error;
mod measure;
mod node;
mod preprocess;

pub mod align;
pub mod ellipsis;
pub mod flow;
pub mod ink;
pub mod segment;
pub mod style;
pub mod wrap;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind};
pub use flow::{
    BreakReason, ClippedLine, FlowConfig, PositionedRun, Size, TextFlowResult, compute_text_flow,
};
pub use measure::TextMeasurer;
pub use node::{FinalText, PlacedRun, Requirements, TextNode};
pub use preprocess::{DEFAULT_ELLIPSIS, PreparedText, preprocess};
pub use segment::{IcuSegmenter, Segmenter};
pub use style::TextStyle;
pub use wrap::WrapOutcome;
