// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `textflow`.
//!
//! - The `util` module contains the deterministic measurer and helpers shared by all tests.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests.
//! - End-to-end layouts of whole paragraphs go into `scenarios.rs`; properties that must hold
//!   for any input go into `properties.rs`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod properties;
mod scenarios;
mod util;
