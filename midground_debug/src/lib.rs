// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for Midground diagnostics.
//!
//! This crate provides [`TraceSink`](midground_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`] — shared in-memory recording with
//!   [`replay`](recorder::RecorderSink::replay) for playback into another
//!   sink.
//! - [`json::export`] — writes a JSON document from recorded events.

pub mod json;
pub mod pretty;
pub mod recorder;
