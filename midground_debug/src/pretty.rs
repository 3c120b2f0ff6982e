// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use midground_core::trace::{
    LayerRegisteredEvent, PassBeginEvent, PassEndEvent, SegmentTargetEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_layer_registered(&mut self, e: &LayerRegisteredEvent) {
        let _ = writeln!(
            self.writer,
            "[layer] index={} kind={:?} speed={} matched={} segments={}",
            e.layer_index, e.kind, e.speed, e.matched, e.segments,
        );
    }

    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[pass:begin] pass={} scroll_top={}",
            e.pass_index, e.scroll_top,
        );
    }

    fn on_pass_end(&mut self, e: &PassEndEvent) {
        let _ = writeln!(
            self.writer,
            "[pass:end] pass={} segments={}",
            e.pass_index, e.segments_visited,
        );
    }

    fn on_segment_target(&mut self, e: &SegmentTargetEvent) {
        let _ = writeln!(
            self.writer,
            "[segment] pass={} layer={} segment={} left={} top={}",
            e.pass_index, e.layer_index, e.segment_index, e.left, e.top,
        );
    }
}
