// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for registration and scroll passes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! the engine calls at each stage. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching. Per-segment events additionally require the
//! `trace-rich` feature, since they fire once per segment per pass.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`) — enables dispatch of
//!   [`SegmentTargetEvent`]s.

use crate::layer::LayerKind;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a layer registration completes.
#[derive(Clone, Copy, Debug)]
pub struct LayerRegisteredEvent {
    /// Index of the layer in registration order.
    pub layer_index: usize,
    /// The layer's segment kind.
    pub kind: LayerKind,
    /// The layer's signed speed multiplier.
    pub speed: f64,
    /// How many elements the selector matched.
    pub matched: usize,
    /// How many segments were recorded (≤ `matched`; background layers skip
    /// imageless elements).
    pub segments: usize,
}

/// Marks the beginning of a scroll pass.
#[derive(Clone, Copy, Debug)]
pub struct PassBeginEvent {
    /// Monotonic pass counter.
    pub pass_index: u64,
    /// Scroll position the pass computes against, read once at pass start.
    pub scroll_top: f64,
}

/// Marks the end of a scroll pass.
#[derive(Clone, Copy, Debug)]
pub struct PassEndEvent {
    /// Pass counter.
    pub pass_index: u64,
    /// How many segments were recomputed and written.
    pub segments_visited: usize,
}

/// Emitted for every computed segment target (requires `trace-rich`).
#[derive(Clone, Copy, Debug)]
pub struct SegmentTargetEvent {
    /// Pass counter.
    pub pass_index: u64,
    /// Layer index in registration order.
    pub layer_index: usize,
    /// Segment index in match order.
    pub segment_index: usize,
    /// Applied left coordinate.
    pub left: f64,
    /// Applied top coordinate.
    pub top: f64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the engine.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a layer registration completes.
    fn on_layer_registered(&mut self, e: &LayerRegisteredEvent) {
        _ = e;
    }

    /// Called at the beginning of a scroll pass.
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        _ = e;
    }

    /// Called at the end of a scroll pass.
    fn on_pass_end(&mut self, e: &PassEndEvent) {
        _ = e;
    }

    /// Called for every computed segment target (dispatched only when the
    /// `trace-rich` feature is enabled).
    fn on_segment_target(&mut self, e: &SegmentTargetEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`LayerRegisteredEvent`].
    #[inline]
    pub fn layer_registered(&mut self, e: &LayerRegisteredEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layer_registered(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PassBeginEvent`].
    #[inline]
    pub fn pass_begin(&mut self, e: &PassBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pass_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PassEndEvent`].
    #[inline]
    pub fn pass_end(&mut self, e: &PassEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pass_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SegmentTargetEvent`] (dispatched only under `trace-rich`).
    #[inline]
    pub fn segment_target(&mut self, e: &SegmentTargetEvent) {
        #[cfg(feature = "trace-rich")]
        if let Some(s) = &mut self.sink {
            s.on_segment_target(e);
        }
        #[cfg(not(feature = "trace-rich"))]
        {
            _ = e;
        }
    }
}
