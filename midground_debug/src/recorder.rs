// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared in-memory event recording and playback.
//!
//! [`RecorderSink`] implements [`TraceSink`] and appends every event to a
//! shared log. Clones share the same log, so one clone can be boxed into
//! the engine while another stays with the caller for inspection after the
//! scroll session. [`replay`](RecorderSink::replay) plays a recording back
//! into any other sink in original order.

use std::cell::RefCell;
use std::rc::Rc;

use midground_core::trace::{
    LayerRegisteredEvent, PassBeginEvent, PassEndEvent, SegmentTargetEvent, TraceSink,
};

/// One recorded trace event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A layer registration completed.
    LayerRegistered(LayerRegisteredEvent),
    /// A scroll pass began.
    PassBegin(PassBeginEvent),
    /// A scroll pass ended.
    PassEnd(PassEndEvent),
    /// A segment target was computed.
    SegmentTarget(SegmentTargetEvent),
}

/// A [`TraceSink`] that records events into a shared in-memory log.
#[derive(Clone, Debug, Default)]
pub struct RecorderSink {
    events: Rc<RefCell<Vec<RecordedEvent>>>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events, in arrival order.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Returns how many events have been recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Clears the log.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Plays the recording back into `sink`, in original order.
    pub fn replay(&self, sink: &mut dyn TraceSink) {
        for event in self.events.borrow().iter() {
            match event {
                RecordedEvent::LayerRegistered(e) => sink.on_layer_registered(e),
                RecordedEvent::PassBegin(e) => sink.on_pass_begin(e),
                RecordedEvent::PassEnd(e) => sink.on_pass_end(e),
                RecordedEvent::SegmentTarget(e) => sink.on_segment_target(e),
            }
        }
    }

    fn push(&self, event: RecordedEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl TraceSink for RecorderSink {
    fn on_layer_registered(&mut self, e: &LayerRegisteredEvent) {
        self.push(RecordedEvent::LayerRegistered(*e));
    }

    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        self.push(RecordedEvent::PassBegin(*e));
    }

    fn on_pass_end(&mut self, e: &PassEndEvent) {
        self.push(RecordedEvent::PassEnd(*e));
    }

    fn on_segment_target(&mut self, e: &SegmentTargetEvent) {
        self.push(RecordedEvent::SegmentTarget(*e));
    }
}
