// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll subscription wiring and the per-notification pass.
//!
//! [`attach`] registers a single handler with the surface at engine
//! construction. Each notification runs [`run_pass`]: read the scroll
//! position once, then for every layer in registration order, for every
//! segment in match order, compute the target and write it through the
//! surface. There is no batching, no skip-if-unchanged, and no throttling —
//! every notification recomputes every segment.

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use core::cell::RefCell;

use crate::engine::Inner;
use crate::layer::LayerRegistry;
use crate::offset::{self, SegmentTarget};
use crate::surface::Surface;
use crate::trace::{PassBeginEvent, PassEndEvent, SegmentTargetEvent, Tracer};

/// Subscribes the engine to the surface's scroll notification.
///
/// The handler holds a weak reference: once every `Engine` handle is
/// dropped, notifications become no-ops. Notifications are serialized by
/// the host; one that lands while the engine is mid-borrow is dropped
/// rather than re-entered.
pub(crate) fn attach<S: Surface + 'static>(inner: &Rc<RefCell<Inner<S>>>) -> S::Subscription {
    let weak = Rc::downgrade(inner);
    inner.borrow_mut().surface.on_scroll(Box::new(move || {
        if let Some(inner) = weak.upgrade() {
            if let Ok(mut inner) = inner.try_borrow_mut() {
                inner.handle_scroll();
            }
        }
    }))
}

/// Runs one full pass over all layers and segments.
pub(crate) fn run_pass<S: Surface>(
    surface: &mut S,
    layers: &LayerRegistry,
    tracer: &mut Tracer<'_>,
    pass_index: u64,
) {
    let scroll_top = surface.scroll_top();
    tracer.pass_begin(&PassBeginEvent {
        pass_index,
        scroll_top,
    });

    let mut visited = 0;
    for (layer_index, layer) in layers.iter().enumerate() {
        let algorithm = offset::resolve(layer.algorithm());
        for (segment_index, segment) in layer.segments().iter().enumerate() {
            let target = algorithm.target(segment, layer.speed(), scroll_top);
            tracer.segment_target(&SegmentTargetEvent {
                pass_index,
                layer_index,
                segment_index,
                left: target.position().x,
                top: target.position().y,
            });
            apply(surface, &target);
            visited += 1;
        }
    }

    tracer.pass_end(&PassEndEvent {
        pass_index,
        segments_visited: visited,
    });
}

/// Writes one computed target through the surface.
fn apply<S: Surface>(surface: &mut S, target: &SegmentTarget) {
    match *target {
        SegmentTarget::Offset { element, position } => surface.set_offset(element, position),
        SegmentTarget::BackgroundPosition { element, position } => surface.set_style(
            element,
            "background-position",
            &format!("{}px {}px", position.x, position.y),
        ),
    }
}
