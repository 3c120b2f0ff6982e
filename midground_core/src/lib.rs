// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer model and pure offset computation for scroll parallax.
//!
//! `midground_core` maps a vertical scroll position to per-element page
//! positions so that groups of elements move at different rates and
//! directions — the parallax illusion. It is `no_std` compatible (with
//! `alloc`) and never touches a page directly: all element access goes
//! through an injected [`Surface`](surface::Surface) capability.
//!
//! # Architecture
//!
//! Registration happens once per layer; thereafter every scroll
//! notification runs a full recomputation pass:
//!
//! ```text
//!   Engine::add_layer ──► layer::build ──► LayerRegistry
//!                             │ (Surface reads + one-time style writes)
//!
//!   Surface::on_scroll ──► dispatcher ──► OffsetAlgorithm ──► SegmentTarget
//!                                                                 │
//!                                              Surface (write) ◄──┘
//! ```
//!
//! **[`layer`]** — Layers, segments, and registration-time snapshot
//! capture. Segments freeze their starting positions when registered and
//! never refresh them.
//!
//! **[`offset`]** — The pure `(segment, speed, scroll_top)` →
//! [`SegmentTarget`](offset::SegmentTarget) computation, behind the
//! [`OffsetAlgorithm`](offset::OffsetAlgorithm) strategy seam.
//!
//! **[`surface`]** — The [`Surface`](surface::Surface) trait that hosts
//! implement to provide element lookup, measurement, mutation, and scroll
//! notification.
//!
//! **[`engine`]** — The public [`Engine`](engine::Engine) owning one
//! Surface and one instance-local layer registry.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types
//! for registration and pass instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-segment
//!   target events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

mod dispatcher;
pub mod engine;
pub mod layer;
pub mod offset;
pub mod surface;
pub mod trace;

#[cfg(test)]
pub(crate) mod testutil;
