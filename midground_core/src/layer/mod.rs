// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer and segment data model.
//!
//! A *layer* is one scrolling group: a selector, a signed speed multiplier,
//! an offset-algorithm id, and an ordered sequence of segments. A *segment*
//! is one tracked page element plus the position snapshot captured when its
//! layer was registered:
//!
//! - [`Segment::Background`] — parallaxed by re-anchoring the element's
//!   background image. Only created when the element has a background image
//!   at registration time; elements without one are silently skipped.
//! - [`Segment::Element`] — parallaxed by moving the element itself. Always
//!   created for every match of an element-kind layer.
//!
//! # Snapshot invariants
//!
//! All `*_start` and `starting_offset` fields are captured exactly once, at
//! registration, and never recomputed. If the page reflows afterwards the
//! computed positions drift; re-registering means constructing a fresh
//! engine. Segment order equals selector-match order and is never
//! reshuffled. Layers are immutable after the registration call that
//! creates them.

mod builder;
mod registry;
mod segment;

pub use builder::{BuiltLayer, build};
pub use registry::{Layer, LayerRegistry};
pub use segment::{BackgroundSegment, ElementSegment, LayerKind, Segment};
