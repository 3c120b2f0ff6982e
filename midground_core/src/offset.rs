// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure per-segment offset computation.
//!
//! Every scroll pass maps `(segment, speed, scroll_top)` to one
//! [`SegmentTarget`]. The computation is deterministic and side-effect free
//! given the segment's registration snapshot: identical `scroll_top` always
//! yields an identical target, independent of call count or history.
//!
//! The formula is selected per layer by [`AlgorithmId`] through the
//! [`OffsetAlgorithm`] strategy trait. One strategy exists today,
//! [`StandardOffset`]; unknown ids resolve to it, the same default-aliasing
//! applied to unknown layer kinds at registration.

use core::fmt;

use kurbo::Point;

use crate::layer::Segment;
use crate::surface::ElementRef;

/// Selects which offset formula a layer uses during scroll passes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlgorithmId(pub u32);

impl AlgorithmId {
    /// The standard formula implemented by [`StandardOffset`].
    pub const STANDARD: Self = Self(1);
}

impl Default for AlgorithmId {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Debug for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AlgorithmId({})", self.0)
    }
}

/// One computed write: where a segment should be on the page for a given
/// scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentTarget {
    /// Move the element itself to `position` (applied via
    /// [`Surface::set_offset`](crate::surface::Surface::set_offset)).
    Offset {
        /// The element to move.
        element: ElementRef,
        /// Target page position (`x` = left, `y` = top).
        position: Point,
    },
    /// Re-anchor the element's background image to `position` (applied as a
    /// `"{left}px {top}px"` background-position style).
    BackgroundPosition {
        /// The element whose background moves.
        element: ElementRef,
        /// Target background-position coordinates.
        position: Point,
    },
}

impl SegmentTarget {
    /// Returns the element the write applies to.
    #[must_use]
    pub fn element(&self) -> ElementRef {
        match self {
            Self::Offset { element, .. } | Self::BackgroundPosition { element, .. } => *element,
        }
    }

    /// Returns the computed coordinates.
    #[must_use]
    pub fn position(&self) -> Point {
        match self {
            Self::Offset { position, .. } | Self::BackgroundPosition { position, .. } => *position,
        }
    }
}

/// A pluggable offset formula.
pub trait OffsetAlgorithm {
    /// Computes the target for one segment at one scroll position.
    fn target(&self, segment: &Segment, speed: f64, scroll_top: f64) -> SegmentTarget;
}

/// The scaled, floored distance between a segment's starting offset top and
/// the current scroll position. Shared by every formula.
#[must_use]
pub fn vertical_offset(starting_offset_top: f64, scroll_top: f64, speed: f64) -> f64 {
    libm::floor((starting_offset_top - scroll_top) * speed)
}

/// The standard offset formula.
///
/// - Background, `speed < 0`: `top = background_start.y + vertical_offset`.
/// - Background, otherwise: `top = -vertical_offset`.
/// - Element: `top = element_start.y - vertical_offset`, either sign.
///
/// Horizontal coordinates never vary: a background keeps its starting left,
/// an element keeps its container's starting left.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardOffset;

impl OffsetAlgorithm for StandardOffset {
    fn target(&self, segment: &Segment, speed: f64, scroll_top: f64) -> SegmentTarget {
        let vertical = vertical_offset(segment.starting_offset_top(), scroll_top, speed);
        match segment {
            Segment::Background(seg) => {
                let top = if speed < 0.0 {
                    seg.background_start.y + vertical
                } else {
                    -vertical
                };
                SegmentTarget::BackgroundPosition {
                    element: seg.element,
                    position: Point::new(seg.background_start.x, top),
                }
            }
            Segment::Element(seg) => SegmentTarget::Offset {
                element: seg.element,
                position: Point::new(seg.starting_offset.x, seg.element_start.y - vertical),
            },
        }
    }
}

/// Resolves an algorithm id to its strategy.
///
/// Only the standard formula is implemented; unknown ids alias to it rather
/// than failing.
#[must_use]
pub fn resolve(_id: AlgorithmId) -> &'static dyn OffsetAlgorithm {
    &StandardOffset
}

/// Whether either edge of a segment's container lies within the viewport
/// window `[scroll_top, scroll_top + viewport_height)`.
///
/// Optional culling hook: segments do not snapshot container heights, so
/// the extent is an explicit argument. The default scroll pass does not
/// consult this — all segments are processed unconditionally.
#[must_use]
pub fn is_in_view(
    starting_offset_top: f64,
    container_extent: f64,
    scroll_top: f64,
    viewport_height: f64,
) -> bool {
    let within =
        |edge: f64| edge >= scroll_top && edge < scroll_top + viewport_height;
    within(starting_offset_top) || within(starting_offset_top + container_extent)
}
