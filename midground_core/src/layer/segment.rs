// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment variants and layer kinds.

use kurbo::Point;

use crate::surface::ElementRef;

/// How a layer's elements are parallaxed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Move each matched element itself.
    #[default]
    Element,
    /// Re-anchor each matched element's background image.
    Background,
}

impl LayerKind {
    /// Parses a kind name.
    ///
    /// `"background"` maps to [`Background`](Self::Background); any other
    /// name — including misspellings — silently aliases to
    /// [`Element`](Self::Element).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "background" => Self::Background,
            _ => Self::Element,
        }
    }
}

/// A background-image segment: the element's background is re-anchored on
/// every scroll pass while the element itself stays put.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundSegment {
    /// The tracked element.
    pub element: ElementRef,
    /// Background-position at registration (`x` = left px, `y` = top px).
    /// The left component never changes afterwards.
    pub background_start: Point,
    /// The element's own page offset at registration.
    pub starting_offset: Point,
}

/// An element segment: the element is repositioned on every scroll pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementSegment {
    /// The tracked element.
    pub element: ElementRef,
    /// The element's page offset at registration.
    pub element_start: Point,
    /// The layout container's (parent's) page offset at registration.
    /// `x` doubles as the applied left coordinate on every pass.
    pub starting_offset: Point,
}

/// One tracked page element plus its registration-time snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    /// See [`BackgroundSegment`].
    Background(BackgroundSegment),
    /// See [`ElementSegment`].
    Element(ElementSegment),
}

impl Segment {
    /// Returns the tracked element.
    #[must_use]
    pub fn element(&self) -> ElementRef {
        match self {
            Self::Background(s) => s.element,
            Self::Element(s) => s.element,
        }
    }

    /// Returns the starting offset top: the container's page top for an
    /// element segment, the element's own page top for a background segment.
    #[must_use]
    pub fn starting_offset_top(&self) -> f64 {
        match self {
            Self::Background(s) => s.starting_offset.y,
            Self::Element(s) => s.starting_offset.y,
        }
    }
}
