// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registration-time segment construction.
//!
//! [`build`] converts a selector plus a [`LayerKind`] into the ordered
//! segment sequence for one layer, reading and (for background layers)
//! writing through the [`Surface`] exactly once. This is the only place the
//! engine touches the page outside a scroll pass; everything captured here
//! is frozen for the layer's lifetime.
//!
//! Background segments mutate the page at registration: background-repeat
//! is forced to `no-repeat`, the background position is re-anchored to the
//! computed start, and the element's height is forced to the viewport
//! height so a background image can span the full viewport. The element's
//! `starting_offset` snapshot is read *after* those writes.

use alloc::format;
use alloc::vec::Vec;

use kurbo::Point;

use crate::surface::Surface;

use super::segment::{BackgroundSegment, ElementSegment, LayerKind, Segment};

/// The outcome of one registration pass over a selector.
#[derive(Clone, Debug)]
pub struct BuiltLayer {
    /// Segments in selector-match order. May be shorter than `matched` for
    /// background layers (elements without a background image are skipped).
    pub segments: Vec<Segment>,
    /// How many elements the selector matched.
    pub matched: usize,
}

/// Builds the segments for one layer registration.
///
/// Elements that fit neither segment path — a background layer over an
/// element with no background image — are dropped silently: no segment, no
/// error.
pub fn build<S: Surface>(
    surface: &mut S,
    selector: &str,
    speed: f64,
    kind: LayerKind,
    viewport_height: f64,
) -> BuiltLayer {
    let elements = surface.match_elements(selector);
    let matched = elements.len();
    let mut segments = Vec::with_capacity(matched);

    for element in elements {
        match kind {
            LayerKind::Background => {
                let image = surface.background_image(element);
                if image == "none" {
                    continue;
                }

                let left = parse_px(&surface.background_position_x(element));
                // Negative-speed layers anchor the image bottom to the
                // viewport; others counter-offset the element's page top.
                let top = if speed < 0.0 {
                    -(surface.natural_image_height(image_url(&image)) - viewport_height)
                } else {
                    surface.offset(element).y * speed * -1.0
                };

                surface.set_style(element, "background-repeat", "no-repeat");
                surface.set_style(element, "background-position", &format!("{left}px {top}px"));
                surface.set_style(element, "height", &format!("{viewport_height}px"));

                segments.push(Segment::Background(BackgroundSegment {
                    element,
                    background_start: Point::new(left, top),
                    starting_offset: surface.offset(element),
                }));
            }
            LayerKind::Element => {
                let container = surface.parent(element);
                segments.push(Segment::Element(ElementSegment {
                    element,
                    element_start: surface.offset(element),
                    starting_offset: surface.offset(container),
                }));
            }
        }
    }

    BuiltLayer { segments, matched }
}

/// Parses the horizontal component of a computed background position.
///
/// Only pixel values participate; anything else (`%`, keywords, empty)
/// defaults to `0`.
fn parse_px(value: &str) -> f64 {
    match value.trim().strip_suffix("px") {
        Some(number) => number.trim().parse().unwrap_or(0.0),
        None => 0.0,
    }
}

/// Unwraps a CSS `url("...")` background-image value to the bare URL.
fn image_url(value: &str) -> &str {
    let value = value.trim();
    let value = value
        .strip_prefix("url(")
        .and_then(|v| v.strip_suffix(')'))
        .unwrap_or(value);
    value.trim_matches('"')
}
