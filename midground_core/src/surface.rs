// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface contract for page integrations.
//!
//! Midground splits page-specific work into *host* crates. The core never
//! touches a real page: everything it needs — locating elements, reading
//! computed style, measuring images, writing positions, scroll
//! notification — goes through the [`Surface`] trait. A host provides the
//! following pieces:
//!
//! - **Element access** — [`match_elements`](Surface::match_elements) mints
//!   opaque [`ElementRef`] handles in selector-match order. The core stores
//!   and passes handles back without interpreting them.
//!
//! - **Measurement** — page offsets, viewport height, scroll position, and
//!   natural image heights. The core reads these at registration time and
//!   (for the scroll position) once per scroll pass.
//!
//! - **Mutation** — [`set_offset`](Surface::set_offset) and
//!   [`set_style`](Surface::set_style) apply computed targets.
//!
//! - **Scroll notification** — [`on_scroll`](Surface::on_scroll) registers a
//!   handler fired on every scroll event. The host serializes notifications;
//!   handlers are invoked strictly one at a time in arrival order.
//!
//! # Crate boundaries
//!
//! `midground_core` owns the layer model, segment registration, and offset
//! computation. Host crates (a real page binding, or the scripted page in
//! `midground_page_harness`) implement `Surface` and hand it to
//! [`Engine::new`](crate::engine::Engine::new). The core assumes reads
//! succeed for every element it has previously recorded; elements vanishing
//! from the page are the host's problem to surface.
//!
//! # Coordinate convention
//!
//! Page positions are [`kurbo::Point`] values in CSS pixels with `x` = left
//! and `y` = top, page-relative (not viewport-relative).

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

/// An opaque handle to a page element.
///
/// Hosts mint these from [`Surface::match_elements`]; the core passes them
/// back through read and write operations without interpreting the value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef(pub u32);

impl fmt::Debug for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementRef({})", self.0)
    }
}

/// Callback invoked by the host on every scroll event.
pub type ScrollHandler = Box<dyn FnMut()>;

/// Capability interface over the page environment.
///
/// Any environment providing these operations — a real page binding or a
/// scripted test double — is a valid collaborator. See the
/// [module docs](self) for the contract split.
pub trait Surface {
    /// Token returned by [`on_scroll`](Self::on_scroll); dropping or keeping
    /// it is host-defined (e.g. an unsubscribe guard or a plain id).
    type Subscription;

    /// Returns the elements matching `selector`, in match order.
    ///
    /// Zero matches is legal and yields an empty sequence, not an error.
    fn match_elements(&self, selector: &str) -> Vec<ElementRef>;

    /// Returns the element's computed background-image value.
    ///
    /// The sentinel `"none"` indicates no background image. Other values are
    /// raw CSS (typically a `url("...")` wrapper).
    fn background_image(&self, element: ElementRef) -> String;

    /// Returns the raw computed horizontal component of the element's
    /// background position, units included when present (e.g. `"40px"`,
    /// `"50%"`, `"left"`).
    fn background_position_x(&self, element: ElementRef) -> String;

    /// Returns the element's page-relative position.
    fn offset(&self, element: ElementRef) -> Point;

    /// Returns the element's layout container (its parent).
    fn parent(&self, element: ElementRef) -> ElementRef;

    /// Moves the element to a new page-relative position.
    fn set_offset(&mut self, element: ElementRef, position: Point);

    /// Sets a single CSS property on the element.
    fn set_style(&mut self, element: ElementRef, property: &str, value: &str);

    /// Returns the viewport height in pixels.
    fn viewport_height(&self) -> f64;

    /// Returns the current vertical scroll position in pixels.
    fn scroll_top(&self) -> f64;

    /// Registers `handler` to be invoked on every scroll event.
    fn on_scroll(&mut self, handler: ScrollHandler) -> Self::Subscription;

    /// Returns the natural (intrinsic) height of the image at `url`.
    ///
    /// May incur a load; an image that has not finished loading reports
    /// `0.0`. Callers treat that as a degraded measurement, not an error.
    fn natural_image_height(&mut self, url: &str) -> f64;
}
