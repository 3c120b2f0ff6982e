// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted page surface and scroll driver for deterministic, headless
//! parallax testing.
//!
//! A [`ScriptedPage`] is declared up front: elements with page offsets and
//! parents, background images with natural heights, selectors bound to
//! elements in match order. [`ScriptedPage::split`] then produces the two
//! halves of the harness:
//!
//! - [`PageSurface`] — implements [`Surface`] and is moved into the engine.
//! - [`ScrollDriver`] — stays with the test or demo. It sets the scroll
//!   position, fires subscribed handlers in order, and exposes the recorded
//!   write log.
//!
//! Both halves share the same interior page state, so writes performed by
//! the engine are immediately observable through the driver. Every
//! `set_style` and `set_offset` call is recorded as a [`WriteRecord`] in
//! arrival order.
//!
//! Images declared with [`load_image`](ScriptedPage::load_image) report
//! their natural height; images referenced but never declared behave like
//! resources that have not finished loading and measure `0.0`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use kurbo::Point;
use midground_core::surface::{ElementRef, ScrollHandler, Surface};

/// One recorded Surface write, in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub enum WriteRecord {
    /// A `set_style` call.
    Style {
        /// The element written to.
        element: ElementRef,
        /// CSS property name.
        property: String,
        /// CSS value.
        value: String,
    },
    /// A `set_offset` call.
    Offset {
        /// The element moved.
        element: ElementRef,
        /// The applied page position.
        position: Point,
    },
}

#[derive(Clone, Debug)]
struct PageElement {
    offset: Point,
    height: f64,
    parent: u32,
    background_image: String,
    background_position_x: String,
}

#[derive(Debug)]
struct PageState {
    elements: Vec<PageElement>,
    selectors: BTreeMap<String, Vec<u32>>,
    images: BTreeMap<String, f64>,
    viewport_height: f64,
    scroll_top: f64,
    writes: Vec<WriteRecord>,
}

/// Declarative builder for a scripted page.
#[derive(Debug)]
pub struct ScriptedPage {
    state: PageState,
}

impl ScriptedPage {
    /// Creates a page with the given viewport height and a root container
    /// ("body") at the page origin.
    #[must_use]
    pub fn new(viewport_height: f64) -> Self {
        Self {
            state: PageState {
                elements: vec![PageElement {
                    offset: Point::ZERO,
                    height: 0.0,
                    parent: 0,
                    background_image: "none".to_string(),
                    background_position_x: String::new(),
                }],
                selectors: BTreeMap::new(),
                images: BTreeMap::new(),
                viewport_height,
                scroll_top: 0.0,
                writes: Vec::new(),
            },
        }
    }

    /// Returns the root container element.
    #[must_use]
    pub fn body(&self) -> ElementRef {
        ElementRef(0)
    }

    /// Adds an element under `parent` at the given page offset.
    pub fn add_element(&mut self, parent: ElementRef, offset: Point) -> ElementRef {
        let idx = u32::try_from(self.state.elements.len()).expect("element count fits in u32");
        self.state.elements.push(PageElement {
            offset,
            height: 0.0,
            parent: parent.0,
            background_image: "none".to_string(),
            background_position_x: String::new(),
        });
        ElementRef(idx)
    }

    /// Sets an element's layout height (used by tests that cull with
    /// container extents; the engine itself never reads it).
    pub fn set_height(&mut self, element: ElementRef, height: f64) {
        self.state.elements[element.0 as usize].height = height;
    }

    /// Gives an element a background image (raw CSS value, typically
    /// `url("...")`) and a computed background-position x component.
    pub fn style_background(&mut self, element: ElementRef, image: &str, position_x: &str) {
        let el = &mut self.state.elements[element.0 as usize];
        el.background_image = image.to_string();
        el.background_position_x = position_x.to_string();
    }

    /// Declares an image as loaded with the given natural height.
    ///
    /// Referencing an image that was never loaded models a resource still
    /// in flight: it measures `0.0`, exactly like a real page queried before
    /// the load completes.
    pub fn load_image(&mut self, url: &str, natural_height: f64) {
        self.state.images.insert(url.to_string(), natural_height);
    }

    /// Binds a selector to elements in match order.
    pub fn bind_selector<I>(&mut self, selector: &str, elements: I)
    where
        I: IntoIterator<Item = ElementRef>,
    {
        self.state.selectors.insert(
            selector.to_string(),
            elements.into_iter().map(|e| e.0).collect(),
        );
    }

    /// Splits the page into its surface and driver halves.
    #[must_use]
    pub fn split(self) -> (PageSurface, ScrollDriver) {
        let state = Rc::new(RefCell::new(self.state));
        let handlers = Rc::new(RefCell::new(Vec::new()));
        (
            PageSurface {
                state: Rc::clone(&state),
                handlers: Rc::clone(&handlers),
            },
            ScrollDriver { state, handlers },
        )
    }
}

/// Token returned by [`PageSurface`]'s scroll subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription(pub usize);

/// The [`Surface`] half of a scripted page; move this into the engine.
pub struct PageSurface {
    state: Rc<RefCell<PageState>>,
    handlers: Rc<RefCell<Vec<ScrollHandler>>>,
}

impl std::fmt::Debug for PageSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageSurface")
            .field("elements", &self.state.borrow().elements.len())
            .finish_non_exhaustive()
    }
}

impl Surface for PageSurface {
    type Subscription = Subscription;

    fn match_elements(&self, selector: &str) -> Vec<ElementRef> {
        self.state
            .borrow()
            .selectors
            .get(selector)
            .map(|ids| ids.iter().map(|&id| ElementRef(id)).collect())
            .unwrap_or_default()
    }

    fn background_image(&self, element: ElementRef) -> String {
        self.state.borrow().elements[element.0 as usize]
            .background_image
            .clone()
    }

    fn background_position_x(&self, element: ElementRef) -> String {
        self.state.borrow().elements[element.0 as usize]
            .background_position_x
            .clone()
    }

    fn offset(&self, element: ElementRef) -> Point {
        self.state.borrow().elements[element.0 as usize].offset
    }

    fn parent(&self, element: ElementRef) -> ElementRef {
        ElementRef(self.state.borrow().elements[element.0 as usize].parent)
    }

    fn set_offset(&mut self, element: ElementRef, position: Point) {
        let mut state = self.state.borrow_mut();
        state.elements[element.0 as usize].offset = position;
        state.writes.push(WriteRecord::Offset { element, position });
    }

    fn set_style(&mut self, element: ElementRef, property: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        // Height writes land on the element like a real page would apply
        // them; other properties are only recorded.
        if property == "height" {
            if let Some(height) = value.strip_suffix("px").and_then(|v| v.parse().ok()) {
                state.elements[element.0 as usize].height = height;
            }
        }
        state.writes.push(WriteRecord::Style {
            element,
            property: property.to_string(),
            value: value.to_string(),
        });
    }

    fn viewport_height(&self) -> f64 {
        self.state.borrow().viewport_height
    }

    fn scroll_top(&self) -> f64 {
        self.state.borrow().scroll_top
    }

    fn on_scroll(&mut self, handler: ScrollHandler) -> Subscription {
        let mut handlers = self.handlers.borrow_mut();
        handlers.push(handler);
        Subscription(handlers.len() - 1)
    }

    fn natural_image_height(&mut self, url: &str) -> f64 {
        self.state.borrow().images.get(url).copied().unwrap_or(0.0)
    }
}

/// The test-facing half of a scripted page.
///
/// Fires scroll notifications and exposes the current page state and the
/// recorded write log.
pub struct ScrollDriver {
    state: Rc<RefCell<PageState>>,
    handlers: Rc<RefCell<Vec<ScrollHandler>>>,
}

impl std::fmt::Debug for ScrollDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollDriver")
            .field("scroll_top", &self.state.borrow().scroll_top)
            .field("handlers", &self.handlers.borrow().len())
            .finish_non_exhaustive()
    }
}

impl ScrollDriver {
    /// Sets the scroll position and fires every subscribed handler in
    /// subscription order, mirroring a host that serializes scroll events.
    pub fn scroll_to(&self, top: f64) {
        self.state.borrow_mut().scroll_top = top;
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler();
        }
    }

    /// Returns the current scroll position.
    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.state.borrow().scroll_top
    }

    /// Returns an element's current page offset (reflecting engine writes).
    #[must_use]
    pub fn element_offset(&self, element: ElementRef) -> Point {
        self.state.borrow().elements[element.0 as usize].offset
    }

    /// Returns an element's current layout height.
    #[must_use]
    pub fn element_height(&self, element: ElementRef) -> f64 {
        self.state.borrow().elements[element.0 as usize].height
    }

    /// Returns a copy of the write log.
    #[must_use]
    pub fn writes(&self) -> Vec<WriteRecord> {
        self.state.borrow().writes.clone()
    }

    /// Drains and returns the write log.
    pub fn take_writes(&self) -> Vec<WriteRecord> {
        std::mem::take(&mut self.state.borrow_mut().writes)
    }

    /// Returns how many scroll handlers are subscribed.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_resolve_in_bound_order() {
        let mut page = ScriptedPage::new(600.0);
        let body = page.body();
        let a = page.add_element(body, Point::new(0.0, 10.0));
        let b = page.add_element(body, Point::new(0.0, 20.0));
        page.bind_selector(".row", [b, a]);
        let (surface, _driver) = page.split();

        assert_eq!(surface.match_elements(".row"), [b, a]);
        assert!(surface.match_elements(".absent").is_empty());
    }

    #[test]
    fn writes_are_recorded_in_arrival_order() {
        let mut page = ScriptedPage::new(600.0);
        let body = page.body();
        let el = page.add_element(body, Point::new(0.0, 50.0));
        let (mut surface, driver) = page.split();

        surface.set_style(el, "background-repeat", "no-repeat");
        surface.set_offset(el, Point::new(0.0, 75.0));

        assert_eq!(
            driver.writes(),
            [
                WriteRecord::Style {
                    element: el,
                    property: "background-repeat".to_string(),
                    value: "no-repeat".to_string(),
                },
                WriteRecord::Offset {
                    element: el,
                    position: Point::new(0.0, 75.0),
                },
            ]
        );
        assert_eq!(driver.element_offset(el), Point::new(0.0, 75.0));
    }

    #[test]
    fn height_styles_apply_to_the_element() {
        let mut page = ScriptedPage::new(600.0);
        let body = page.body();
        let el = page.add_element(body, Point::ZERO);
        let (mut surface, driver) = page.split();

        surface.set_style(el, "height", "600px");
        assert_eq!(driver.element_height(el), 600.0);
    }

    #[test]
    fn scroll_driver_fires_handlers_in_subscription_order() {
        let page = ScriptedPage::new(600.0);
        let (mut surface, driver) = page.split();

        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in [1, 2] {
            let order = Rc::clone(&order);
            surface.on_scroll(Box::new(move || order.borrow_mut().push(tag)));
        }

        driver.scroll_to(120.0);
        assert_eq!(*order.borrow(), [1, 2]);
        assert_eq!(driver.scroll_top(), 120.0);
        // The surface half reads the same state.
        assert_eq!(surface.scroll_top(), 120.0);
    }

    #[test]
    fn undeclared_images_measure_zero() {
        let mut page = ScriptedPage::new(600.0);
        page.load_image("ready.png", 1200.0);
        let (mut surface, _driver) = page.split();

        assert_eq!(surface.natural_image_height("ready.png"), 1200.0);
        assert_eq!(surface.natural_image_height("pending.png"), 0.0);
    }
}
