// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal scripted [`Surface`] for unit tests.
//!
//! A [`StubSurface`] is moved into the code under test while the paired
//! [`StubPage`] handle stays with the test to script the page and fire
//! scroll events. Both halves share the same interior state. The full
//! harness for integration tests lives in `midground_page_harness`; this
//! stub only covers what in-crate unit tests need.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::Point;

use crate::surface::{ElementRef, ScrollHandler, Surface};

/// One recorded Surface write.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum WriteOp {
    /// `set_style(element, property, value)`.
    Style(ElementRef, String, String),
    /// `set_offset(element, position)`.
    Offset(ElementRef, Point),
}

#[derive(Clone, Debug)]
struct StubElement {
    offset: Point,
    parent: u32,
    background_image: String,
    background_position_x: String,
}

#[derive(Debug, Default)]
struct PageModel {
    elements: Vec<StubElement>,
    selectors: BTreeMap<String, Vec<u32>>,
    images: BTreeMap<String, f64>,
    scroll_top: f64,
    viewport_height: f64,
    writes: Vec<WriteOp>,
}

/// The Surface half of the stub; moved into the code under test.
pub(crate) struct StubSurface {
    model: Rc<RefCell<PageModel>>,
    handlers: Rc<RefCell<Vec<ScrollHandler>>>,
}

/// The scripting half of the stub; kept by the test.
pub(crate) struct StubPage {
    model: Rc<RefCell<PageModel>>,
    handlers: Rc<RefCell<Vec<ScrollHandler>>>,
}

impl StubSurface {
    /// Creates a paired surface + scripting handle for an empty page.
    pub(crate) fn new(viewport_height: f64) -> (Self, StubPage) {
        let model = Rc::new(RefCell::new(PageModel {
            viewport_height,
            ..PageModel::default()
        }));
        let handlers = Rc::new(RefCell::new(Vec::new()));
        let surface = Self {
            model: Rc::clone(&model),
            handlers: Rc::clone(&handlers),
        };
        (surface, StubPage { model, handlers })
    }
}

impl StubPage {
    /// Adds an element at `offset` whose layout container sits at
    /// `parent_offset`, returning the element's handle.
    pub(crate) fn add_element(&self, offset: Point, parent_offset: Point) -> ElementRef {
        let mut model = self.model.borrow_mut();
        let parent_idx = u32::try_from(model.elements.len()).unwrap();
        model.elements.push(StubElement {
            offset: parent_offset,
            parent: parent_idx,
            background_image: "none".to_string(),
            background_position_x: String::new(),
        });
        let idx = u32::try_from(model.elements.len()).unwrap();
        model.elements.push(StubElement {
            offset,
            parent: parent_idx,
            background_image: "none".to_string(),
            background_position_x: String::new(),
        });
        ElementRef(idx)
    }

    /// Gives an element a background image and computed x-position.
    pub(crate) fn set_background(&self, element: ElementRef, image: &str, position_x: &str) {
        let mut model = self.model.borrow_mut();
        let el = &mut model.elements[element.0 as usize];
        el.background_image = image.to_string();
        el.background_position_x = position_x.to_string();
    }

    /// Declares a loaded image with the given natural height. Images never
    /// declared measure `0.0` (still loading).
    pub(crate) fn define_image(&self, url: &str, natural_height: f64) {
        self.model
            .borrow_mut()
            .images
            .insert(url.to_string(), natural_height);
    }

    /// Binds a selector to elements in match order.
    pub(crate) fn bind_selector(&self, selector: &str, elements: &[ElementRef]) {
        self.model
            .borrow_mut()
            .selectors
            .insert(selector.to_string(), elements.iter().map(|e| e.0).collect());
    }

    /// Sets the scroll position and fires every subscribed handler, in
    /// subscription order.
    pub(crate) fn scroll_to(&self, top: f64) {
        self.model.borrow_mut().scroll_top = top;
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler();
        }
    }

    /// Returns a copy of all recorded writes so far.
    pub(crate) fn writes(&self) -> Vec<WriteOp> {
        self.model.borrow().writes.clone()
    }

    /// Clears the recorded writes.
    pub(crate) fn clear_writes(&self) {
        self.model.borrow_mut().writes.clear();
    }

    /// Returns how many handlers have subscribed.
    pub(crate) fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl Surface for StubSurface {
    type Subscription = usize;

    fn match_elements(&self, selector: &str) -> Vec<ElementRef> {
        self.model
            .borrow()
            .selectors
            .get(selector)
            .map(|ids| ids.iter().map(|&id| ElementRef(id)).collect())
            .unwrap_or_default()
    }

    fn background_image(&self, element: ElementRef) -> String {
        self.model.borrow().elements[element.0 as usize]
            .background_image
            .clone()
    }

    fn background_position_x(&self, element: ElementRef) -> String {
        self.model.borrow().elements[element.0 as usize]
            .background_position_x
            .clone()
    }

    fn offset(&self, element: ElementRef) -> Point {
        self.model.borrow().elements[element.0 as usize].offset
    }

    fn parent(&self, element: ElementRef) -> ElementRef {
        ElementRef(self.model.borrow().elements[element.0 as usize].parent)
    }

    fn set_offset(&mut self, element: ElementRef, position: Point) {
        let mut model = self.model.borrow_mut();
        model.elements[element.0 as usize].offset = position;
        model.writes.push(WriteOp::Offset(element, position));
    }

    fn set_style(&mut self, element: ElementRef, property: &str, value: &str) {
        self.model.borrow_mut().writes.push(WriteOp::Style(
            element,
            property.to_string(),
            value.to_string(),
        ));
    }

    fn viewport_height(&self) -> f64 {
        self.model.borrow().viewport_height
    }

    fn scroll_top(&self) -> f64 {
        self.model.borrow().scroll_top
    }

    fn on_scroll(&mut self, handler: ScrollHandler) -> usize {
        let mut handlers = self.handlers.borrow_mut();
        handlers.push(handler);
        handlers.len() - 1
    }

    fn natural_image_height(&mut self, url: &str) -> f64 {
        self.model.borrow().images.get(url).copied().unwrap_or(0.0)
    }
}
