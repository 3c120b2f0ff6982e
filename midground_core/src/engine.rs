// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The public engine: construction, layer registration, and ownership.
//!
//! An [`Engine`] owns its [`Surface`] and its layer registry for the life
//! of the instance. Construction measures the viewport height and
//! subscribes to scroll notifications exactly once; every later scroll
//! event runs a full offset pass without further setup.
//!
//! Registration snapshots are frozen: if the page reflows after a layer is
//! registered (responsive resize, content inserted above a tracked
//! element), computed positions drift silently. There is no recalibration
//! operation — re-registering means constructing a fresh engine over the
//! same page.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::ToString;
use core::cell::RefCell;
use core::fmt;

use crate::dispatcher;
use crate::layer::{self, Layer, LayerKind, LayerRegistry};
use crate::offset::AlgorithmId;
use crate::surface::Surface;
use crate::trace::{LayerRegisteredEvent, TraceSink, Tracer};

/// Engine state behind the shared cell; the scroll handler and the public
/// [`Engine`] handle both reach it through `Rc<RefCell<_>>`.
pub(crate) struct Inner<S: Surface> {
    pub(crate) surface: S,
    pub(crate) layers: LayerRegistry,
    pub(crate) viewport_height: f64,
    pub(crate) pass_index: u64,
    pub(crate) sink: Option<Box<dyn TraceSink>>,
    pub(crate) subscription: Option<S::Subscription>,
}

impl<S: Surface> Inner<S> {
    fn register_layer(
        &mut self,
        selector: &str,
        speed: f64,
        kind: LayerKind,
        algorithm: AlgorithmId,
    ) {
        let Self {
            surface,
            layers,
            viewport_height,
            sink,
            ..
        } = self;

        let built = layer::build(surface, selector, speed, kind, *viewport_height);

        let mut tracer = match sink.as_deref_mut() {
            Some(s) => Tracer::new(s),
            None => Tracer::none(),
        };
        tracer.layer_registered(&LayerRegisteredEvent {
            layer_index: layers.len(),
            kind,
            speed,
            matched: built.matched,
            segments: built.segments.len(),
        });

        layers.push(Layer::new(
            selector.to_string(),
            speed,
            algorithm,
            built.segments,
        ));
    }

    pub(crate) fn handle_scroll(&mut self) {
        let Self {
            surface,
            layers,
            pass_index,
            sink,
            ..
        } = self;

        let mut tracer = match sink.as_deref_mut() {
            Some(s) => Tracer::new(s),
            None => Tracer::none(),
        };
        dispatcher::run_pass(surface, layers, &mut tracer, *pass_index);
        *pass_index += 1;
    }
}

/// A parallax engine over one page surface.
///
/// Layers are registered through the chainable [`add_layer`](Self::add_layer)
/// family; thereafter the engine recomputes and writes every segment's
/// position on each scroll notification. Layers can only be added, never
/// removed or mutated.
///
/// ```rust,ignore
/// let engine = Engine::new(surface);
/// engine
///     .add_layer(".clouds", 0.3)
///     .add_layer(".hills", 0.6)
///     .add_layer_with(".sky", -0.2, LayerKind::Background, AlgorithmId::STANDARD);
/// ```
pub struct Engine<S: Surface> {
    inner: Rc<RefCell<Inner<S>>>,
}

impl<S: Surface> fmt::Debug for Engine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Engine")
            .field("layers", &inner.layers.len())
            .field("subscribed", &inner.subscription.is_some())
            .finish_non_exhaustive()
    }
}

impl<S: Surface + 'static> Engine<S> {
    /// Creates an engine over `surface`, measuring the viewport height and
    /// subscribing to scroll notifications.
    ///
    /// The viewport height is captured here and reused for every later
    /// registration (the engine does not respond to resizes).
    #[must_use]
    pub fn new(surface: S) -> Self {
        let viewport_height = surface.viewport_height();
        let inner = Rc::new(RefCell::new(Inner {
            surface,
            layers: LayerRegistry::new(),
            viewport_height,
            pass_index: 0,
            sink: None,
            subscription: None,
        }));
        let subscription = dispatcher::attach(&inner);
        inner.borrow_mut().subscription = Some(subscription);
        Self { inner }
    }

    /// Registers an element-kind layer with the standard algorithm.
    pub fn add_layer(&self, selector: &str, speed: f64) -> &Self {
        self.add_layer_with(selector, speed, LayerKind::default(), AlgorithmId::STANDARD)
    }

    /// Registers a layer with an explicit kind and algorithm.
    ///
    /// Zero selector matches produce an empty-segment layer, not an error.
    pub fn add_layer_with(
        &self,
        selector: &str,
        speed: f64,
        kind: LayerKind,
        algorithm: AlgorithmId,
    ) -> &Self {
        self.inner
            .borrow_mut()
            .register_layer(selector, speed, kind, algorithm);
        self
    }

    /// Installs a trace sink receiving registration and pass events.
    ///
    /// Events are dispatched only when the `trace` feature is enabled; see
    /// [`trace`](crate::trace).
    pub fn set_trace_sink(&self, sink: Box<dyn TraceSink>) -> &Self {
        self.inner.borrow_mut().sink = Some(sink);
        self
    }

    /// Runs `f` against the registered layers.
    pub fn with_layers<R>(&self, f: impl FnOnce(&LayerRegistry) -> R) -> R {
        f(&self.inner.borrow().layers)
    }

    /// Returns the viewport height captured at construction.
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.inner.borrow().viewport_height
    }
}
