// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered, instance-local layer storage.

use alloc::string::String;
use alloc::vec::Vec;

use crate::offset::AlgorithmId;

use super::segment::Segment;

/// One scrolling group: selector, speed, algorithm, and ordered segments.
///
/// A layer is created whole by a single registration call and is immutable
/// afterwards. There is no update or removal operation.
#[derive(Clone, Debug)]
pub struct Layer {
    selector: String,
    speed: f64,
    algorithm: AlgorithmId,
    segments: Vec<Segment>,
}

impl Layer {
    /// Creates a layer from its registration-time parts.
    #[must_use]
    pub fn new(selector: String, speed: f64, algorithm: AlgorithmId, segments: Vec<Segment>) -> Self {
        Self {
            selector,
            speed,
            algorithm,
            segments,
        }
    }

    /// Returns the selector the layer was registered with.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Returns the signed speed multiplier. Sign flips the layer's response
    /// direction, magnitude scales the rate; `0.0` yields a static layer.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Returns the offset-algorithm id used for this layer's passes.
    #[must_use]
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// Returns the segments in selector-match order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// The ordered collection of registered layers.
///
/// Each engine instance owns exactly one registry, initialized fresh at
/// construction; registries are never shared across instances. Registration
/// order is preserved and defines layer-processing order during scroll
/// passes. Layers are independent and may overlap the same elements.
#[derive(Debug, Default)]
pub struct LayerRegistry {
    layers: Vec<Layer>,
}

impl LayerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer. Layers can only be added, never removed.
    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Returns the number of registered layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns whether no layers have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Returns the layer at `index` in registration order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Iterates layers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }
}
