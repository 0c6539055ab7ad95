// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Type-tag registry: bounding dimensions and connector offsets per part type.
//!
//! The registry is an explicit object constructed once by the host and passed
//! into every component that needs it. It is read-only during generation, so
//! one registry can back any number of concurrent layout runs.

use crate::error::{Error, Result};
use nalgebra::Vector3;
use rustc_hash::FxHashMap;

/// Reserved tag for the fallback entry used when a type tag has no spec of
/// its own.
pub const DEFAULT_TAG: &str = "*";

/// Named attachment points a part can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConnectorKind {
    Power,
    Pipe,
    Teleport,
    Door,
}

/// Local-space displacement from a part's frame to each attachment point,
/// expressed in the part's derived axes at scale 1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectorOffsets {
    pub power: [f64; 3],
    pub pipe: [f64; 3],
    pub teleport: [f64; 3],
    pub door: [f64; 3],
}

impl ConnectorOffsets {
    #[inline]
    pub fn get(&self, kind: ConnectorKind) -> [f64; 3] {
        match kind {
            ConnectorKind::Power => self.power,
            ConnectorKind::Pipe => self.pipe,
            ConnectorKind::Teleport => self.teleport,
            ConnectorKind::Door => self.door,
        }
    }
}

impl Default for ConnectorOffsets {
    fn default() -> Self {
        Self {
            power: [0.0, 0.32, -1.15],
            pipe: [0.0, 0.3, -1.0],
            teleport: [0.0, 0.0, 0.0],
            door: [0.0, 0.0, 0.0],
        }
    }
}

/// Bounding dimensions and connector offsets for one part type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartSpec {
    /// Base bounding box (width, height, depth) at scale 1.
    pub dimensions: Vector3<f64>,
    pub connectors: ConnectorOffsets,
}

impl PartSpec {
    pub fn new(dimensions: Vector3<f64>, connectors: ConnectorOffsets) -> Self {
        Self {
            dimensions,
            connectors,
        }
    }

    /// Spec with the given dimensions and the default connector offsets.
    pub fn sized(width: f64, height: f64, depth: f64) -> Self {
        Self {
            dimensions: Vector3::new(width, height, depth),
            connectors: ConnectorOffsets::default(),
        }
    }
}

impl Default for PartSpec {
    fn default() -> Self {
        Self::sized(1.0, 1.0, 1.0)
    }
}

/// Read-only lookup from type tag to [`PartSpec`] with a reserved fallback
/// entry.
#[derive(Debug, Clone)]
pub struct PartRegistry {
    specs: FxHashMap<String, PartSpec>,
}

impl PartRegistry {
    /// Registry holding only the built-in fallback entry.
    pub fn new() -> Self {
        let mut specs = FxHashMap::default();
        specs.insert(DEFAULT_TAG.to_string(), PartSpec::default());
        Self { specs }
    }

    /// Registry with no entries at all, including no fallback.
    ///
    /// Every lookup fails with [`Error::UnknownTypeTag`] until a default
    /// entry is inserted; intended for hosts that load a complete catalogue
    /// and want missing entries surfaced as configuration errors.
    pub fn empty() -> Self {
        Self {
            specs: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, tag: impl Into<String>, spec: PartSpec) -> &mut Self {
        self.specs.insert(tag.into(), spec);
        self
    }

    /// Spec for `tag`, falling back to the default entry.
    pub fn spec(&self, tag: &str) -> Result<&PartSpec> {
        self.specs
            .get(tag)
            .or_else(|| self.specs.get(DEFAULT_TAG))
            .ok_or_else(|| Error::UnknownTypeTag(tag.to_string()))
    }

    /// Whether `tag` has a spec of its own (not counting the fallback).
    pub fn contains(&self, tag: &str) -> bool {
        self.specs.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Default for PartRegistry {
    fn default() -> Self {
        Self::new()
    }
}
