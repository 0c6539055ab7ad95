// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The placeable part entity and its external record projection.

use crate::error::Result;
use crate::frame::{Frame, LocalAxes};
use crate::math;
use crate::registry::{ConnectorKind, PartRegistry};
use nalgebra::{Point3, Vector3};
use rand::Rng;

/// One placeable, oriented, scaled object instance in a generated layout.
///
/// A part owns a single internal [`Frame`]; the flat external form is
/// computed on demand by [`PartRecord::of`], never stored alongside it.
/// Mutating operations take `&mut self` and return `&mut Self` (or
/// `Result<&mut Self>` where they can fail) so placement code can chain
/// them. Clones never share frame state with their source.
///
/// The jitter coefficient is carried as data only: geometric operations keep
/// the frame exact, and the perturbation is applied once, at record
/// projection time.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    type_tag: String,
    frame: Frame,
    scale: f64,
    user_data: u32,
    jitter_coefficient: f64,
    timestamp: u64,
}

impl Part {
    /// New part at `frame` with scale 1, zero user data, and no jitter.
    pub fn new(type_tag: impl Into<String>, frame: Frame) -> Self {
        Self {
            type_tag: type_tag.into(),
            frame,
            scale: 1.0,
            user_data: 0,
            jitter_coefficient: 0.0,
            timestamp: 0,
        }
    }

    pub fn with_user_data(mut self, user_data: u32) -> Self {
        self.user_data = user_data;
        self
    }

    pub fn with_jitter(mut self, coefficient: f64) -> Self {
        self.jitter_coefficient = coefficient;
        self
    }

    #[inline]
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    #[inline]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    #[inline]
    pub fn position(&self) -> Point3<f64> {
        self.frame.position
    }

    #[inline]
    pub fn up(&self) -> Vector3<f64> {
        self.frame.up
    }

    #[inline]
    pub fn forward(&self) -> Vector3<f64> {
        self.frame.forward
    }

    /// Uniform scale factor applied to size and connector lookups.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn user_data(&self) -> u32 {
        self.user_data
    }

    #[inline]
    pub fn jitter_coefficient(&self) -> f64 {
        self.jitter_coefficient
    }

    /// Generation timestamp; zero until the scene aggregator stamps it.
    #[inline]
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Move the part by `distance` along the normalized `axis` (world space).
    ///
    /// The axis is whatever the caller supplies; pass the part's own up or
    /// forward vector to move in a local direction.
    pub fn translate_along(&mut self, axis: &Vector3<f64>, distance: f64) -> Result<&mut Self> {
        self.frame = self.frame.translated_along(axis, distance)?;
        Ok(self)
    }

    /// Rotate `up` and `forward` together, preserving their relative angle.
    pub fn rotate(&mut self, axis: &Vector3<f64>, degrees: f64) -> Result<&mut Self> {
        self.frame = self.frame.rotated(axis, degrees)?;
        Ok(self)
    }

    /// Rotate only the up vector.
    pub fn rotate_up(&mut self, axis: &Vector3<f64>, degrees: f64) -> Result<&mut Self> {
        self.frame = Frame {
            up: math::rotate_about(&self.frame.up, axis, degrees)?,
            ..self.frame
        };
        Ok(self)
    }

    /// Rotate only the forward vector.
    pub fn rotate_forward(&mut self, axis: &Vector3<f64>, degrees: f64) -> Result<&mut Self> {
        self.frame = Frame {
            forward: math::rotate_about(&self.frame.forward, axis, degrees)?,
            ..self.frame
        };
        Ok(self)
    }

    /// Multiply the magnitude of `up` and `forward`, compounding the tracked
    /// scale factor.
    pub fn scale_by(&mut self, factor: f64) -> &mut Self {
        self.frame = self.frame.scaled(factor);
        self.scale *= factor;
        self
    }

    /// Normalize, then scale to exactly `factor`.
    pub fn scale_to(&mut self, factor: f64) -> Result<&mut Self> {
        self.normalize()?;
        Ok(self.scale_by(factor))
    }

    /// Reduce `up` and `forward` to unit length and reset the scale factor
    /// to 1.
    pub fn normalize(&mut self) -> Result<&mut Self> {
        self.frame = self.frame.normalized()?;
        self.scale = 1.0;
        Ok(self)
    }

    pub fn invert_up(&mut self) -> &mut Self {
        self.frame = Frame {
            up: -self.frame.up,
            ..self.frame
        };
        self
    }

    pub fn invert_forward(&mut self) -> &mut Self {
        self.frame = Frame {
            forward: -self.frame.forward,
            ..self.frame
        };
        self
    }

    pub fn set_position(&mut self, position: Point3<f64>) -> &mut Self {
        self.frame = Frame {
            position,
            ..self.frame
        };
        self
    }

    /// Replace the whole frame, keeping tag, scale, user data, and jitter.
    pub fn set_frame(&mut self, frame: Frame) -> &mut Self {
        self.frame = frame;
        self
    }

    pub fn set_user_data(&mut self, user_data: u32) -> &mut Self {
        self.user_data = user_data;
        self
    }

    pub fn set_jitter(&mut self, coefficient: f64) -> &mut Self {
        self.jitter_coefficient = coefficient;
        self
    }

    /// Assigned by the scene aggregator at sealing time.
    pub fn set_timestamp(&mut self, timestamp: u64) -> &mut Self {
        self.timestamp = timestamp;
        self
    }

    /// Independent copy carrying a different type tag.
    pub fn clone_as(&self, type_tag: impl Into<String>) -> Part {
        let mut copy = self.clone();
        copy.type_tag = type_tag.into();
        copy
    }

    /// `count` independent copies; zero yields an empty collection.
    pub fn clone_many(&self, count: usize) -> Vec<Part> {
        (0..count).map(|_| self.clone()).collect()
    }

    /// Right-handed local axes derived from the current frame.
    ///
    /// Fails with a degenerate-frame error when `up` or `forward` has zero
    /// length; no fallback axes are ever substituted.
    pub fn derived_axes(&self) -> Result<LocalAxes> {
        self.frame.local_axes()
    }

    /// World position of the named attachment point.
    ///
    /// Looks up the offset for this part's tag (falling back to the registry
    /// default), scales it by the part's scale factor, and walks it along the
    /// derived local axes from the part's position.
    pub fn connector_position(
        &self,
        kind: ConnectorKind,
        registry: &PartRegistry,
    ) -> Result<Point3<f64>> {
        let offset = registry.spec(&self.type_tag)?.connectors.get(kind);
        let axes = self.derived_axes()?;

        Ok(self.frame.position
            + axes.x * (offset[0] * self.scale)
            + axes.y * (offset[1] * self.scale)
            + axes.z * (offset[2] * self.scale))
    }

    /// Bounding dimensions at the current scale.
    pub fn size(&self, registry: &PartRegistry) -> Result<Vector3<f64>> {
        Ok(registry.spec(&self.type_tag)?.dimensions * self.scale)
    }

    #[inline]
    pub fn width(&self, registry: &PartRegistry) -> Result<f64> {
        Ok(self.size(registry)?.x)
    }

    #[inline]
    pub fn height(&self, registry: &PartRegistry) -> Result<f64> {
        Ok(self.size(registry)?.y)
    }

    #[inline]
    pub fn depth(&self, registry: &PartRegistry) -> Result<f64> {
        Ok(self.size(registry)?.z)
    }
}

/// Externally visible form of a part.
///
/// This tuple is the sole contract with the persistence layer; producing it
/// is a pure projection of the internal frame plus the part's single jitter
/// pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartRecord {
    pub type_tag: String,
    pub user_data: u32,
    pub position: [f64; 3],
    pub up: [f64; 3],
    pub forward: [f64; 3],
    pub timestamp: u64,
}

impl PartRecord {
    /// Project `part` to its external record, applying its jitter exactly
    /// once. The part itself is never perturbed.
    pub fn of<R: Rng>(part: &Part, rng: &mut R) -> PartRecord {
        let coefficient = part.jitter_coefficient;
        PartRecord {
            type_tag: part.type_tag.clone(),
            user_data: part.user_data,
            position: jittered_triple(&part.frame.position.coords, coefficient, rng),
            up: jittered_triple(&part.frame.up, coefficient, rng),
            forward: jittered_triple(&part.frame.forward, coefficient, rng),
            timestamp: part.timestamp,
        }
    }
}

fn jittered_triple<R: Rng>(v: &Vector3<f64>, coefficient: f64, rng: &mut R) -> [f64; 3] {
    [
        math::jittered(v.x, coefficient, rng),
        math::jittered(v.y, coefficient, rng),
        math::jittered(v.z, coefficient, rng),
    ]
}
