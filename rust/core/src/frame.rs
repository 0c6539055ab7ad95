// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Oriented placement frames and derived local axes.

use crate::error::Result;
use crate::math;
use nalgebra::{Point3, Vector3};

/// Position plus up/forward orientation for a placed object.
///
/// A frame is a plain value: operations derive a new frame rather than
/// mutating in place. `up` and `forward` are not forced orthogonal at
/// construction; holders that rely on a right-handed local frame must
/// supply vectors for which that holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub position: Point3<f64>,
    pub up: Vector3<f64>,
    pub forward: Vector3<f64>,
}

impl Frame {
    pub fn new(position: Point3<f64>, up: Vector3<f64>, forward: Vector3<f64>) -> Self {
        Self {
            position,
            up,
            forward,
        }
    }

    /// Frame at a position with the default +Y up and +Z forward.
    pub fn at(position: Point3<f64>) -> Self {
        Self::new(position, Vector3::y(), Vector3::z())
    }

    /// Position moved by `distance` along the normalized `axis` (world space).
    pub fn translated_along(&self, axis: &Vector3<f64>, distance: f64) -> Result<Frame> {
        let direction = math::unit(axis)?;
        Ok(Frame {
            position: self.position + direction.into_inner() * distance,
            ..*self
        })
    }

    /// `up` and `forward` rotated by the same axis-angle rotation.
    pub fn rotated(&self, axis: &Vector3<f64>, degrees: f64) -> Result<Frame> {
        Ok(Frame {
            up: math::rotate_about(&self.up, axis, degrees)?,
            forward: math::rotate_about(&self.forward, axis, degrees)?,
            ..*self
        })
    }

    /// `up` and `forward` magnitudes multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Frame {
        Frame {
            up: self.up * factor,
            forward: self.forward * factor,
            ..*self
        }
    }

    /// `up` and `forward` reduced to unit length.
    pub fn normalized(&self) -> Result<Frame> {
        Ok(Frame {
            up: math::unit(&self.up)?.into_inner(),
            forward: math::unit(&self.forward)?.into_inner(),
            ..*self
        })
    }

    /// Right-handed local axes for this frame.
    ///
    /// `y` is the normalized up vector, `z` the normalized forward vector,
    /// and `x` is `z` rotated +90 degrees about `y`.
    pub fn local_axes(&self) -> Result<LocalAxes> {
        let y = math::unit(&self.up)?.into_inner();
        let z = math::unit(&self.forward)?.into_inner();
        let x = math::rotate_about(&z, &y, 90.0)?;
        Ok(LocalAxes { x, y, z })
    }
}

/// Right-handed axis triple derived from a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalAxes {
    pub x: Vector3<f64>,
    pub y: Vector3<f64>,
    pub z: Vector3<f64>,
}
