// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vector helpers shared across the part model.
//!
//! Everything else comes straight from nalgebra; these wrappers exist to give
//! degenerate inputs a defined failure instead of NaN-filled results.

use crate::error::{Error, Result};
use nalgebra::{Point3, Rotation3, Unit, Vector3};
use rand::Rng;

/// Norm below which a vector is treated as zero-length.
pub const EPSILON: f64 = 1e-9;

/// Normalize a vector.
///
/// Fails with [`Error::DegenerateFrame`] on a (near-)zero-length input;
/// normalization is never a silent no-op.
pub fn unit(v: &Vector3<f64>) -> Result<Unit<Vector3<f64>>> {
    Unit::try_new(*v, EPSILON).ok_or_else(|| {
        Error::DegenerateFrame(format!("cannot normalize zero-length vector {:?}", v))
    })
}

/// Rotate `v` by `degrees` about `axis` (right-handed axis-angle).
///
/// The axis does not need to be unit-length; a zero-length axis fails.
pub fn rotate_about(v: &Vector3<f64>, axis: &Vector3<f64>, degrees: f64) -> Result<Vector3<f64>> {
    let axis = unit(axis)?;
    let rotation = Rotation3::from_axis_angle(&axis, degrees.to_radians());
    Ok(rotation * *v)
}

/// Unit normal of the triangle `(a, b, c)`, oriented as `(c - b) x (a - b)`.
///
/// Fails when the three points are collinear (the cross product vanishes).
pub fn triangle_normal(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Result<Vector3<f64>> {
    let n = (*c - *b).cross(&(*a - *b));
    Ok(unit(&n)?.into_inner())
}

/// One jitter pass over a scalar: uniform perturbation in `±coefficient / 2`.
///
/// A zero coefficient returns the value untouched without consuming
/// randomness, so unjittered parts are bit-exact.
#[inline]
pub fn jittered<R: Rng>(value: f64, coefficient: f64, rng: &mut R) -> f64 {
    if coefficient == 0.0 {
        return value;
    }
    value + (rng.gen::<f64>() - 0.5) * coefficient
}
