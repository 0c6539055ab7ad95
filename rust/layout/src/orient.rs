// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Orientation derivation from world-space anchors.
//!
//! Layouts are authored in a local frame and then re-oriented to arbitrary
//! in-world placement by aligning to two anchor points (typically a resource
//! hotspot and a power hotspot).

use crate::error::{Error, Result};
use basegen_core::{math, Frame, LocalAxes, Part, Point3, Vector3};

/// Length of the synthetic triangle leg used to complete the alignment
/// triangle. Only its direction matters; any nonzero magnitude derives the
/// same frame.
const SYNTHETIC_LEG: f64 = 500.0;

/// A derived working frame: right-handed orthonormal axes anchored at a
/// world position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteFrame {
    pub origin: Point3<f64>,
    pub axes: LocalAxes,
}

impl SiteFrame {
    /// Part frame seeded from this orientation: up along `y`, forward along
    /// `z`.
    pub fn part_frame(&self) -> Frame {
        Frame::new(self.origin, self.axes.y, self.axes.z)
    }
}

/// Derive a right-handed orthonormal frame aligned to two world anchors.
///
/// `y` is the normalized `up` vector. A synthetic third point is raised from
/// `anchor` along `y`; the normal of the triangle it forms with the two
/// anchors becomes `x`, and `z` is `x` rotated +90 degrees about `y`. The
/// result depends only on the direction from `anchor` to `target`, never
/// their distance, and is positioned at `anchor`.
///
/// Fails with [`Error::DegenerateOrientation`] when the anchors are
/// collinear with the up vector, and with a degenerate-frame error when `up`
/// has zero length.
pub fn orient_to_anchors(
    up: &Vector3<f64>,
    anchor: &Point3<f64>,
    target: &Point3<f64>,
) -> Result<SiteFrame> {
    let y = math::unit(up)?.into_inner();

    let synthetic = *anchor + y * SYNTHETIC_LEG;
    let x = math::triangle_normal(anchor, target, &synthetic).map_err(|_| {
        Error::DegenerateOrientation(format!(
            "anchors {:?} and {:?} are collinear with the up vector",
            anchor, target
        ))
    })?;
    let z = math::rotate_about(&x, &y, 90.0)?;

    tracing::debug!(?anchor, ?target, "derived site orientation");

    Ok(SiteFrame {
        origin: *anchor,
        axes: LocalAxes { x, y, z },
    })
}

/// Canonical part-pair orientation: align to `a`'s recorded up vector and
/// the line from `a` to `b`.
///
/// This is a thin adapter over [`orient_to_anchors`]; callers that want to
/// orient to a raw hotspot vector instead of a part's up supply it there
/// directly.
pub fn orient_between_parts(a: &Part, b: &Part) -> Result<SiteFrame> {
    orient_to_anchors(&a.up(), &a.position(), &b.position())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_orient_to_anchors_known_frame() {
        let site = orient_to_anchors(
            &Vector3::y(),
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(10.0, 0.0, 0.0),
        )
        .unwrap();

        assert_relative_eq!(site.axes.y, Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(site.axes.x, Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(site.axes.z, Vector3::x(), epsilon = 1e-12);
        assert_eq!(site.origin, Point3::origin());
    }

    #[test]
    fn test_orient_is_orthonormal_for_skew_anchors() {
        let site = orient_to_anchors(
            &Vector3::new(0.2, 1.0, -0.1),
            &Point3::new(3.0, 5.0, -2.0),
            &Point3::new(-40.0, 12.0, 9.0),
        )
        .unwrap();

        let LocalAxes { x, y, z } = site.axes;
        assert_relative_eq!(x.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(y.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(z.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(x.dot(&y), 0.0, epsilon = 1e-12);
        assert_relative_eq!(x.dot(&z), 0.0, epsilon = 1e-12);
        assert_relative_eq!(x.cross(&y), z, epsilon = 1e-12);
    }

    #[test]
    fn test_orient_invariant_to_up_magnitude_and_anchor_distance() {
        let anchor = Point3::new(1.0, 2.0, 3.0);
        let near = orient_to_anchors(&Vector3::y(), &anchor, &Point3::new(2.0, 2.0, 3.0)).unwrap();
        let far =
            orient_to_anchors(&(Vector3::y() * 250.0), &anchor, &Point3::new(901.0, 2.0, 3.0))
                .unwrap();

        assert_relative_eq!(near.axes.x, far.axes.x, epsilon = 1e-12);
        assert_relative_eq!(near.axes.y, far.axes.y, epsilon = 1e-12);
        assert_relative_eq!(near.axes.z, far.axes.z, epsilon = 1e-12);
    }

    #[test]
    fn test_orient_is_deterministic() {
        let derive = || {
            orient_to_anchors(
                &Vector3::new(0.0, 2.0, 0.0),
                &Point3::new(7.0, -1.0, 4.0),
                &Point3::new(-3.0, 0.0, 8.0),
            )
            .unwrap()
        };
        assert_eq!(derive(), derive());
    }

    #[test]
    fn test_orient_collinear_anchors_fail() {
        let err = orient_to_anchors(
            &Vector3::y(),
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(0.0, 25.0, 0.0),
        )
        .unwrap_err();
        assert!(matches!(err, Error::DegenerateOrientation(_)));

        // Coincident anchors are collinear too.
        assert!(orient_to_anchors(&Vector3::y(), &Point3::origin(), &Point3::origin()).is_err());
    }

    #[test]
    fn test_orient_zero_up_fails() {
        assert!(orient_to_anchors(
            &Vector3::zeros(),
            &Point3::origin(),
            &Point3::new(1.0, 0.0, 0.0)
        )
        .is_err());
    }

    #[test]
    fn test_orient_between_parts_matches_anchor_form() {
        let a = Part::new("extractor", Frame::at(Point3::new(0.0, 0.0, 0.0)));
        let b = Part::new("generator", Frame::at(Point3::new(10.0, 0.0, 0.0)));

        let from_parts = orient_between_parts(&a, &b).unwrap();
        let from_anchors =
            orient_to_anchors(&Vector3::y(), &a.position(), &b.position()).unwrap();
        assert_eq!(from_parts, from_anchors);
    }

    #[test]
    fn test_part_frame_seeds_parts_at_the_site() {
        let site = orient_to_anchors(
            &Vector3::y(),
            &Point3::new(5.0, 1.0, -2.0),
            &Point3::new(15.0, 1.0, -2.0),
        )
        .unwrap();

        let frame = site.part_frame();
        assert_eq!(frame.position, site.origin);
        assert_relative_eq!(frame.up, site.axes.y, epsilon = 1e-12);
        assert_relative_eq!(frame.forward, site.axes.z, epsilon = 1e-12);
    }
}
