// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Replication primitives: linear, radial, and grid fan-out of a part.
//!
//! Every primitive clones the source part and leaves it untouched; the
//! returned parts are fully independent copies in generation order.

use crate::error::Result;
use basegen_core::{math, LocalAxes, Part, Vector3};

/// Per-clone user-data assignment.
///
/// The engine keeps no counters of its own; index encodings (sequential ids,
/// bitmask tags) are caller policy invoked per clone.
#[derive(Clone, Copy, Default)]
pub enum UserDataPolicy<'a> {
    /// Copy the source part's user data unchanged.
    #[default]
    Inherit,
    /// Assign `start + index` to the clone at `index`.
    Sequential(u32),
    /// Compute the value from the clone index and the freshly placed clone.
    Custom(&'a dyn Fn(usize, &Part) -> u32),
}

impl UserDataPolicy<'_> {
    fn apply(&self, index: usize, clone: &mut Part) {
        match self {
            UserDataPolicy::Inherit => {}
            UserDataPolicy::Sequential(start) => {
                clone.set_user_data(*start + index as u32);
            }
            UserDataPolicy::Custom(compute) => {
                let value = compute(index, clone);
                clone.set_user_data(value);
            }
        }
    }
}

/// Parameters for placing clones around a circle or arc.
#[derive(Debug, Clone)]
pub struct CircleLayout {
    /// Number of clones to place.
    pub count: usize,
    /// Distance of every clone from the source part's position.
    pub radius: f64,
    /// Axis the placement angle sweeps around.
    pub axis: Vector3<f64>,
    /// Rotation applied to the initial direction before clone 0 is placed.
    pub start_offset_degrees: f64,
    /// Rotate each clone's own frame to follow its placement angle; when
    /// false, clones keep the source orientation and only move.
    pub rotate_clones: bool,
    /// Direction toward clone 0; the part's own forward vector when `None`.
    pub move_axis: Option<Vector3<f64>>,
    /// Arc swept by the clones. At 360 the ring closes, with the last clone
    /// stopping one step short of clone 0; smaller values span an open arc.
    pub total_arc_degrees: f64,
}

impl CircleLayout {
    /// Closed ring of `count` clones at `radius` around `axis`.
    pub fn ring(count: usize, radius: f64, axis: Vector3<f64>) -> Self {
        Self {
            count,
            radius,
            axis,
            start_offset_degrees: 0.0,
            rotate_clones: false,
            move_axis: None,
            total_arc_degrees: 360.0,
        }
    }
}

/// Spatial fan-out operations over a part.
pub trait Replicate {
    /// `count` clones, the i-th translated `i * step` along the normalized
    /// `axis`. Clone 0 is coincident with the source.
    fn clone_on_axis(
        &self,
        axis: &Vector3<f64>,
        count: usize,
        step: f64,
        user_data: UserDataPolicy<'_>,
    ) -> Result<Vec<Part>>;

    /// Clones spaced `layout.total_arc_degrees / layout.count` apart around
    /// a circle centered on the source part's position.
    fn clone_on_circle(
        &self,
        layout: &CircleLayout,
        user_data: UserDataPolicy<'_>,
    ) -> Result<Vec<Part>>;

    /// `count_x` by `count_z` lattice in the `axes.x`/`axes.z` plane, with
    /// the source position at the lattice centroid.
    fn clone_on_grid(
        &self,
        axes: &LocalAxes,
        count_x: usize,
        count_z: usize,
        cell_spacing: f64,
        user_data: UserDataPolicy<'_>,
    ) -> Result<Vec<Part>>;
}

impl Replicate for Part {
    fn clone_on_axis(
        &self,
        axis: &Vector3<f64>,
        count: usize,
        step: f64,
        user_data: UserDataPolicy<'_>,
    ) -> Result<Vec<Part>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut clones = Vec::with_capacity(count);
        for i in 0..count {
            let mut clone = self.clone();
            clone.translate_along(axis, step * i as f64)?;
            user_data.apply(i, &mut clone);
            clones.push(clone);
        }

        Ok(clones)
    }

    fn clone_on_circle(
        &self,
        layout: &CircleLayout,
        user_data: UserDataPolicy<'_>,
    ) -> Result<Vec<Part>> {
        if layout.count == 0 {
            return Ok(Vec::new());
        }

        let initial = layout.move_axis.unwrap_or_else(|| self.forward());
        let mut direction = math::unit(&initial)?.into_inner();
        direction = math::rotate_about(&direction, &layout.axis, layout.start_offset_degrees)?;

        if layout.count == 1 {
            // Step angle is undefined for a single clone; place it along the
            // initial direction and leave its frame untouched.
            let mut clone = self.clone();
            clone.translate_along(&direction, layout.radius)?;
            user_data.apply(0, &mut clone);
            return Ok(vec![clone]);
        }

        let step_degrees = layout.total_arc_degrees / layout.count as f64;
        let mut clones = Vec::with_capacity(layout.count);

        for i in 0..layout.count {
            let mut clone = self.clone();

            if layout.rotate_clones {
                clone.rotate(
                    &layout.axis,
                    layout.start_offset_degrees + step_degrees * i as f64,
                )?;
            }
            clone.translate_along(&direction, layout.radius)?;
            user_data.apply(i, &mut clone);
            clones.push(clone);

            direction = math::rotate_about(&direction, &layout.axis, step_degrees)?;
        }

        tracing::debug!(
            count = clones.len(),
            radius = layout.radius,
            arc = layout.total_arc_degrees,
            "placed circular clones"
        );
        Ok(clones)
    }

    fn clone_on_grid(
        &self,
        axes: &LocalAxes,
        count_x: usize,
        count_z: usize,
        cell_spacing: f64,
        user_data: UserDataPolicy<'_>,
    ) -> Result<Vec<Part>> {
        if count_x == 0 || count_z == 0 {
            return Ok(Vec::new());
        }

        // Pre-shift by half the lattice extent along both in-plane axes so
        // the source position is the centroid, not a corner.
        let mut corner = self.clone();
        corner.translate_along(&axes.x, -((count_x as f64 - 1.0) * cell_spacing) / 2.0)?;
        corner.translate_along(&axes.z, -((count_z as f64 - 1.0) * cell_spacing) / 2.0)?;

        let row_heads = corner.clone_on_axis(&axes.x, count_x, cell_spacing, UserDataPolicy::Inherit)?;

        let mut clones = Vec::with_capacity(count_x * count_z);
        for head in &row_heads {
            clones.extend(head.clone_on_axis(
                &axes.z,
                count_z,
                cell_spacing,
                UserDataPolicy::Inherit,
            )?);
        }

        for (i, clone) in clones.iter_mut().enumerate() {
            user_data.apply(i, clone);
        }

        Ok(clones)
    }
}
