// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire segmentation: spanning a route with fixed-maximum-length connector
//! parts.
//!
//! A wire segment is an ordinary [`Part`] whose position is the segment's
//! start point and whose forward vector carries the segment's direction and
//! length (deliberately non-unit). Segments are emitted in order and never
//! mutated afterward.

use crate::error::{Error, Result};
use basegen_core::{math, Frame, Part, Point3, Vector3};

/// Default maximum length of one wire segment — the in-world connector range
/// limit.
pub const DEFAULT_MAX_SEGMENT_LEN: f64 = 180.0;

/// Segment the straight run from `start` to `end` into wire parts tagged
/// `type_tag`, none longer than `max_len` (the system default when `None`).
///
/// Emits `ceil(distance / max_len)` segments chained head to tail along the
/// unit direction; every segment extends `max_len` except the last, which
/// ends exactly at `end` rather than at a multiple of the maximum. A
/// zero-distance request yields no segments.
pub fn wire_between(
    start: &Point3<f64>,
    end: &Point3<f64>,
    type_tag: &str,
    max_len: Option<f64>,
) -> Result<Vec<Part>> {
    let max_len = max_len.unwrap_or(DEFAULT_MAX_SEGMENT_LEN);
    if max_len <= 0.0 {
        return Err(Error::InvalidReplicationCount(format!(
            "maximum segment length {} admits no finite segment count",
            max_len
        )));
    }

    let span = *end - *start;
    let total = span.norm();
    if total <= math::EPSILON {
        return Ok(Vec::new());
    }

    let direction = span / total;
    let count = (total / max_len).ceil() as usize;

    let mut segments = Vec::with_capacity(count);
    let mut cursor = *start;

    for i in 0..count {
        let segment_end = if i + 1 == count {
            *end
        } else {
            cursor + direction * max_len
        };

        segments.push(Part::new(
            type_tag,
            Frame::new(cursor, Vector3::y(), segment_end - cursor),
        ));
        cursor = segment_end;
    }

    tracing::debug!(count = segments.len(), total, type_tag, "segmented wire run");
    Ok(segments)
}

/// Wire each consecutive pair in an ordered waypoint chain.
///
/// Plain concatenation of the pairwise result; no smoothing or validation of
/// direction changes between legs. Fewer than two waypoints yields no
/// segments.
pub fn multi_wire(
    waypoints: &[Point3<f64>],
    type_tag: &str,
    max_len: Option<f64>,
) -> Result<Vec<Part>> {
    let mut segments = Vec::new();
    for pair in waypoints.windows(2) {
        segments.extend(wire_between(&pair[0], &pair[1], type_tag, max_len)?);
    }
    Ok(segments)
}
