// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene aggregation: ordered accumulation of generated parts, user-data
//! overrides, timestamp stamping, and the final record projection.

use basegen_core::{Part, PartRecord};
use rand::Rng;

/// Spacing between consecutive timestamps under
/// [`TimestampPolicy::Sequential`] when callers have no better value.
pub const DEFAULT_TIMESTAMP_STEP: u64 = 30;

/// How generation timestamps are assigned at sealing time.
///
/// The engine never reads a clock; the base value always comes from the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampPolicy {
    /// Every part gets the same timestamp.
    Shared(u64),
    /// Parts are stamped `start`, `start + step`, ... in append order, so
    /// downstream consumers that sort by timestamp see generation order.
    Sequential { start: u64, step: u64 },
}

/// A user-data override applied across accumulated parts.
///
/// Without a tag filter the override applies to every part; with one it
/// applies to all parts carrying that tag. Overrides apply in list order, so
/// a later conflicting override wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDataOverride {
    pub type_tag: Option<String>,
    pub value: u32,
}

impl UserDataOverride {
    pub fn for_all(value: u32) -> Self {
        Self {
            type_tag: None,
            value,
        }
    }

    pub fn for_tag(tag: impl Into<String>, value: u32) -> Self {
        Self {
            type_tag: Some(tag.into()),
            value,
        }
    }
}

/// Accumulates generated parts across layout calls and hands them to the
/// enclosing scene document.
///
/// Parts are kept strictly in append order across every generation call;
/// nothing is removed or reordered, because downstream consumers render
/// later entries on top of earlier ones.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    parts: Vec<Part>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    pub fn add_part(&mut self, part: Part) -> &mut Self {
        self.parts.push(part);
        self
    }

    pub fn add_parts(&mut self, parts: impl IntoIterator<Item = Part>) -> &mut Self {
        self.parts.extend(parts);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Accumulated parts in append order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Most recently added part with the tag.
    pub fn find_last(&self, type_tag: &str) -> Option<&Part> {
        self.parts.iter().rev().find(|p| p.type_tag() == type_tag)
    }

    /// Apply user-data overrides across the accumulated parts.
    pub fn apply_user_data(&mut self, overrides: &[UserDataOverride]) -> &mut Self {
        for o in overrides {
            for part in self.parts.iter_mut() {
                let matches = o
                    .type_tag
                    .as_deref()
                    .map_or(true, |tag| part.type_tag() == tag);
                if matches {
                    part.set_user_data(o.value);
                }
            }
        }
        self
    }

    /// Stamp every part's generation timestamp according to `policy`.
    pub fn stamp_timestamps(&mut self, policy: TimestampPolicy) -> &mut Self {
        match policy {
            TimestampPolicy::Shared(timestamp) => {
                for part in self.parts.iter_mut() {
                    part.set_timestamp(timestamp);
                }
            }
            TimestampPolicy::Sequential { start, step } => {
                for (i, part) in self.parts.iter_mut().enumerate() {
                    part.set_timestamp(start + step * i as u64);
                }
            }
        }
        self
    }

    /// Project every part to its external record in append order, applying
    /// each part's jitter exactly once.
    pub fn into_records<R: Rng>(self, rng: &mut R) -> Vec<PartRecord> {
        tracing::info!(parts = self.parts.len(), "sealing scene");
        self.parts.iter().map(|p| PartRecord::of(p, rng)).collect()
    }
}
