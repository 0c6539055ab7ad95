//! Basegen layout engine
//!
//! Spatial replication primitives, orientation derivation from world-space
//! anchors, wire segmentation, and scene aggregation over the
//! `basegen-core` part model. Layout recipes (what to build where) are the
//! caller's business; this crate supplies the placement machinery they
//! compose.

pub mod error;
pub mod orient;
pub mod replicate;
pub mod scene;
pub mod wire;

// Re-export the core model types callers need at every call site
pub use basegen_core::{
    ConnectorKind, Frame, LocalAxes, Part, PartRecord, PartRegistry, PartSpec,
};

pub use error::{Error, Result};
pub use orient::{orient_between_parts, orient_to_anchors, SiteFrame};
pub use replicate::{CircleLayout, Replicate, UserDataPolicy};
pub use scene::{SceneBuilder, TimestampPolicy, UserDataOverride, DEFAULT_TIMESTAMP_STEP};
pub use wire::{multi_wire, wire_between, DEFAULT_MAX_SEGMENT_LEN};
