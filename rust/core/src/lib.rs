//! Basegen core part model
//!
//! Local-coordinate-frame parts, the type-tag registry, and the vector math
//! they are built on. Layout generation (replication, orientation, wiring,
//! scene aggregation) lives in `basegen-layout`.

pub mod error;
pub mod frame;
pub mod math;
pub mod part;
pub mod registry;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use error::{Error, Result};
pub use frame::{Frame, LocalAxes};
pub use part::{Part, PartRecord};
pub use registry::{ConnectorKind, ConnectorOffsets, PartRegistry, PartSpec, DEFAULT_TAG};
