#![doc = include_str!("../README.md")]

pub mod config;
pub mod detector;
pub mod hough;
pub mod intersect;
pub mod io;
pub mod overlay;
pub mod params;
pub mod segments;
pub mod types;
pub mod voting;

// Main entry points: detector + params + result.
pub use crate::detector::VpDetector;
pub use crate::params::{EdgeParams, HoughParams, VpParams};
pub use crate::types::{Point2d, VpResult};

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::{VpDetector, VpParams, VpResult};
}
