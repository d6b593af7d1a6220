//! Line-segment construction and sampling.
//!
//! The Hough transform reports lines in polar `(ρ, θ)` form. This module
//! turns them into long finite segments suitable for intersection math and
//! draws a size-limited random subset so the pairwise intersection stage
//! stays quadratic in a bounded count rather than in the full detection
//! output.

mod extractor;
mod sampling;
mod types;

pub use extractor::{extend_polar_line, extend_polar_lines, DEFAULT_LINE_EXTENT};
pub use sampling::sample_segments;
pub use types::{LineSegment, PolarLine};
