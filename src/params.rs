//! Parameter types configuring the detector stages.
//!
//! Every knob the pipeline consumes lives here with a documented default,
//! so callers and tests can override them instead of relying on inline
//! literals. Defaults reproduce the behaviour of the original tool.

use crate::intersect::PairingStrategy;
use crate::segments::DEFAULT_LINE_EXTENT;
use serde::Deserialize;

/// Detector-wide parameters controlling the pipeline.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct VpParams {
    /// Edge-map preparation ahead of the Hough transform.
    pub edges: EdgeParams,
    /// Hough line-detection thresholds.
    pub hough: HoughParams,
    /// Half-extent, in pixels, of segments reconstructed from polar lines.
    pub line_extent: f64,
    /// Maximum number of segments fed into pairwise intersection.
    pub sample_cap: usize,
    /// RNG seed for the segment sampler; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Voting cell size in pixels; `None` uses `min(width, height)`, which
    /// makes a single cell span the shorter image axis. Supply a smaller
    /// value for a finer grid.
    pub cell_size: Option<f64>,
    /// How segment pairs are formed for intersection.
    pub pairing: PairingStrategy,
}

impl Default for VpParams {
    fn default() -> Self {
        Self {
            edges: EdgeParams::default(),
            hough: HoughParams::default(),
            line_extent: DEFAULT_LINE_EXTENT,
            sample_cap: 1000,
            seed: None,
            cell_size: None,
            pairing: PairingStrategy::default(),
        }
    }
}

/// Grayscale pre-processing and Canny thresholds.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    /// Radius of the morphological open applied before edge detection;
    /// 0 disables the step.
    pub morph_radius: u8,
    /// Canny low hysteresis threshold.
    pub canny_low: f32,
    /// Canny high hysteresis threshold.
    pub canny_high: f32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            morph_radius: 1,
            canny_low: 2.0,
            canny_high: 5.0,
        }
    }
}

/// Hough-transform line detection thresholds.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Minimum accumulator votes for a detected line.
    pub vote_threshold: u32,
    /// Non-maximum suppression radius in Hough space.
    pub suppression_radius: u32,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            vote_threshold: 5,
            suppression_radius: 8,
        }
    }
}
