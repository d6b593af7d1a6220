//! Pipeline driving vanishing-point estimation end-to-end.
//!
//! The [`VpDetector`] exposes a simple API: feed a decoded image and get the
//! dominant vanishing point, if any. Internally it chains the Hough front
//! end, polar-line extension, random sampling, pairwise intersection, and
//! the grid vote. All intermediate data is local to one invocation, so
//! separate runs over different images may proceed concurrently.
//!
//! Typical usage:
//! ```no_run
//! use vp_detector::{VpDetector, VpParams};
//!
//! # fn example(image: image::DynamicImage) {
//! let detector = VpDetector::new(VpParams::default());
//! let result = detector.process(&image);
//! if result.found {
//!     println!("vanishing point: ({:.1}, {:.1})", result.point.x, result.point.y);
//! }
//! # }
//! ```

use crate::hough::detect_polar_lines;
use crate::intersect::find_intersections;
use crate::overlay::save_overlay;
use crate::params::VpParams;
use crate::segments::{extend_polar_lines, sample_segments};
use crate::types::VpResult;
use crate::voting::find_vanishing_point;
use image::DynamicImage;
use log::debug;
use std::path::Path;
use std::time::Instant;

/// Single-image vanishing-point detector.
pub struct VpDetector {
    params: VpParams,
}

impl VpDetector {
    pub fn new(params: VpParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &VpParams {
        &self.params
    }

    /// Runs the pipeline on a decoded image.
    pub fn process(&self, image: &DynamicImage) -> VpResult {
        self.run(image, None)
    }

    /// Runs the pipeline and, on success, writes a diagnostic overlay to
    /// `overlay_path` (best-effort; a failed write does not affect the
    /// result).
    pub fn process_with_overlay(&self, image: &DynamicImage, overlay_path: &Path) -> VpResult {
        self.run(image, Some(overlay_path))
    }

    /// Decodes the image at `input` and runs the pipeline on it.
    pub fn process_path(&self, input: &Path, overlay_path: Option<&Path>) -> Result<VpResult, String> {
        let image = image::open(input)
            .map_err(|e| format!("Failed to open {}: {e}", input.display()))?;
        Ok(self.run(&image, overlay_path))
    }

    fn run(&self, image: &DynamicImage, overlay_path: Option<&Path>) -> VpResult {
        let t0 = Instant::now();
        let mut result = VpResult::default();

        let polar = detect_polar_lines(image, &self.params.edges, &self.params.hough);
        result.lines_detected = polar.len();

        let segments = extend_polar_lines(&polar, self.params.line_extent);
        let sampled = sample_segments(&segments, self.params.sample_cap, self.params.seed);
        result.lines_sampled = sampled.len();

        let candidates = find_intersections(&sampled, self.params.pairing);
        result.candidates = candidates.len();
        if candidates.is_empty() {
            debug!("no intersection candidates; skipping grid vote");
            result.latency_ms = t0.elapsed().as_secs_f64() * 1000.0;
            return result;
        }

        let cell_size = self
            .params
            .cell_size
            .unwrap_or_else(|| f64::from(image.width().min(image.height())));
        let vote = find_vanishing_point(image.width(), image.height(), cell_size, &candidates);
        if vote.votes > 0 {
            result.found = true;
            result.point = vote.center;
            result.votes = vote.votes;
            debug!(
                "vanishing point at ({:.1}, {:.1}) with {} of {} candidates",
                vote.center.x,
                vote.center.y,
                vote.votes,
                candidates.len()
            );
            if let Some(path) = overlay_path {
                save_overlay(image, vote.center, cell_size, path);
            }
        } else {
            debug!("no grid cell captured any candidate");
        }
        result.latency_ms = t0.elapsed().as_secs_f64() * 1000.0;
        result
    }
}
