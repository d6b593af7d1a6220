//! Line-detection front end backed by `imageproc`.
//!
//! Grayscale conversion, morphological open, Canny edges, and the Hough
//! transform all come from the image-processing library; this module only
//! adapts its output into the crate's polar-line representation.

use crate::params::{EdgeParams, HoughParams};
use crate::segments::PolarLine;
use image::DynamicImage;
use imageproc::distance_transform::Norm;
use imageproc::edges::canny;
use imageproc::hough::{detect_lines, LineDetectionOptions};
use imageproc::morphology::open;
use log::debug;
use std::time::Instant;

/// Runs edge detection and the Hough transform over `image`, returning
/// detected lines in polar form with `theta` in radians.
pub fn detect_polar_lines(
    image: &DynamicImage,
    edges: &EdgeParams,
    hough: &HoughParams,
) -> Vec<PolarLine> {
    let t0 = Instant::now();
    let gray = image.to_luma8();
    let opened = if edges.morph_radius > 0 {
        open(&gray, Norm::LInf, edges.morph_radius)
    } else {
        gray
    };
    let edge_map = canny(&opened, edges.canny_low, edges.canny_high);
    let options = LineDetectionOptions {
        vote_threshold: hough.vote_threshold,
        suppression_radius: hough.suppression_radius,
    };
    let lines = detect_lines(&edge_map, options);
    let polar: Vec<PolarLine> = lines
        .iter()
        .map(|line| PolarLine {
            rho: f64::from(line.r),
            theta: f64::from(line.angle_in_degrees).to_radians(),
        })
        .collect();
    debug!(
        "hough: {} lines from {}x{} in {:.3} ms",
        polar.len(),
        image.width(),
        image.height(),
        t0.elapsed().as_secs_f64() * 1000.0
    );
    polar
}
