use serde::Serialize;

/// 2-D location in image pixel space.
pub type Point2d = nalgebra::Point2<f64>;

/// Outcome of a single pipeline run.
///
/// `found == false` means "no vanishing point": either no lines were
/// detected, no pair of sampled lines intersected, or no grid cell captured
/// a candidate. In that case `point` and `votes` carry no information.
#[derive(Clone, Debug, Serialize)]
pub struct VpResult {
    pub found: bool,
    pub point: Point2d,
    pub votes: usize,
    pub lines_detected: usize,
    pub lines_sampled: usize,
    pub candidates: usize,
    pub latency_ms: f64,
}

impl Default for VpResult {
    fn default() -> Self {
        Self {
            found: false,
            point: Point2d::origin(),
            votes: 0,
            lines_detected: 0,
            lines_sampled: 0,
            candidates: 0,
            latency_ms: 0.0,
        }
    }
}
