use super::LineSegment;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Returns a uniformly random subset of `min(cap, segments.len())` segments.
///
/// The full list is shuffled and a prefix taken, so every segment is equally
/// likely to be retained. A `seed` makes the draw reproducible; `None` seeds
/// from OS entropy, so membership varies between runs while the output size
/// stays deterministic.
pub fn sample_segments(segments: &[LineSegment], cap: usize, seed: Option<u64>) -> Vec<LineSegment> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut sampled = segments.to_vec();
    sampled.shuffle(&mut rng);
    sampled.truncate(cap);
    sampled
}
