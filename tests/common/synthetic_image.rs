use image::{DynamicImage, GrayImage, Luma};
use imageproc::drawing::draw_line_segment_mut;

/// White canvas with `count` dark lines through `focus`, evenly spread over
/// half a turn. Every pairwise intersection lies at the focus, which makes
/// it the expected vanishing point.
pub fn converging_lines(width: u32, height: u32, focus: (f32, f32), count: usize) -> DynamicImage {
    assert!(count > 1, "need at least two lines to intersect");
    let mut img = GrayImage::from_pixel(width, height, Luma([255u8]));
    let reach = 2.0 * width.max(height) as f32;
    for i in 0..count {
        let angle = 0.2 + i as f32 * std::f32::consts::PI / count as f32;
        let (s, c) = angle.sin_cos();
        draw_line_segment_mut(
            &mut img,
            (focus.0 - reach * c, focus.1 - reach * s),
            (focus.0 + reach * c, focus.1 + reach * s),
            Luma([0u8]),
        );
    }
    DynamicImage::ImageLuma8(img)
}

/// Featureless canvas: no edges, so no lines should be detected.
pub fn uniform(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([255u8])))
}
