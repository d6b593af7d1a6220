//! Diagnostic overlay: winning-cell outline and marker drawn on the input.
//!
//! Drawing is separated from the voting logic so the selection stays pure
//! and independently testable. Persisting the overlay is best-effort; a
//! failed write is logged and never fails the primary result.

use crate::io::ensure_parent_dir;
use crate::types::Point2d;
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_cross_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use log::warn;
use std::path::Path;

const BOX_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const MARKER_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Renders a square of side `cell_size` centered on `point`, plus a cross
/// marker at the point itself.
pub fn draw_overlay(image: &DynamicImage, point: Point2d, cell_size: f64) -> RgbImage {
    let mut canvas = image.to_rgb8();
    let half = cell_size * 0.5;
    let side = cell_size.round().max(1.0) as u32;
    let rect = Rect::at(
        (point.x - half).round() as i32,
        (point.y - half).round() as i32,
    )
    .of_size(side, side);
    draw_hollow_rect_mut(&mut canvas, rect, BOX_COLOR);
    draw_cross_mut(
        &mut canvas,
        MARKER_COLOR,
        point.x.round() as i32,
        point.y.round() as i32,
    );
    canvas
}

/// Draws the overlay and writes it to `path`, logging on failure.
pub fn save_overlay(image: &DynamicImage, point: Point2d, cell_size: f64, path: &Path) {
    let canvas = draw_overlay(image, point, cell_size);
    if let Err(err) = ensure_parent_dir(path) {
        warn!("overlay not saved: {err}");
        return;
    }
    if let Err(err) = canvas.save(path) {
        warn!("failed to save overlay {}: {err}", path.display());
    }
}
