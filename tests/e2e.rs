mod common;

use common::synthetic_image::{converging_lines, uniform};
use vp_detector::{VpDetector, VpParams};

#[test]
fn converging_lines_produce_a_vanishing_point() {
    let image = converging_lines(200, 200, (75.0, 75.0), 6);
    let detector = VpDetector::new(VpParams {
        seed: Some(7),
        ..Default::default()
    });
    let result = detector.process(&image);

    assert!(result.lines_detected > 0, "expected Hough lines");
    assert!(
        result.found,
        "expected a vanishing point, candidates={}",
        result.candidates
    );
    assert!(result.votes > 0);
    // Default cell size spans the whole 200x200 frame, so the reported
    // point is the center of the single dominant cell.
    assert!((result.point.x - 100.0).abs() < 1e-9);
    assert!((result.point.y - 100.0).abs() < 1e-9);
}

#[test]
fn finer_grid_localizes_the_focus() {
    let focus = (75.0f32, 75.0f32);
    let image = converging_lines(200, 200, focus, 6);
    let detector = VpDetector::new(VpParams {
        seed: Some(7),
        cell_size: Some(50.0),
        ..Default::default()
    });
    let result = detector.process(&image);

    assert!(result.found);
    let dx = result.point.x - f64::from(focus.0);
    let dy = result.point.y - f64::from(focus.1);
    let dist = (dx * dx + dy * dy).sqrt();
    assert!(
        dist < 75.0,
        "winning cell center ({:.1}, {:.1}) too far from focus, dist={dist:.1}",
        result.point.x,
        result.point.y
    );
}

#[test]
fn uniform_image_reports_no_vanishing_point() {
    let image = uniform(160, 120);
    let detector = VpDetector::new(VpParams::default());
    let result = detector.process(&image);

    assert!(!result.found);
    assert_eq!(result.votes, 0);
    assert_eq!(result.lines_detected, 0);
    assert_eq!(result.candidates, 0);
}

#[test]
fn overlay_write_is_best_effort_side_channel() {
    let image = converging_lines(120, 120, (60.0, 60.0), 4);
    let detector = VpDetector::new(VpParams {
        seed: Some(3),
        ..Default::default()
    });

    let path = std::env::temp_dir().join("vp_detector_e2e_overlay.png");
    let _ = std::fs::remove_file(&path);
    let result = detector.process_with_overlay(&image, &path);

    if result.found {
        assert!(path.exists(), "overlay image should have been written");
        let _ = std::fs::remove_file(&path);
    }

    // An unwritable overlay path must not affect the primary result.
    let bad = std::path::Path::new("/nonexistent-root/overlay.png");
    let again = detector.process_with_overlay(&image, bad);
    assert_eq!(again.found, result.found);
}
