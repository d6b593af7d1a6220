use vp_detector::config;
use vp_detector::io::write_json_file;
use vp_detector::VpDetector;

use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = config::load_config(Path::new(&config_path))?;

    let detector = VpDetector::new(config.params);
    let result = detector.process_path(&config.input, config.output.overlay_image.as_deref())?;

    write_json_file(&config.output.result_json, &result)?;

    if result.found {
        println!(
            "vanishing point at ({:.1}, {:.1}) with {} votes ({} lines, {} candidates, {:.1} ms)",
            result.point.x,
            result.point.y,
            result.votes,
            result.lines_detected,
            result.candidates,
            result.latency_ms
        );
    } else {
        println!(
            "no vanishing point found ({} lines, {} candidates)",
            result.lines_detected, result.candidates
        );
    }
    println!("Saved result to {}", config.output.result_json.display());
    Ok(())
}

fn usage() -> String {
    "Usage: vp-detector <config.json>".to_string()
}
