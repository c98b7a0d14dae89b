//! Render Frames Example
//!
//! Drives the scene engine at a fixed frame rate and writes every frame to a
//! numbered PNG sequence, standing in for a display window.
//!
//! Run with: `RUST_LOG=debug cargo run --example render_frames -- [frames] [out_dir]`
//!
//! Defaults: one full 8 s loop at 30 fps (240 frames) into `frames/`.

use std::path::PathBuf;

use pixelscene::output::PngEncoder;
use pixelscene::prelude::*;

const FPS: f64 = 30.0;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let frames: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(240);
    let out_dir = args.next().map_or_else(|| PathBuf::from("frames"), PathBuf::from);

    println!("Render Frames Example");
    println!("=====================\n");

    let mut scene = SceneSequencer::builder().dimensions(600, 600).build()?;
    std::fs::create_dir_all(&out_dir)?;

    println!("Rendering {frames} frames at {FPS} fps into {}", out_dir.display());

    for i in 0..frames {
        let elapsed = i as f64 / FPS;
        let frame = scene.render_frame(elapsed);
        PngEncoder::write_to_file(frame, PngEncoder::frame_path(&out_dir, i))?;

        if i % 30 == 0 {
            let (_, _, mean) = frame.luminance_stats();
            println!(
                "  t={elapsed:5.2}s  phase={:<6}  mean luminance {mean:6.1}",
                scene.phase_at(elapsed).name()
            );
        }
    }

    println!("\nDone.");
    Ok(())
}
