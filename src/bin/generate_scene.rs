//! Scene generator binary: builds the full waterfront and reports on it.
//!
//! Usage: cargo run --release --bin generate_scene -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>    Scene config JSON (missing fields take defaults)
//!   --seed <SEED>      Base seed, overrides the config
//!   --mode <MODE>      day | night, overrides the config
//!   --summary <PATH>   Write scene statistics as JSON
//!   --map <PATH>       Write a top-down preview PNG
//!   --time <SECONDS>   Animation time for the preview (default: 0)

use std::path::PathBuf;
use std::time::Instant;

use serde_json::json;

use bosphorus::core::Result;
use bosphorus::generation::Mode;
use bosphorus::scene::{render_top_down, save_png, Scene, SceneConfig};

/// Preview resolution: one pixel per voxel cell
const PIXELS_PER_UNIT: f32 = 8.0;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut config = match parse_str_arg(&args, "--config") {
        Some(path) => SceneConfig::load(&PathBuf::from(path))?,
        None => SceneConfig::default(),
    };
    if let Some(seed) = parse_u32_arg(&args, "--seed") {
        config.seed = seed;
    }
    if let Some(mode) = parse_str_arg(&args, "--mode") {
        config.mode = mode
            .parse::<Mode>()
            .map_err(bosphorus::Error::InvalidConfig)?;
    }
    let time = parse_f32_arg(&args, "--time").unwrap_or(0.0);

    println!("=== Bosphorus Scene Generator ===");
    println!("Seed:  {}", config.seed);
    println!("Mode:  {:?}", config.mode);
    println!("Gulls: {}, cars per lane: {}", config.gulls, config.cars_per_lane);
    println!();

    let start = Instant::now();
    let mut scene = Scene::new(config)?;
    let report = scene.refresh();
    let elapsed = start.elapsed().as_secs_f64();
    let stats = scene.stats();

    println!("Entities: {} ({} distinct sets, {} empty)",
        stats.entities, stats.unique_sets, stats.empty_entities);
    println!("Voxels:   {} opaque, {} light",
        stats.opaque_voxels, stats.light_voxels);
    println!("Buffers:  {} rebuilt", report.rebuilt);
    println!("Time:     {:.2}s", elapsed);
    for (kind, count) in &stats.per_kind {
        println!("  {:<14} {:>9}", kind, count);
    }

    if let Some(path) = parse_str_arg(&args, "--summary") {
        let path = PathBuf::from(path);
        let summary = json!({
            "seed": scene.config().seed,
            "mode": scene.mode(),
            "generated": report.generated,
            "buffers_rebuilt": report.rebuilt,
            "seconds": elapsed,
            "stats": stats,
        });
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(&summary)?)?;
        log::info!("Wrote summary to {}", path.display());
    }

    if let Some(path) = parse_str_arg(&args, "--map") {
        let path = PathBuf::from(path);
        let image = render_top_down(&scene, time, PIXELS_PER_UNIT);
        save_png(&image, &path)?;
        log::info!(
            "Wrote {}x{} preview to {}",
            image.width(), image.height(), path.display()
        );
    }

    Ok(())
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
