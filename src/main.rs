//! Headless driver placing floating items and simulating them for a fixed
//! number of frames.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use drift::{
    init_logging, spawn_item_row, DebugOverlay, FloatingItem, FloatingItemPlugin, ItemMotion,
    ItemSettings, ItemTuning, MotionPhase, PluginSettings,
};
use log::info;
use serde::Serialize;

/// Headless floating item simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of items to place
    #[arg(short, long, default_value_t = 3)]
    items: usize,
    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u32,
    /// Seconds per frame
    #[arg(short, long, default_value_t = 1.0 / 60.0)]
    delta: f32,
    /// Seed for the shared random source
    #[arg(short, long)]
    seed: Option<u64>,
    /// JSON file with item settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Collect per-item debug messages and log them at the end
    #[arg(long)]
    overlay: bool,
    /// Write the final item states to this JSON file
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Final state of one item.
#[derive(Serialize)]
struct ItemSnapshot {
    label: String,
    position: Vec3,
    orientation: Quat,
    phase: MotionPhase,
    elapsed_lifetime: f64,
    tuning: ItemTuning,
}

const ITEM_SPACING: f32 = 200.0;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    ensure!(
        args.delta.is_finite() && args.delta > 0.0,
        "--delta must be a positive number of seconds, got {}",
        args.delta
    );

    let settings = match &args.config {
        Some(path) => ItemSettings::from_json_file(path)
            .with_context(|| format!("loading item settings from {}", path.display()))?,
        None => ItemSettings::default(),
    };

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
            args.delta,
        )))
        .add_plugins(FloatingItemPlugin::new(PluginSettings {
            seed: args.seed,
            debug_overlay: args.overlay,
            oscillation_axis: if args.config.is_some() {
                None
            } else {
                Some(Vec3::Y)
            },
            ..PluginSettings::default()
        }));
    app.finish();
    app.cleanup();

    let placed = spawn_item_row(
        app.world_mut(),
        args.items,
        Vec3::ZERO,
        ITEM_SPACING,
        settings,
    );
    info!("placed {} of {} items", placed.len(), args.items);

    for _ in 0..args.frames {
        app.update();
    }

    let snapshots = collect_snapshots(app.world_mut());
    for snapshot in &snapshots {
        info!(
            "{}: {:?} at {} after {:.2}s",
            snapshot.label, snapshot.phase, snapshot.position, snapshot.elapsed_lifetime
        );
    }

    if let Some(overlay) = app.world().get_resource::<DebugOverlay>() {
        for (_, message) in overlay.sorted() {
            info!("{}", message.text.trim_end());
        }
    }

    if let Some(path) = &args.snapshot {
        let json = serde_json::to_string_pretty(&snapshots)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        info!("snapshot written to {}", path.display());
    }
    Ok(())
}

fn collect_snapshots(world: &mut World) -> Vec<ItemSnapshot> {
    let mut query = world.query::<(&FloatingItem, &ItemMotion, &Transform)>();
    let mut snapshots: Vec<_> = query
        .iter(world)
        .map(|(item, motion, transform)| ItemSnapshot {
            label: item.label().to_owned(),
            position: transform.translation,
            orientation: transform.rotation,
            phase: motion.phase(),
            elapsed_lifetime: motion.oscillation.elapsed_lifetime(),
            tuning: item.tuning,
        })
        .collect();
    snapshots.sort_by(|a, b| a.label.cmp(&b.label));
    snapshots
}
