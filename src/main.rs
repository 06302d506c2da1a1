use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use blockworld::{logging, FrameLoop, InputEvent, SimConfig};

/// Headless driver: builds a world, walks the occupant through it for a
/// number of ticks and reports what the renderer would be handed.
#[derive(Parser, Debug, Clone)]
#[command(version, about = "Block world simulation")]
struct Args {
    /// JSON config file; omitted sections keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of fixed simulation steps to run
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Key held for the whole run, e.g. `w` or `" "` (repeatable)
    #[arg(long = "hold", value_name = "KEY")]
    hold: Vec<String>,

    /// Horizontal pointer delta injected every tick
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    look_dx: f32,

    /// Vertical pointer delta injected every tick
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    look_dy: f32,

    /// Log the occupant state every N ticks (0 disables)
    #[arg(long, default_value_t = 60)]
    report_every: u64,

    /// Also write logs to this file (rolled daily)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref());

    let config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::default(),
    };

    let mut frame = FrameLoop::new(&config);
    for key in &args.hold {
        frame.handle_event(&InputEvent::KeyDown(key.clone()));
    }

    for tick in 1..=args.ticks {
        if args.look_dx != 0.0 || args.look_dy != 0.0 {
            frame.handle_event(&InputEvent::MouseMove {
                dx: args.look_dx,
                dy: args.look_dy,
            });
        }
        frame.tick();

        if args.report_every > 0 && tick % args.report_every == 0 {
            let o = &frame.occupant;
            info!(
                tick,
                x = o.position.x,
                y = o.position.y,
                z = o.position.z,
                yaw = o.yaw,
                pitch = o.pitch,
                regime = ?o.regime(),
                "occupant"
            );
        }
    }

    let faces = frame.visible_faces();
    info!(
        ticks = frame.ticks(),
        opaque = faces.opaque.len(),
        transparent = faces.transparent.len(),
        bytes = faces.opaque_bytes().len() + faces.transparent_bytes().len(),
        "visible faces"
    );

    Ok(())
}
