use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use glam::Vec2;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use touchform_common::Transform;
use touchform_input::{
    Action, InputFrame, InputScript, InputSnapshot, InputSource, ScriptedSource, TouchPoint,
};
use touchform_kernel::{FrameClock, GestureConfig, GestureInterpreter, GestureMode, Profile};
use touchform_tools::{GestureInspector, LogOverlay, OverlayHandle};

#[derive(Parser)]
#[command(name = "touchform-cli", about = "Drive a transform from recorded touch gestures")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Replay a recorded input script against a single transform
    Replay {
        /// YAML input script
        script: PathBuf,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Run a built-in drag, pinch, and multi-touch sequence
    Demo {
        #[command(flatten)]
        run: RunArgs,
    },
    /// Print a profile's configuration as YAML
    Profile {
        /// combined, pinch-and-slide, or tap-toggle
        #[arg(default_value = "combined")]
        name: Profile,
    },
}

#[derive(clap::Args)]
struct RunArgs {
    /// Preset gesture behavior
    #[arg(short, long, default_value = "combined")]
    profile: Profile,
    /// YAML config file; replaces the profile when given
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Initial uniform scale of the transform
    #[arg(long, default_value = "1.0")]
    scale: f32,
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,
    /// Print the captured log overlay after the run
    #[arg(long)]
    overlay: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// One replayed frame, as printed in JSON mode.
#[derive(Serialize)]
struct FrameRecord {
    frame: usize,
    elapsed: f32,
    mode: GestureMode,
    active_touches: usize,
    actions: Vec<Action>,
    transform: Transform,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    let overlay = OverlayHandle::new(LogOverlay::new());
    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(overlay.layer())
        .init();

    match cli.command {
        Commands::Info => {
            println!("touchform-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", touchform_common::crate_info());
            println!("input: {}", touchform_input::crate_info());
            println!("kernel: {}", touchform_kernel::crate_info());
            println!("tools: {}", touchform_tools::crate_info());
            let profiles: Vec<&str> = Profile::ALL.iter().map(|p| p.name()).collect();
            println!("profiles: {}", profiles.join(", "));
        }
        Commands::Replay { script, run } => {
            let script = InputScript::load(&script)
                .with_context(|| format!("loading script {}", script.display()))?;
            execute(script, &run, &overlay)?;
        }
        Commands::Demo { run } => {
            execute(demo_script(), &run, &overlay)?;
        }
        Commands::Profile { name } => {
            print!("{}", name.config().to_yaml_string()?);
        }
    }

    Ok(())
}

fn resolve_config(run: &RunArgs) -> anyhow::Result<GestureConfig> {
    match &run.config {
        Some(path) => GestureConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(run.profile.config()),
    }
}

fn execute(script: InputScript, run: &RunArgs, overlay: &OverlayHandle) -> anyhow::Result<()> {
    let config = resolve_config(run)?;
    if !run.scale.is_finite() || run.scale <= 0.0 {
        anyhow::bail!("initial scale must be positive, got {}", run.scale);
    }

    let mut transform = Transform::with_uniform_scale(run.scale);
    let mut interpreter = GestureInterpreter::new(config, &transform);
    let mut clock = FrameClock::new();
    let mut source = ScriptedSource::new(script);
    let mut records = Vec::new();

    tracing::info!(frames = source.remaining(), "replay started");
    let mut frame = 0;
    while let Some(InputFrame { dt, snapshot }) = source.next_frame() {
        let time = clock.tick(dt);
        let report = interpreter.advance(&snapshot, time, &mut transform);
        match run.format {
            Format::Text => {
                let summary = GestureInspector::summary(&interpreter, &transform, &report);
                println!("[{frame:>4}] t={:>6.3} {summary}", time.elapsed);
            }
            Format::Json => records.push(FrameRecord {
                frame,
                elapsed: time.elapsed,
                mode: report.mode,
                active_touches: report.active_touches,
                actions: report.actions,
                transform,
            }),
        }
        frame += 1;
    }
    tracing::info!(frames = frame, elapsed = clock.elapsed(), "replay finished");

    if let Format::Json = run.format {
        println!("{}", serde_json::to_string_pretty(&records)?);
    }
    if run.overlay {
        println!("--- overlay ---");
        print!("{}", overlay.text());
    }
    Ok(())
}

/// Drag right, pinch out, hold three fingers, then tap and release.
fn demo_script() -> InputScript {
    const DT: f32 = 1.0 / 60.0;
    let mut frames = Vec::new();
    let mut push = |snapshot: InputSnapshot| frames.push(InputFrame::new(DT, snapshot));

    push(InputSnapshot::touches(vec![TouchPoint::began(1, Vec2::new(100.0, 300.0))]));
    for i in 1..=10 {
        let x = 100.0 + i as f32 * 12.0;
        push(InputSnapshot::touches(vec![TouchPoint::moved(
            1,
            Vec2::new(x, 300.0),
            Vec2::new(12.0, 0.0),
        )]));
    }
    push(InputSnapshot::touches(vec![TouchPoint::ended(1, Vec2::new(220.0, 300.0))]));

    for i in 0..10 {
        let spread = 8.0;
        let left = 200.0 - i as f32 * spread;
        let right = 300.0 + i as f32 * spread;
        push(InputSnapshot::touches(vec![
            TouchPoint::moved(1, Vec2::new(left, 300.0), Vec2::new(-spread, 0.0)),
            TouchPoint::moved(2, Vec2::new(right, 300.0), Vec2::new(spread, 0.0)),
        ]));
    }

    for _ in 0..30 {
        push(InputSnapshot::touches(vec![
            TouchPoint::stationary(1, Vec2::new(200.0, 300.0)),
            TouchPoint::stationary(2, Vec2::new(300.0, 300.0)),
            TouchPoint::stationary(3, Vec2::new(250.0, 400.0)),
        ]));
    }

    push(InputSnapshot::touches(vec![TouchPoint::began(4, Vec2::new(250.0, 250.0))]));
    push(InputSnapshot::touches(vec![TouchPoint::ended(4, Vec2::new(250.0, 250.0))]));
    push(InputSnapshot::default());

    InputScript::new(frames)
}
