use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{error, info, LevelFilter};

use spheretrace::config::height_for;
use spheretrace::vec3::Vec3;
use spheretrace::*;

/// Log levels accepted on the command line.
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "spheretrace")]
#[command(about = "Renders a small sphere scene with normal shading")]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 400)]
    width: usize,

    /// Image height in pixels (defaults to width / aspect ratio)
    #[arg(long)]
    height: Option<usize>,

    /// Jittered rays averaged per pixel
    #[arg(long, short = 's', default_value_t = 100)]
    samples: usize,

    /// Seed for sample jitter
    #[arg(long, default_value_t = 0xDEADBEEF)]
    seed: u64,

    /// Render on the calling thread only
    #[arg(long)]
    sequential: bool,

    /// Output file; the format follows the extension
    #[arg(short, long, default_value = "image.png")]
    output: PathBuf,

    /// Logging level, overridden by RUST_LOG
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

impl Args {
    fn config(&self) -> RenderConfig {
        let defaults = RenderConfig::default();
        RenderConfig {
            width: self.width,
            height: self
                .height
                .unwrap_or_else(|| height_for(self.width, defaults.aspect_ratio)),
            samples_per_pixel: self.samples,
            seed: self.seed,
            parallel: !self.sequential,
            ..defaults
        }
    }
}

/// A small sphere in front of the camera, resting on a much larger one that
/// serves as the ground.
fn build_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add(Sphere {
        center: Vec3(0., 0., -1.),
        radius: 0.5,
    });
    scene.add(Sphere {
        center: Vec3(0., -100.5, -1.),
        radius: 100.,
    });
    scene
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.config();
    info!(
        "rendering {}x{}, {} samples/pixel, seed {:#x} -> {}",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.seed,
        args.output.display()
    );

    let scene = build_scene();
    info!("scene has {} objects", scene.len());

    let start = Instant::now();
    let film = render(&config, &scene)?;
    info!("rendered in {:.2?}", start.elapsed());

    film
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!("image saved as {}", args.output.display());
    Ok(())
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.clone().into())
        .parse_default_env()
        .init();

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
