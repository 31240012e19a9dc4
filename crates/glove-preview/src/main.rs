use anyhow::Context;
use clap::Parser;
use glove_timeline::{
    shipped_timeline, PerspectiveCamera, ProgressSignal, ScrollCameraEngine, SharedCamera,
    Timeline, TimelineConfig, INITIAL_SCENE,
};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Sweep scroll progress through the camera timeline and print each pose.
#[derive(Parser, Debug)]
#[command(name = "glove-preview", version)]
struct Args {
    /// Number of progress steps between 0 and 1
    #[arg(long, default_value_t = 20)]
    steps: usize,

    /// JSON timeline to use instead of the shipped one
    #[arg(long)]
    timeline: Option<PathBuf>,

    /// Viewport aspect ratio used for the projection matrix
    #[arg(long, default_value_t = 16.0 / 9.0)]
    aspect: f32,

    /// Print the timeline as JSON and exit
    #[arg(long)]
    dump: bool,

    /// Print the view-projection matrix for each step
    #[arg(long)]
    matrices: bool,

    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,
}

fn load_timeline(path: Option<&Path>) -> anyhow::Result<Timeline> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Timeline::from_json(&json).with_context(|| format!("loading {}", path.display()))
        }
        None => Ok(shipped_timeline()?),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::builder().filter_level(args.log_level).init();

    let timeline = load_timeline(args.timeline.as_deref())?;
    if args.dump {
        println!("{}", TimelineConfig::from(&timeline).to_json_pretty()?);
        return Ok(());
    }
    anyhow::ensure!(args.steps > 0, "--steps must be at least 1");
    anyhow::ensure!(
        args.aspect.is_finite() && args.aspect > 0.0,
        "--aspect must be positive"
    );

    let timeline = Rc::new(timeline);
    let camera = Rc::new(RefCell::new(PerspectiveCamera::new(args.aspect)));
    let signal = ProgressSignal::new();
    let engine = ScrollCameraEngine::new(timeline.clone());
    let handle = engine.attach(
        Some(camera.clone() as SharedCamera),
        &signal,
        Some(Box::new(|scene: usize| log::info!("scene -> {scene}"))),
    );

    for step in 0..=args.steps {
        let p = step as f32 / args.steps as f32;
        signal.set(p);

        let scene = handle.scene_index().unwrap_or(INITIAL_SCENE);
        let id = timeline
            .segment(scene - 1)
            .map(|s| s.id.as_str())
            .unwrap_or("?");
        let cam = camera.borrow();
        println!(
            "p={:.3} scene={} {:<18} pos=({:6.3}, {:6.3}, {:6.3}) rot=({:6.3}, {:6.3}, {:6.3}) fov={:5.2}",
            p,
            scene,
            id,
            cam.position.x,
            cam.position.y,
            cam.position.z,
            cam.rotation.x,
            cam.rotation.y,
            cam.rotation.z,
            cam.fov_degrees
        );
        if args.matrices {
            for row in cam.view_projection().transpose().to_cols_array_2d() {
                println!(
                    "    [{:8.4} {:8.4} {:8.4} {:8.4}]",
                    row[0], row[1], row[2], row[3]
                );
            }
        }
    }
    Ok(())
}
