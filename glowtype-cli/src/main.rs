use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use glowtype::{Clock, FrameCompositor, Scene};
use minifb::{Key, Window, WindowOptions};

#[derive(Parser, Debug)]
#[command(name = "glowtype", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Open a window and run the animation at interactive rates.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Scene JSON; the built-in scene is used when omitted.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Frame index (0-based); the clock value is frame × clock_step.
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Scene JSON; the built-in scene is used when omitted.
    #[arg(long)]
    scene: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn load_scene(path: Option<&PathBuf>) -> anyhow::Result<Scene> {
    match path {
        Some(path) => Ok(Scene::from_path(path)?),
        None => Ok(Scene::default()),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = load_scene(args.scene.as_ref())?;
    let clock = Clock::from_frame(args.frame, scene.clock_step);
    let frame = glowtype::render_frame(&scene, clock)?.readback_rgb8();

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let scene = load_scene(args.scene.as_ref())?;
    let width = scene.canvas.width as usize;
    let height = scene.canvas.height as usize;

    let mut compositor = FrameCompositor::new(&scene)?;
    let mut window = Window::new("glowtype", width, height, WindowOptions::default())
        .context("create preview window")?;
    window.set_target_fps(60);

    // The loop owns the clock; the engine only ever reads it.
    let mut clock = Clock::ZERO;
    while window.is_open() && !window.is_key_down(Key::Escape) {
        let buffer = compositor.render(clock).readback_0rgb();
        window
            .update_with_buffer(&buffer, width, height)
            .context("present frame")?;
        clock = clock.advanced_by(scene.clock_step);
    }
    Ok(())
}
