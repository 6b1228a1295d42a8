use std::path::{Path, PathBuf};

use anyhow::Context as _;
use badged_drawer_arrow::{
    BadgedArrowProps, BadgedDrawerArrow, CpuSurface, Density, DrawerArrow, LabelShaper,
    NoFontShaper, ParleyShaper, Rgba8,
};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "badged-arrow", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a progress sweep as numbered PNGs.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct RenderOpts {
    /// Props JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file for badge labels. Labels are skipped without one.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Square output size in pixels.
    #[arg(long, default_value_t = 96)]
    size: u32,

    /// Pixels per dp.
    #[arg(long, default_value_t = 2.0)]
    density: f64,

    /// Background color, e.g. `#ffffff`. Transparent when omitted.
    #[arg(long)]
    background: Option<Rgba8>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    render: RenderOpts,

    /// Morph progress; `0` is the hamburger, `1` the arrow.
    #[arg(long, default_value_t = 0.0)]
    progress: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    #[command(flatten)]
    render: RenderOpts,

    /// Frames from progress 0 to 1, inclusive.
    #[arg(long, default_value_t = 24)]
    frames: u32,

    /// Also sweep back down to 0.
    #[arg(long, default_value_t = false)]
    reverse: bool,

    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn build_drawable(opts: &RenderOpts) -> anyhow::Result<BadgedDrawerArrow<DrawerArrow>> {
    let props = match &opts.config {
        Some(path) => BadgedArrowProps::from_path(path)
            .with_context(|| format!("load props '{}'", path.display()))?,
        None => BadgedArrowProps::default(),
    };
    let shaper: Box<dyn LabelShaper> = match &opts.font {
        Some(path) => Box::new(
            ParleyShaper::from_path(path)
                .with_context(|| format!("load font '{}'", path.display()))?,
        ),
        None => Box::new(NoFontShaper),
    };
    Ok(props.build(Density(opts.density), shaper))
}

#[tracing::instrument(level = "debug", skip_all, fields(progress = progress))]
fn render_png(
    drawable: &mut BadgedDrawerArrow<DrawerArrow>,
    opts: &RenderOpts,
    progress: f64,
    out: &Path,
) -> anyhow::Result<()> {
    drawable.set_progress(progress);

    let mut surface = CpuSurface::new(opts.size, opts.size)?;
    if let Some(bg) = opts.background {
        surface.clear(bg);
    }
    let bounds = surface.bounds();
    drawable.draw(&mut surface, bounds);
    let frame = surface.finish().into_straight();

    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut drawable = build_drawable(&args.render)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    render_png(&mut drawable, &args.render, args.progress, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.frames >= 2, "--frames must be at least 2");
    let mut drawable = build_drawable(&args.render)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let last = args.frames - 1;
    let forward = (0..=last).map(|i| f64::from(i) / f64::from(last));
    let backward = (0..last).rev().map(|i| f64::from(i) / f64::from(last));
    let steps: Vec<f64> = if args.reverse {
        forward.chain(backward).collect()
    } else {
        forward.collect()
    };

    for (i, progress) in steps.iter().copied().enumerate() {
        let out = args.out_dir.join(format!("frame_{i:04}.png"));
        render_png(&mut drawable, &args.render, progress, &out)?;
    }

    eprintln!(
        "wrote {} frames to {} ({} clip rebuilds, {} label shapes)",
        steps.len(),
        args.out_dir.display(),
        drawable.clip_rebuild_count(),
        drawable.label_reshape_count(),
    );
    Ok(())
}
