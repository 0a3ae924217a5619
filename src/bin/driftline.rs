use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use driftline::TimeSource as _;

#[derive(Parser, Debug)]
#[command(name = "driftline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a phase-locked PNG sequence.
    Frames(FramesArgs),
    /// Print the resolved parameters and a family summary as JSON.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Section variant to mount; repeat to layer several sections.
    #[arg(long = "variant", default_value = "hero")]
    variants: Vec<String>,

    /// Variant override JSON (`{"variants": {...}}`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output width in pixels.
    #[arg(long, default_value_t = 960)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 540)]
    height: u32,

    /// Stroke width in pixels.
    #[arg(long, default_value_t = 1.0)]
    line_width: f64,

    /// Skip the per-section overlay mask.
    #[arg(long)]
    no_overlay: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Clock ticks to advance before rendering.
    #[arg(long, default_value_t = 0)]
    ticks: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of frames to write.
    #[arg(long, default_value_t = 60)]
    count: u32,

    /// Clock ticks between written frames.
    #[arg(long, default_value_t = 1)]
    every: u64,

    /// Output directory; frames are named `frame_00000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Section variant to resolve.
    #[arg(long, default_value = "hero")]
    variant: String,

    /// Variant override JSON (`{"variants": {...}}`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Clock ticks used for the reported transform.
    #[arg(long, default_value_t = 0)]
    ticks: u64,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_table(config: Option<&Path>) -> anyhow::Result<driftline::VariantTable> {
    match config {
        Some(path) => driftline::VariantTable::from_json_path(path)
            .with_context(|| format!("load variant table '{}'", path.display())),
        None => Ok(driftline::VariantTable::builtin()),
    }
}

fn make_scene(
    args: &SceneArgs,
) -> anyhow::Result<(driftline::FrameDriver, driftline::CpuRenderer)> {
    let table = load_table(args.config.as_deref())?;
    let mut driver = driftline::FrameDriver::new(driftline::SharedClock::global(), table);
    for (i, name) in args.variants.iter().enumerate() {
        if !driver.mount(format!("section-{i}"), name) {
            eprintln!("section '{name}' could not be built; drawing nothing for it");
        }
    }

    let canvas = driftline::Canvas::new(args.width, args.height)?;
    let settings = driftline::RenderSettings {
        line_width: args.line_width,
        draw_overlay: !args.no_overlay,
        ..driftline::RenderSettings::default()
    };
    let renderer = driftline::CpuRenderer::new(canvas, driftline::Camera::default(), settings)?;
    Ok((driver, renderer))
}

fn render_current(
    driver: &driftline::FrameDriver,
    renderer: &driftline::CpuRenderer,
) -> anyhow::Result<driftline::FrameRGBA> {
    let snapshots: Vec<_> = driver.snapshot().into_iter().map(|(_, s)| s).collect();
    Ok(renderer.render(&snapshots)?)
}

fn write_png(path: &Path, frame: &driftline::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (driver, renderer) = make_scene(&args.scene)?;
    for _ in 0..args.ticks {
        driver.clock().tick();
    }
    let frame = render_current(&driver, &renderer)?;
    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    if args.count == 0 {
        anyhow::bail!("--count must be >= 1");
    }
    let (driver, renderer) = make_scene(&args.scene)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for k in 0..args.count {
        let frame = render_current(&driver, &renderer)?;
        let path = args.out_dir.join(format!("frame_{k:05}.png"));
        write_png(&path, &frame)?;
        for _ in 0..args.every {
            driver.clock().tick();
        }
    }
    eprintln!("wrote {} frames to {}", args.count, args.out_dir.display());
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let table = load_table(args.config.as_deref())?;
    let variant = driftline::VariantName::resolve(&args.variant);
    let params = table.get(variant);
    params
        .validate()
        .with_context(|| format!("variant '{variant}' has invalid parameters"))?;
    let family = driftline::build_family_with(&params.family)?;

    let clock = driftline::SharedClock::new();
    for _ in 0..args.ticks {
        clock.tick();
    }
    let transform = driftline::frame_transform(&params.motion, clock.now());
    let first = family
        .curves()
        .first()
        .and_then(|c| c.points().first().copied());

    let report = serde_json::json!({
        "requested": args.variant,
        "variant": variant,
        "overridden": table.is_overridden(variant),
        "params": params,
        "family": {
            "kind": family.kind(),
            "curves": family.len(),
            "samples_per_curve": params.family.samples_per_curve,
            "points": family.point_count(),
            "first_point": first,
            "fingerprint": driftline::fingerprint_family(&family).to_string(),
        },
        "frame": {
            "ticks": args.ticks,
            "now": clock.now(),
            "transform": transform,
        },
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("serialize report")?
    );
    Ok(())
}
