use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use score_arc::{
    Color, FileSequenceSink, FrameLoop, GalleryTile, INITIAL_SCORE, PRESET_SCORES, RasterOptions,
    Scene, SequenceFormat, WidgetConfig, WidgetKey, compose_gallery, main_display_config,
    rasterize, record_animation, render_arc, to_svg, variants,
};

#[derive(Parser, Debug)]
#[command(name = "score-arc", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one gauge as SVG, PNG or a JSON scene dump.
    Render(RenderArgs),
    /// Record an animated transition as a numbered frame sequence.
    Animate(AnimateArgs),
    /// Write the demo gallery and every preset.
    Demo(DemoArgs),
}

#[derive(Parser, Debug)]
struct WidgetArgs {
    /// Widget config JSON. Flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overall diameter.
    #[arg(long)]
    size: Option<f64>,

    /// Arc thickness.
    #[arg(long)]
    stroke_width: Option<f64>,

    /// Hide the score, caption and diagnostic lines.
    #[arg(long, default_value_t = false)]
    no_label: bool,
}

impl WidgetArgs {
    fn load(&self, score: Option<f64>) -> anyhow::Result<WidgetConfig> {
        let mut cfg = match &self.config {
            Some(path) => WidgetConfig::from_path(path)?,
            None => WidgetConfig::new(
                score.context("either --score/--to or --config is required")?,
            ),
        };
        if let Some(score) = score {
            cfg.score = score.into();
        }
        if let Some(size) = self.size {
            cfg.size = size;
        }
        if let Some(stroke_width) = self.stroke_width {
            cfg.stroke_width = stroke_width;
        }
        if self.no_label {
            cfg.show_score = false;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Parser, Debug)]
struct RasterArgs {
    /// Pixel scale for PNG output.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Opaque PNG background, e.g. `#1f2937`. Transparent when omitted.
    #[arg(long)]
    background: Option<Color>,
}

impl RasterArgs {
    fn options(&self) -> RasterOptions {
        RasterOptions {
            scale: self.scale,
            background: self.background,
            ..RasterOptions::default()
        }
    }
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Score to draw, clamped to [1.0, 5.0].
    #[arg(long)]
    score: Option<f64>,

    #[command(flatten)]
    widget: WidgetArgs,

    #[command(flatten)]
    raster: RasterArgs,

    /// Output path; `.svg`, `.png` or `.json`.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FrameFormat {
    Svg,
    Png,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Starting score. Without it the gauge sweeps up from 1.0 as on first mount.
    #[arg(long)]
    from: Option<f64>,

    /// Target score. Defaults to the config's score.
    #[arg(long)]
    to: Option<f64>,

    #[command(flatten)]
    widget: WidgetArgs,

    /// Sampling rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Stop after this many frames even if the animation has not settled.
    #[arg(long, default_value_t = 3600)]
    max_frames: u64,

    /// Directory receiving `frame_NNNN.<ext>` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Frame file format.
    #[arg(long, value_enum, default_value_t = FrameFormat::Svg)]
    format: FrameFormat,

    #[command(flatten)]
    raster: RasterArgs,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Output directory.
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
        Command::Render(args) => cmd_render(args),
        Command::Animate(args) => cmd_animate(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = args.widget.load(args.score)?;
    let scene = render_arc(cfg.score, &cfg.display(), WidgetKey(0));
    write_scene(&scene, &args.out, &args.raster.options())?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let target = args.widget.load(args.to)?;
    let mut frames = FrameLoop::new();

    let key = match args.from {
        Some(from) => {
            let start = WidgetConfig {
                score: from.into(),
                animated: false,
                ..target.clone()
            };
            let key = frames.mount(&start);
            frames.reconfigure(key, &WidgetConfig {
                animated: true,
                ..target
            })?;
            key
        }
        None => frames.mount(&WidgetConfig {
            animated: true,
            ..target
        }),
    };

    let format = match args.format {
        FrameFormat::Svg => SequenceFormat::Svg,
        FrameFormat::Png => SequenceFormat::Png,
    };
    let mut sink =
        FileSequenceSink::new(&args.out_dir, format).with_raster_options(args.raster.options());
    let n = record_animation(&mut frames, key, args.fps, args.max_frames, &mut sink)?;

    eprintln!("wrote {n} frames to {}", args.out_dir.display());
    Ok(())
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let main = main_display_config(INITIAL_SCORE);
    let mut tiles = vec![GalleryTile::titled(
        "Current Score",
        render_arc(main.score, &main.display(), WidgetKey(0)),
    )];
    for (i, variant) in variants().into_iter().enumerate() {
        let key = WidgetKey(i as u64 + 1);
        let cfg = &variant.config;
        tiles.push(GalleryTile::titled(
            variant.title,
            render_arc(cfg.score, &cfg.display(), key),
        ));
    }
    let gallery = compose_gallery(&tiles, 2, 32.0, Color::WHITE)?;
    let raster = RasterOptions {
        background: Some(Color::GRAY_800),
        ..RasterOptions::default()
    };
    write_scene(&gallery, &args.out_dir.join("gallery.svg"), &raster)?;
    write_scene(&gallery, &args.out_dir.join("gallery.png"), &raster)?;

    for score in PRESET_SCORES {
        let cfg = WidgetConfig::new(score);
        let scene = render_arc(cfg.score, &cfg.display(), WidgetKey(0));
        let path = args.out_dir.join(format!("preset_{score:.1}.svg"));
        write_scene(&scene, &path, &raster)?;
    }

    eprintln!("wrote demo to {}", args.out_dir.display());
    Ok(())
}

fn write_scene(scene: &Scene, out: &Path, raster: &RasterOptions) -> anyhow::Result<()> {
    let ext = out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => {
            rasterize(scene, raster)?.save_png(out)?;
            return Ok(());
        }
        Some("svg") | Some("json") => {}
        _ => anyhow::bail!(
            "unsupported output extension for '{}' (expected .svg, .png or .json)",
            out.display()
        ),
    }

    score_arc::ensure_parent_dir(out)?;
    let text = if ext.as_deref() == Some("json") {
        serde_json::to_string_pretty(scene).context("serialize scene json")?
    } else {
        to_svg(scene)
    };
    std::fs::write(out, text).with_context(|| format!("write '{}'", out.display()))?;
    Ok(())
}
