use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "annual-wheel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the radial layout and write it as JSON.
    Layout(LayoutArgs),
    /// Render the wheel as an SVG document.
    Svg(SvgArgs),
    /// Render the wheel as a PNG image.
    Png(PngArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input wheel JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output layout JSON (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Background ring segments per month.
    #[arg(long, default_value_t = annual_wheel::DEFAULT_RING_SUBDIVISIONS)]
    quarters: u32,
}

#[derive(Parser, Debug)]
struct SvgArgs {
    /// Input wheel JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Render settings JSON (missing fields keep their defaults).
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PngArgs {
    /// Input wheel JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Render settings JSON (missing fields keep their defaults).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Pixel density multiplier.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "annual-wheel");
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Png(args) => cmd_png(args),
    }
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let wheel = annual_wheel::Wheel::from_path(&args.in_path)?;
    let inputs = wheel.layout_inputs()?;
    let layout = annual_wheel::layout_wheel(&inputs, args.quarters)?;
    let json = serde_json::to_string_pretty(&layout).context("serialize layout")?;
    match args.out {
        Some(out) => write_output(&out, json.as_bytes()),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let wheel = annual_wheel::Wheel::from_path(&args.in_path)?;
    let settings = load_settings(args.settings.as_deref())?;
    let svg = annual_wheel::render_svg(&wheel, &settings)?;
    write_output(&args.out, svg.as_bytes())
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let wheel = annual_wheel::Wheel::from_path(&args.in_path)?;
    let settings = load_settings(args.settings.as_deref())?;
    let svg = annual_wheel::render_svg(&wheel, &settings)?;
    let png = annual_wheel::rasterize_png(&svg, args.scale)?;
    write_output(&args.out, &png)
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<annual_wheel::RenderSettings> {
    Ok(match path {
        Some(p) => annual_wheel::RenderSettings::from_path(p)?,
        None => annual_wheel::RenderSettings::default(),
    })
}

fn write_output(out: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, bytes).with_context(|| format!("write '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
