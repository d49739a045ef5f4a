use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "floorplot", version, about = "Plot floorplan rectangle dumps")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Plot settings JSON (canvas size, margin, colors, seed).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for fill colors; overrides the settings file.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Canvas width in pixels; overrides the settings file.
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Canvas height in pixels; overrides the settings file.
    #[arg(long, global = true)]
    height: Option<u32>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Display a dump (the default when no subcommand is given).
    Show(InputArgs),
    /// Write a dump to a PNG or SVG file.
    Export(ExportArgs),
    /// Print the parsed records as JSON.
    Records(InputArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Rectangle dump to read.
    #[arg(default_value = floorplot::DEFAULT_INPUT)]
    path: PathBuf,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Rectangle dump to read.
    #[arg(default_value = floorplot::DEFAULT_INPUT)]
    path: PathBuf,

    /// Output file.
    #[arg(long)]
    out: PathBuf,

    /// Output format; inferred from the `--out` extension when omitted.
    #[arg(long, value_enum)]
    format: Option<ExportFormat>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Png,
    Svg,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let settings = load_settings(&cli.global)?;
    match cli.cmd {
        None => cmd_show(Path::new(floorplot::DEFAULT_INPUT), settings),
        Some(Command::Show(args)) => cmd_show(&args.path, settings),
        Some(Command::Export(args)) => cmd_export(args, settings),
        Some(Command::Records(args)) => cmd_records(&args.path),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn load_settings(args: &GlobalArgs) -> anyhow::Result<floorplot::PlotSettings> {
    let mut settings = match &args.config {
        Some(path) => floorplot::PlotSettings::from_path(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => floorplot::PlotSettings::default(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if let Some(w) = args.width {
        settings.width = w;
    }
    if let Some(h) = args.height {
        settings.height = h;
    }
    settings.validate().context("invalid plot settings")?;
    Ok(settings)
}

fn render_into(
    path: &Path,
    sink: &mut dyn floorplot::RenderSink,
    settings: &floorplot::PlotSettings,
) -> anyhow::Result<floorplot::RenderSummary> {
    let mut colors = floorplot::RandomPalette::from_seed_opt(settings.seed);
    floorplot::render(path, sink, &mut colors)
        .with_context(|| format!("render '{}'", path.display()))
}

#[cfg(feature = "window")]
fn cmd_show(path: &Path, settings: floorplot::PlotSettings) -> anyhow::Result<()> {
    let mut sink = floorplot::WindowSink::new(settings.clone());
    render_into(path, &mut sink, &settings)?;
    Ok(())
}

#[cfg(not(feature = "window"))]
fn cmd_show(path: &Path, settings: floorplot::PlotSettings) -> anyhow::Result<()> {
    // Headless build: present by writing a PNG next to the input.
    let out = show_output_path(path);
    tracing::info!(
        out = %out.display(),
        "built without the `window` feature; writing png instead of opening a window"
    );
    let mut sink = floorplot::RasterSink::new(settings.clone()).with_png_output(&out);
    render_into(path, &mut sink, &settings)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

/// `<input>.png` next to the input, or `<stem>.plot.png` when the input itself is a `.png`.
#[cfg(not(feature = "window"))]
fn show_output_path(path: &Path) -> PathBuf {
    let is_png = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if !is_png {
        return path.with_extension("png");
    }
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    path.with_file_name(format!("{stem}.plot.png"))
}

fn cmd_export(args: ExportArgs, settings: floorplot::PlotSettings) -> anyhow::Result<()> {
    let format = match args.format {
        Some(f) => f,
        None => infer_format(&args.out)?,
    };

    let summary = match format {
        ExportFormat::Png => {
            let mut sink = floorplot::RasterSink::new(settings.clone()).with_png_output(&args.out);
            render_into(&args.path, &mut sink, &settings)?
        }
        ExportFormat::Svg => {
            let mut sink = floorplot::SvgSink::new(settings.clone(), &args.out);
            render_into(&args.path, &mut sink, &settings)?
        }
    };

    eprintln!(
        "wrote {} ({} rectangles)",
        args.out.display(),
        summary.rectangles
    );
    Ok(())
}

fn infer_format(out: &Path) -> anyhow::Result<ExportFormat> {
    let ext = out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => Ok(ExportFormat::Png),
        Some("svg") => Ok(ExportFormat::Svg),
        _ => anyhow::bail!(
            "cannot infer output format from '{}'; pass --format png|svg",
            out.display()
        ),
    }
}

fn cmd_records(path: &Path) -> anyhow::Result<()> {
    let records = floorplot::read_records(path)
        .with_context(|| format!("read records '{}'", path.display()))?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &records).context("write records JSON")?;
    writeln!(out).context("write records JSON")?;
    Ok(())
}
