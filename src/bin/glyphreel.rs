use std::{
    fs,
    io::Write as _,
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "glyphreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a single converted frame as text.
    Frame(FrameArgs),
    /// Convert a whole GIF and write the frame sequence as JSON.
    Convert(ConvertArgs),
    /// Loop the converted animation in the terminal.
    Play(PlayArgs),
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Input GIF path.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    index: usize,

    #[command(flatten)]
    render: RenderFlags,
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Input GIF path.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    #[command(flatten)]
    render: RenderFlags,
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Input GIF path.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of playback loops; 0 loops forever.
    #[arg(long, default_value_t = 3)]
    loops: u32,

    #[command(flatten)]
    render: RenderFlags,
}

#[derive(Args, Debug)]
struct RenderFlags {
    /// Output width in characters.
    #[arg(long, default_value_t = 100)]
    columns: u32,

    /// Output height in characters (derived from the aspect ratio if
    /// omitted).
    #[arg(long)]
    rows: Option<u32>,

    /// Brightness ramp preset.
    #[arg(long, value_enum, default_value_t = RampChoice::Classic)]
    ramp: RampChoice,

    /// Average a 3x3 source neighborhood per output cell.
    #[arg(long)]
    supersample: bool,

    /// Edge-strength blend factor in [0, 1].
    #[arg(long, default_value_t = 0.0)]
    edge_weight: f32,

    /// Gamma applied to brightness before quantization.
    #[arg(long, default_value_t = 1.0)]
    contrast: f32,

    /// Flip the ramp traversal for light terminal backgrounds.
    #[arg(long)]
    invert: bool,

    /// Floyd-Steinberg dither the source before sampling.
    #[arg(long)]
    dither: bool,

    /// Pick the ramp from first-frame brightness analysis.
    #[arg(long)]
    auto_style: bool,

    /// Flip inversion when the first frame has a light border.
    #[arg(long)]
    auto_invert: bool,

    /// Cap on converted frames (longer sources are sampled evenly).
    #[arg(long, default_value_t = glyphreel::DEFAULT_MAX_FRAMES)]
    max_frames: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RampChoice {
    Classic,
    Dense,
    Blocks,
    Detailed,
}

impl RenderFlags {
    fn to_options(&self) -> anyhow::Result<glyphreel::ConvertOptions> {
        let ramp = match self.ramp {
            RampChoice::Classic => glyphreel::Ramp::classic(),
            RampChoice::Dense => glyphreel::Ramp::dense(),
            RampChoice::Blocks => glyphreel::Ramp::blocks(),
            RampChoice::Detailed => glyphreel::Ramp::detailed(),
        };
        let render = glyphreel::RenderConfig {
            target_columns: self.columns,
            target_rows: self.rows,
            ramp,
            supersample: self.supersample,
            edge_weight: self.edge_weight,
            contrast_exponent: self.contrast,
            invert: self.invert,
            dither: self.dither,
        };
        render.validate()?;
        Ok(glyphreel::ConvertOptions {
            render,
            auto_style: self.auto_style,
            auto_invert: self.auto_invert,
            max_frames: self.max_frames,
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Convert(args) => cmd_convert(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn convert_file(path: &Path, flags: &RenderFlags) -> anyhow::Result<glyphreel::ConversionResult> {
    let bytes = fs::read(path).with_context(|| format!("read gif '{}'", path.display()))?;
    let options = flags.to_options()?;
    glyphreel::convert_gif(&bytes, &options)?
        .ok_or_else(|| anyhow::anyhow!("'{}' holds no animation frames", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let result = convert_file(&args.in_path, &args.render)?;
    let frame = result.frames.get(args.index).with_context(|| {
        format!(
            "frame index {} out of range ({} frames)",
            args.index,
            result.frames.len()
        )
    })?;
    println!("{frame}");
    Ok(())
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let result = convert_file(&args.in_path, &args.render)?;
    let json = serde_json::to_string_pretty(&result).context("serialize conversion result")?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            fs::write(out, json).with_context(|| format!("write json '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let result = convert_file(&args.in_path, &args.render)?;
    let delay = Duration::from_millis(result.frame_delay_ms.max(1.0) as u64);

    let mut stdout = std::io::stdout().lock();
    let mut remaining = args.loops;
    loop {
        for frame in &result.frames {
            // Clear the screen and home the cursor between frames.
            write!(stdout, "\x1b[2J\x1b[H{frame}")?;
            stdout.flush()?;
            thread::sleep(delay);
        }
        if args.loops != 0 {
            remaining -= 1;
            if remaining == 0 {
                break;
            }
        }
    }
    Ok(())
}
