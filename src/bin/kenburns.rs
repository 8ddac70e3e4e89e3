use std::{
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use kenburns::{
    Clock as _, Fps, ImageKey, ImageLoader, LoadTicket, ManualClock, ManualDriver, MediaTime,
    SlideshowConfig, SlideshowController, SlideshowEvent,
};

#[derive(Parser, Debug)]
#[command(name = "kenburns", version)]
struct Cli {
    /// Log engine state transitions to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a slideshow headlessly and print frame snapshots and events as JSON lines.
    Simulate(SimulateArgs),
    /// Validate a configuration file.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Image identifiers, comma separated.
    #[arg(long, value_delimiter = ',', required = true)]
    images: Vec<String>,

    /// Configuration JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Simulated wall time in seconds.
    #[arg(long, default_value_t = 40.0)]
    seconds: f64,

    /// View width.
    #[arg(long, default_value_t = 1920.0)]
    width: f64,

    /// View height.
    #[arg(long, default_value_t = 1080.0)]
    height: f64,

    /// Override the configuration's random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Print a frame snapshot every N frames (0 prints events only).
    #[arg(long, default_value_t = 30)]
    every: u64,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Configuration JSON.
    #[arg(long)]
    config: PathBuf,
}

/// Resolves every request on the next frame; the identifier doubles as the image.
#[derive(Default)]
struct ImmediateLoader {
    pending: Vec<(LoadTicket, ImageKey)>,
}

impl ImageLoader for ImmediateLoader {
    type Image = ImageKey;

    fn request(&mut self, ticket: LoadTicket, key: &ImageKey) {
        self.pending.push((ticket, key.clone()));
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn read_config(path: &Path) -> anyhow::Result<SlideshowConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    let cfg = SlideshowConfig::from_json_str(&s)
        .with_context(|| format!("parse config '{}'", path.display()))?;
    Ok(cfg)
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.config)?;
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    eprintln!("{} ok", args.config.display());
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => read_config(path)?,
        None => SlideshowConfig::default(),
    };
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if !args.seconds.is_finite() || args.seconds < 0.0 {
        anyhow::bail!("--seconds must be finite and >= 0");
    }
    let fps = Fps::new(args.fps, 1)?;

    let mut show = SlideshowController::new(cfg, ImmediateLoader::default(), ManualDriver::default())?;
    show.set_bounds(kenburns::Size::new(args.width, args.height));
    show.set_image_queue(args.images.iter().map(ImageKey::new).collect());

    let clock = ManualClock::new(MediaTime::ZERO);
    show.start_animating(clock.now());

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let total_frames = fps.secs_to_frames_floor(args.seconds);

    for frame in 0..=total_frames {
        let pending = std::mem::take(&mut show.loader_mut().pending);
        for (ticket, key) in pending {
            show.deliver(ticket, key);
        }

        let now = clock.now();
        let events = show.tick(now);

        if args.every > 0 && frame % args.every == 0 {
            let images: Vec<Option<&str>> = show
                .frame()
                .slots
                .iter()
                .map(|s| show.slot(s.slot).image().map(ImageKey::as_str))
                .collect();
            let line = serde_json::json!({
                "frame": frame,
                "time": now.secs(),
                "snapshot": show.frame(),
                "images": images,
            });
            writeln!(out, "{line}")?;
        }

        let finished = events.contains(&SlideshowEvent::Finished);
        for event in events {
            let line = serde_json::json!({ "frame": frame, "time": now.secs(), "event": event });
            writeln!(out, "{line}")?;
        }
        if finished || !show.driver().is_running() {
            break;
        }

        clock.step_frame(fps);
    }

    out.flush().context("flush stdout")?;
    Ok(())
}
