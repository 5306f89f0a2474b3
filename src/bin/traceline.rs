use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "traceline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the interpolated marker position at a given progress.
    Sample(SampleArgs),
    /// Print the CSS offset-path animation snippet for a scene.
    Export(ExportArgs),
    /// Replay the animation driver offline at a fixed frame cadence.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Animation cursor in vertex-index units (0 ..= len-1).
    #[arg(long)]
    progress: f64,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame cadence of the simulated display, in frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

/// On-disk scene document: drawn points plus optional settings.
///
/// Points are `[x, y]` pairs. This format belongs to the CLI; the engine
/// itself holds no persistence surface.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct Scene {
    points: Vec<[f64; 2]>,
    #[serde(default)]
    config: traceline::Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Export(args) => cmd_export(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_scene(path: &Path) -> anyhow::Result<(traceline::Polyline, traceline::Config)> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let r = BufReader::new(f);
    let scene: Scene = serde_json::from_reader(r).with_context(|| "parse scene JSON")?;
    scene.config.validate()?;

    let points = scene
        .points
        .iter()
        .map(|&[x, y]| traceline::Point::new(x, y))
        .collect();
    Ok((traceline::Polyline::from_points(points), scene.config))
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let (path, config) = read_scene(&args.in_path)?;
    let p = traceline::sample_position(&path, args.progress, &config);
    println!("{} {}", p.x, p.y);
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let (path, config) = read_scene(&args.in_path)?;
    println!("{}", traceline::css_snippet(&path, &config));
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "fps must be > 0");

    let (path, config) = read_scene(&args.in_path)?;
    let mut driver = traceline::Driver::new();
    if !driver.play(path.len()) {
        eprintln!("scene has fewer than 2 points; nothing to animate");
        return Ok(());
    }

    let frame_ms = 1000.0 / f64::from(args.fps);
    let duration_ms = traceline::Driver::total_duration_ms(path.len(), config.speed);
    // One full run; a looping config would tick forever, so stop at the
    // first restart.
    let frames = (duration_ms / frame_ms).ceil() as u64 + 1;

    for frame in 0..=frames {
        let timestamp = frame as f64 * frame_ms;
        let progress = driver.tick(timestamp, path.len(), &config);
        let p = traceline::sample_position(&path, progress, &config);
        println!("{timestamp:.3} {progress:.6} {} {}", p.x, p.y);
        if driver.state() == traceline::PlaybackState::Idle || timestamp >= duration_ms {
            break;
        }
    }
    Ok(())
}
