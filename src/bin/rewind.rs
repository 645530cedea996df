use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "rewind", version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a video description into a timeline JSON.
    Compose(ComposeArgs),
    /// Evaluate a single frame and print its frame graph JSON.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Input video description JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Compose config JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output timeline path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input video description JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Compose config JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn read_description(path: &Path) -> anyhow::Result<Option<rewind::VideoDescription>> {
    let f = File::open(path).with_context(|| format!("open description '{}'", path.display()))?;
    let desc = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse description JSON '{}'", path.display()))?;
    Ok(desc)
}

fn make_composer(config: Option<&Path>) -> anyhow::Result<rewind::Composer> {
    let config = match config {
        Some(path) => rewind::ComposeConfig::from_json_file(path)?,
        None => rewind::ComposeConfig::default(),
    };
    Ok(rewind::Composer::new(config, rewind::DefaultRenderer)?)
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let desc = read_description(&args.in_path)?;
    let composer = make_composer(args.config.as_deref())?;
    let timeline = composer.compose(desc.as_ref());

    for d in &timeline.diagnostics {
        eprintln!(
            "warning: section={} component={}: {}",
            d.section_id.as_deref().unwrap_or("-"),
            d.component_index
                .map(|i| i.to_string())
                .unwrap_or_else(|| "-".to_string()),
            d.message
        );
    }

    let json = serde_json::to_string_pretty(&timeline).context("serialize timeline")?;
    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json)
                .with_context(|| format!("write timeline '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("write timeline to stdout")?;
        }
    }

    eprintln!(
        "frames={} sections={} fingerprint={:016x}",
        timeline.duration.0,
        timeline.sections.len(),
        rewind::fingerprint_timeline(&timeline)
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let desc = read_description(&args.in_path)?;
    let composer = make_composer(args.config.as_deref())?;
    let timeline = composer.compose(desc.as_ref());

    let graph = timeline.eval_frame(rewind::FrameIndex(args.frame))?;
    let json = serde_json::to_string_pretty(&graph).context("serialize frame graph")?;
    println!("{json}");
    Ok(())
}
