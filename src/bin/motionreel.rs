use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "motionreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one frame of the brand video as a style-tree JSON document.
    Frame(FrameArgs),
    /// Print the timeline layout: segment, transition and overlay placements.
    Timeline,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Timeline => cmd_timeline(),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let video = motionreel::BrandVideo::new()?;
    let tree = video
        .render_frame(motionreel::FrameIndex(args.frame))
        .with_context(|| format!("render frame {}", args.frame))?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&tree)?
    } else {
        serde_json::to_string(&tree)?
    };

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&path, json)
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(json.as_bytes())?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn cmd_timeline() -> anyhow::Result<()> {
    let video = motionreel::BrandVideo::new()?;
    let tl = video.timeline();
    let fps = tl.fps().as_f64();

    println!("segments:");
    for seg in tl.segments() {
        println!(
            "  {:>5}..{:<5} {:<18} ({} frames, {:.2}s)",
            seg.start,
            seg.end(),
            seg.name,
            seg.duration,
            seg.duration as f64 / fps,
        );
    }

    println!("transitions:");
    for tr in tl.transitions() {
        println!(
            "  {:>5}..{:<5} {:?} ({} frames)",
            tr.start,
            tr.start + tr.duration,
            tr.kind,
            tr.duration,
        );
    }

    println!("overlays:");
    for ov in tl.overlays() {
        println!(
            "  {:>5}..{:<5} {} ({} frames)",
            ov.start,
            ov.start + ov.duration,
            ov.name,
            ov.duration,
        );
    }

    println!(
        "total: {} frames ({:.2}s at {:.0} fps)",
        tl.total_frames(),
        tl.total_frames() as f64 / fps,
        fps,
    );
    Ok(())
}
