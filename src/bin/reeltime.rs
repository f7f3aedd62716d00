use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reeltime", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a movie script into a timeline JSON.
    Build(BuildArgs),
    /// Print what is on screen and audible at one instant.
    Probe(ProbeArgs),
    /// Print the timeline fingerprint.
    Fingerprint(FingerprintArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Input movie script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the timeline.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct ProbeArgs {
    /// Input movie script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Time in seconds.
    #[arg(long)]
    at: f64,
}

#[derive(Parser, Debug)]
struct FingerprintArgs {
    /// Input movie script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Probe(args) => cmd_probe(args),
        Command::Fingerprint(args) => cmd_fingerprint(args),
    }
}

fn compile_script(path: &Path) -> anyhow::Result<reeltime::CompiledTimeline> {
    let script = reeltime::MovieScript::from_path(path)
        .with_context(|| format!("load movie script '{}'", path.display()))?;
    Ok(script.to_movie().build())
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let timeline = compile_script(&args.in_path)?;
    for d in &timeline.diagnostics {
        eprintln!("warning: {d}");
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&timeline)
    } else {
        serde_json::to_string(&timeline)
    }
    .context("serialize timeline")?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write timeline '{}'", out.display()))?;
            eprintln!(
                "wrote {} ({} frames @ {} fps)",
                out.display(),
                timeline.duration_in_frames,
                timeline.fps.as_f64()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_fingerprint(args: FingerprintArgs) -> anyhow::Result<()> {
    let timeline = compile_script(&args.in_path)?;
    println!("{:016x}", timeline.fingerprint()?);
    Ok(())
}

fn cmd_probe(args: ProbeArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.at >= 0.0, "--at must be non-negative");
    let timeline = compile_script(&args.in_path)?;
    let t = args.at;
    let frame = timeline.fps.secs_to_frames_floor(t);
    let width = f64::from(timeline.width);

    println!(
        "t={t:.3}s frame={frame}/{} canvas={}x{}",
        timeline.duration_in_frames, timeline.width, timeline.height
    );

    let cards = [("opening", &timeline.opening), ("ending", &timeline.ending)];
    for (label, card) in cards {
        let Some(card) = card else { continue };
        if t < card.start_time || t >= card.end_time() {
            continue;
        }
        println!(
            "{label} [{:.3}, {:.3}) image={}",
            card.start_time,
            card.end_time(),
            card.image
        );
        print_telops(&card.telops, t - card.start_time, &timeline, width);
    }

    for scene in &timeline.scenes {
        if t < scene.start_time || t >= scene.end_time() {
            continue;
        }
        let media = scene.media.as_ref().map_or("<blank>", |m| m.path());
        println!(
            "scene {} [{:.3}, {:.3}) media={media}",
            scene.key,
            scene.start_time,
            scene.end_time()
        );
        let canvas = reeltime::Canvas {
            width: timeline.width,
            height: timeline.height,
        };
        let geo = reeltime::resolve_display(&scene.display_mode, canvas);
        let r = geo.media_rect;
        println!(
            "  display {} media_rect=({:.0},{:.0})-({:.0},{:.0}) letterbox={}",
            scene.display_mode, r.x0, r.y0, r.x1, r.y1, geo.letterbox
        );
        let local = t - scene.start_time;
        print_telops(&scene.telops, local, &timeline, width);
        for wipe in &scene.wipes {
            let end = wipe.start_time + wipe.effective_duration(scene.duration);
            if local >= wipe.start_time && local < end {
                println!("  wipe {} at {:?}", wipe.file, wipe.position);
            }
        }
    }

    for audio in &timeline.audios {
        let env = reeltime::AudioEnvelope::for_track(audio, &timeline);
        let gain = env.gain_at(t);
        if gain > 0.0 {
            println!("  audio {} gain={gain:.3}", audio.file);
        }
    }

    if let Some(subs) = &timeline.subtitles {
        let root = args.in_path.parent().unwrap_or_else(|| Path::new("."));
        let loader = reeltime::FsCaptionLoader::new(root);
        let captions = subs.resolve_captions(&loader);
        if let Some(cap) = reeltime::subtitle::caption_at(&captions, t * 1000.0) {
            let view = subs.options.present(&cap.text);
            let opacity = reeltime::subtitle::caption_opacity(cap, frame as f64, timeline.fps);
            println!("  caption \"{}\" opacity={opacity:.3}", view.text);
        }
    }

    Ok(())
}

fn print_telops(
    telops: &[reeltime::TelopData],
    local: f64,
    timeline: &reeltime::CompiledTimeline,
    width: f64,
) {
    let local_frame = reeltime::FrameIndex(timeline.fps.secs_to_frames_floor(local));
    for (i, telop) in telops.iter().enumerate() {
        if !telop.is_visible_at(local) {
            continue;
        }
        let offset = reeltime::stack_offset(i, telops, local_frame, timeline.fps, width);
        println!("  telop \"{}\" stack_offset={offset:.1}", telop.text);
    }
}
