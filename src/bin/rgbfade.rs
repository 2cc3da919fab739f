use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Create a fading animation between two images by fading each RGB channel separately.
#[derive(Parser, Debug)]
#[command(name = "rgbfade", version)]
struct Cli {
    /// Image to fade from.
    #[arg(value_name = "FROM")]
    from: PathBuf,

    /// Image to fade to (same dimensions as FROM).
    #[arg(value_name = "TO")]
    to: PathBuf,

    /// Output MP4 path [default: <FROM name>_2_<TO name>.mp4].
    #[arg(long)]
    out: Option<PathBuf>,

    /// Length of the channel-by-channel transition in seconds (at least 1).
    #[arg(long, default_value_t = 4.0)]
    fade_secs: f64,

    /// How long the source and target images are held before and after the transition.
    #[arg(long, default_value_t = 3.0)]
    static_secs: f64,

    /// Overwrite output if it already exists.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    overwrite: bool,

    /// Print the per-channel step plan as JSON and exit without rendering.
    #[arg(long, default_value_t = false)]
    dump_plan: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.from == cli.to {
        anyhow::bail!("you cannot fade between the same file");
    }

    let opts = rgbfade::FaderOpts {
        fade_secs: cli.fade_secs,
        static_secs: cli.static_secs,
    };
    let fader = rgbfade::Fader::open(&cli.from, &cli.to, opts)
        .with_context(|| format!("load '{}' and '{}'", cli.from.display(), cli.to.display()))?;

    if cli.dump_plan {
        let plan = serde_json::json!({
            "opts": fader.opts(),
            "fps": rgbfade::FPS,
            "plan": fader.plan(),
            "total": fader.plan().total(),
        });
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let out = match cli.out {
        Some(out) => out,
        None => rgbfade::default_output_name(&cli.from, &cli.to)?,
    };
    let stats = rgbfade::render_to_mp4(&fader, &out, cli.overwrite)?;

    tracing::info!(frames = stats.total_frames, "wrote {}", out.display());
    Ok(())
}
