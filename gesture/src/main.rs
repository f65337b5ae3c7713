//! aero-gesture - replay hand landmark traces through the gesture engine
//!
//! Reads one s-expression landmark record per line and prints one
//! s-expression event per gesture change, click and knob update.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use aero_gesture::replay::Replay;
use aero_gesture::GestureConfig;

#[derive(Parser, Debug)]
#[command(name = "aero-gesture", about = "Hands-free gesture classification")]
struct Cli {
    /// Landmark trace to replay (default: stdin)
    #[arg(long)]
    trace: Option<PathBuf>,

    /// Config s-expression file, e.g. (:pinch-threshold 0.06)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame spacing (ms) for records without :t
    #[arg(long, default_value_t = 33.3)]
    frame_interval_ms: f64,

    /// Enable the swipe detector
    #[arg(long)]
    swipe: bool,

    /// Print the final engine status
    #[arg(long)]
    status: bool,

    /// Show version and exit
    #[arg(long)]
    version: bool,
}

fn load_config(cli: &Cli) -> anyhow::Result<GestureConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GestureConfig::from_sexp_str(&raw)
                .with_context(|| format!("loading config {}", path.display()))?
        }
        None => GestureConfig::default(),
    };
    if cli.swipe {
        config.swipe_enabled = true;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("aero-gesture {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aero_gesture=info".into()),
        )
        .init();

    info!("aero-gesture v{} starting", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    let mut replay = Replay::new(config, cli.frame_interval_ms);

    let reader: Box<dyn BufRead> = match &cli.trace {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening trace {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = replay.run(reader, &mut out)?;

    if cli.status {
        writeln!(out, "{}", replay.engine().status_sexp())?;
    }
    out.flush()?;

    info!(
        "Replayed {} frames ({} lines skipped)",
        summary.frames, summary.skipped
    );
    Ok(())
}
