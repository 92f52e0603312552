use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ytfetch_core::{Action, Orchestrator, ResolverConfig, YtDlpResolver, run_action};

#[derive(Parser)]
#[command(name = "ytfetch")]
#[command(about = "List the formats of a video and download one of them with yt-dlp")]
struct Cli {
    /// Print the available formats for a video URL
    #[arg(long, value_name = "URL")]
    get_formats: Option<String>,

    /// Download a video URL (requires --format-index)
    #[arg(long, value_name = "URL")]
    download: Option<String>,

    /// Format to download, as listed by --get-formats
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    format_index: Option<i64>,

    /// Directory to save downloads to. Defaults to ~/Downloads.
    #[arg(long, env = "YTFETCH_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// yt-dlp executable to run
    #[arg(long = "yt-dlp", env = "YTFETCH_YT_DLP", default_value = "yt-dlp")]
    yt_dlp: PathBuf,
}

impl Cli {
    fn action(&self) -> Action {
        Action::from_flags(
            self.get_formats.clone(),
            self.download.clone(),
            self.format_index,
        )
    }
}

/// Invalid input is reported on `out` and is not a failure of the process.
/// Anything else is returned so `main` exits non-zero with it on stderr.
fn finish(result: ytfetch_core::Result<()>, out: &mut impl Write) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_invalid_input() => {
            writeln!(out, "{} {}", style("Error:").red().bold(), e)?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // stdout carries the program output, logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let action = cli.action();

    let resolver = YtDlpResolver::new(ResolverConfig::with_binary(cli.yt_dlp));
    let orchestrator = match cli.output_dir {
        Some(output_dir) => Orchestrator::with_output_dir(resolver, output_dir),
        None => Orchestrator::new(resolver),
    };

    let mut stdout = std::io::stdout();
    let result = run_action(action, &orchestrator, &mut stdout).await;
    finish(result, &mut stdout)
}
