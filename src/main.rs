use anyhow::Result;
use chrono::Datelike;
use clap::Parser;

mod config;
mod models;
mod playlist;
mod session;
mod shell;

use crate::config::load_config;
use crate::playlist::{PlaylistDataset, PlaylistResolver, YearRange};

#[derive(Parser)]
#[command(name = "top-singles-finder")]
#[command(about = "Find the Top US Singles playlist for your high school years")]
#[command(version)]
struct Args {
    /// Path to the playlist dataset CSV (name,link columns); overrides PLAYLIST_DATASET
    #[arg(short = 'd', long = "dataset")]
    dataset: Option<String>,

    /// Look up a single range (e.g. 2000 or 1995-2010) and exit instead of starting a session
    #[arg(short = 'r', long = "range")]
    range: Option<YearRange>,

    /// Print the lookup result as JSON (with --range)
    #[arg(long = "json", requires = "range")]
    json: bool,

    /// Quiet mode - only log warnings and errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut clog = colog::default_builder();
    clog.filter(
        None,
        if args.quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        },
    );
    clog.init();

    let config = load_config()?;
    let dataset_path = config.dataset_path(args.dataset);

    // Missing dataset is fatal; there is nothing to look up without it
    let dataset = PlaylistDataset::load_from_file(&dataset_path)?;
    log::info!("Loaded {} playlists from {}", dataset.len(), dataset_path);
    if dataset.is_empty() {
        log::warn!("Playlist dataset '{}' has no rows", dataset_path);
    }

    let resolver = PlaylistResolver::new(dataset);

    if let Some(range) = args.range {
        let resolution = resolver.resolve(range);
        if !resolution.is_found() {
            log::info!("No playlist covers exactly {}", range);
        }
        if args.json {
            println!("{}", serde_json::to_string_pretty(&resolution)?);
        } else {
            println!(
                "{}",
                shell::render_resolution(crate::session::DEFAULT_NAME, &resolution)
            );
        }
        return Ok(());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::run(
        &resolver,
        stdin.lock(),
        stdout.lock(),
        chrono::Local::now().year(),
    )
}
