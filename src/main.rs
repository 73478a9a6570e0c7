use clap::Parser;
use log::{info, warn};
use parley::Screen;
use parley::core::chat::ChatId;
use parley::core::config::{self, CliOverrides};
use parley::core::seed::SeedData;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "parley", about = "Terminal messenger with an admin dashboard")]
struct Args {
    /// Screen to open on start
    #[arg(short, long, value_enum)]
    screen: Option<Screen>,

    /// Seed dataset (.toml or .json) replacing the built-in mock data
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Chat to open on start
    #[arg(short, long)]
    chat: Option<ChatId>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logger is not up yet, so a broken config is reported after init
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::ParleyConfig::default(), Some(e)),
    };

    let cli = CliOverrides {
        screen: args.screen,
        seed_file: args.seed,
        open_chat: args.chat,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger - writes to parley.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = LevelFilter::from_str(&resolved.log_level).unwrap_or(LevelFilter::Debug);

    if let Ok(log_file) = File::create("parley.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    if let Some(e) = config_error {
        warn!("{}, falling back to defaults", e);
    }

    info!(
        "Parley starting up on {:?} screen (seed: {})",
        resolved.start_screen,
        resolved
            .seed_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string())
    );

    let seed = match &resolved.seed_file {
        Some(path) => SeedData::load(path)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?,
        None => SeedData::builtin(),
    };

    parley::tui::run(resolved, seed)
}
