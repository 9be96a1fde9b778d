use clap::{Parser, ValueEnum};
use foodview::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "foodview", about = "Food detail and ordering screen")]
struct Args {
    /// Id of the food to show
    #[arg(short, long)]
    food_id: u64,

    /// Base URL of the food API (overrides config and FOODVIEW_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Log level written to foodview.log
    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to foodview.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("foodview.log") {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}, using defaults");
            log::warn!("Config error: {}", e);
            config::FoodviewConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.api_url.as_deref());

    log::info!(
        "foodview starting up: food_id={}, api={}",
        args.food_id,
        resolved.api_base_url
    );

    match foodview::tui::run(args.food_id, resolved)? {
        Some(route) => {
            log::info!("Navigating to {}", route.name());
            println!("Order placed. Continue at: {}", route.name());
        }
        None => log::info!("foodview exited without navigation"),
    }
    Ok(())
}
