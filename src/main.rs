use anyhow::Result;
use log::{error, info};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs;
use std::path::Path;

use logo_fetcher::{fetch_logo, BROWSER_USER_AGENT};

const LOGO_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/c/c2/Hanuman_carrying_Dronagiri_mountain.jpg/320px-Hanuman_carrying_Dronagiri_mountain.jpg";
const OUTPUT_DIR: &str = "public";
const OUTPUT_FILE: &str = "logo.jpg";

fn setup_logging() -> Result<()> {
    let log_dir = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("Failed to get base directories"))?
        .data_local_dir()
        .join("logo-fetcher")
        .join("logs");

    fs::create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!(
        "fetch_{}.log",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Debug)
        .build();

    WriteLogger::init(LevelFilter::Info, config, fs::File::create(log_file)?)?;

    Ok(())
}

fn main() {
    // The download must still run when no log file can be opened.
    if let Err(e) = setup_logging() {
        eprintln!("logging unavailable: {:#}", e);
    }

    info!("logo-fetcher starting");
    info!("Source URL: {}", LOGO_URL);

    match fetch_logo(LOGO_URL, BROWSER_USER_AGENT, Path::new(OUTPUT_DIR), OUTPUT_FILE) {
        Ok(path) => {
            info!("Logo saved to {:?}", path);
            println!("Download successful");
        }
        Err(e) => {
            // Failures are reported, not fatal: the process exits 0 either way.
            error!("Download failed: {:#}", e);
            println!("Error: {:#}", e);
        }
    }
}
