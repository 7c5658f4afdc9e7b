use colored::*;
use common::config::Config;
use common::logger::init_logger;
use std::io::{self, BufReader};

use crate::menu::run_menu;
use crate::rng::SeedRng;

mod error;
mod menu;
mod rng;
mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let config = Config::init(".env");

    if let Err(e) = init_logger(&config.log_level, &config.log_file, config.log_to_stdout) {
        eprintln!("{} could not open log file {}: {}", "warning:".yellow(), config.log_file, e);
    }

    println!(
        "{} -> {} ({})",
        config.project_name.bold(),
        config.database_name,
        config.database_url
    );

    let store = match db::connect(&config.database_url, &config.database_name).await {
        Ok(store) => store,
        Err(e) => {
            log::error!("Failed to connect to {}: {}", config.database_url, e);
            eprintln!("{} {}", "error:".red(), e);
            std::process::exit(1);
        }
    };

    if let Some(seed) = config.seed {
        log::info!("Using fixed RNG seed {}", seed);
    }
    let mut rng = SeedRng::from_seed_option(config.seed);

    let mut input = BufReader::new(io::stdin());
    let mut out = io::stdout();
    if let Err(e) = run_menu(&mut input, &mut out, &store, &mut rng).await {
        eprintln!("{} {}", "error:".red(), e);
    }

    store.shutdown().await;
}
