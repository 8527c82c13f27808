use std::time::Instant;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use scrabble_engine_r::cli::Args;
use scrabble_engine_r::{MatchedWords, Result, ScrabbleConfig, Scrabbler};

fn run(config: &ScrabbleConfig) -> Result<MatchedWords> {
    config.validate()?;
    let scrabbler = Scrabbler::load(config)?;
    scrabbler.find_matching_words()
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config();
    let start = Instant::now();

    match run(&config) {
        Ok(matches) => {
            info!("number of matches: {}", matches.len());
            if config.log_matches {
                for word in matches.into_sorted_vec() {
                    info!("match: {}", word);
                }
            }
            info!("{} run finished in {:?}", config.mode, start.elapsed());
        }
        Err(e) => {
            error!("error while matching words: {}", e);
            std::process::exit(1);
        }
    }
}
