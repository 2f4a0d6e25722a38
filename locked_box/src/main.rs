use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use locked_box::solver::{solve_and_open, solve_and_open_with_rng};
use rand::{rngs::StdRng, SeedableRng};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of columns
    pub x_size: usize,
    /// Number of rows
    pub y_size: usize,
    /// Seed for a reproducible shuffle
    #[arg(short, long)]
    pub seed: Option<u64>,
}

fn run_open_box(args: &Args) -> Result<bool> {
    let still_locked = match args.seed {
        Some(seed) => {
            solve_and_open_with_rng(args.y_size, args.x_size, &mut StdRng::seed_from_u64(seed))
        }
        None => solve_and_open(args.y_size, args.x_size),
    };
    still_locked.with_context(|| format!("opening {}x{} box", args.y_size, args.x_size))
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    match run_open_box(&args) {
        Ok(true) => {
            println!("BOX: LOCKED!");
            process::exit(1)
        }
        Ok(false) => println!("BOX: OPENED!"),
        Err(err) => {
            eprintln!("could not open box: {err:?}");
            process::exit(2)
        }
    }
}
