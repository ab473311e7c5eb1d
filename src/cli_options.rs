/*
cli_options.rs

Copyright 2026 PuzzleWorld contributors

This file is part of PuzzleWorld.

PuzzleWorld is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

PuzzleWorld is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
PuzzleWorld. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! # Examples
//!
//! Generate the world for seed 1234 and show the first three puzzles of each kind:
//!
//! ```text
//! $ puzzleworld --seed 1234 --puzzles 3
//! === PuzzleWorld State ===
//! Seed:            1234
//! Effective seed:  1234
//! ...
//! ```
//!
//! Generate a world with two puzzle stations, move the treasure to node 18, and save the result:
//!
//! ```text
//! $ puzzleworld -s 1234 --stations 2 --relocate 18 --save world.json
//! ```
//!
//! Restore a saved world:
//!
//! ```text
//! $ puzzleworld --load world.json
//! ```

use clap::Parser;
use log::{LevelFilter, debug};
use rand::Rng;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use puzzleworld::generator::builder::DEFAULT_ATTEMPT_CAP;
use puzzleworld::generator::puzzles::DEFAULT_NUMBER_PUZZLES;
use puzzleworld::generator::words::DEFAULT_WORDS;
use puzzleworld::saver::world::SaverWorld;
use puzzleworld::{NodeId, RoleSizes, Topology, World, WorldConfig};

/// Generate PuzzleWorld maps and puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Seed for the world generation (random if not provided)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of type A hazards
    #[arg(long, default_value_t = 2)]
    hazard_a: usize,

    /// Number of type B hazards
    #[arg(long, default_value_t = 2)]
    hazard_b: usize,

    /// Number of puzzle stations
    #[arg(long, default_value_t = 0)]
    stations: usize,

    /// Maximum number of seeds to try
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPT_CAP)]
    attempts: usize,

    /// Number of number puzzles to prepare
    #[arg(short, long, default_value_t = DEFAULT_NUMBER_PUZZLES)]
    numbers: usize,

    /// File with the words for the word puzzles, one word per line
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Number of word and number puzzles to print
    #[arg(short, long, default_value_t = 0)]
    puzzles: usize,

    /// Move the treasure to the given node
    #[arg(short, long)]
    relocate: Option<NodeId>,

    /// Save the world in the given JSON file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Restore the world from the given JSON file instead of generating one
    #[arg(
        short,
        long,
        conflicts_with_all = [
            "seed", "words", "hazard_a", "hazard_b", "stations", "attempts", "numbers"
        ]
    )]
    load: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options.
pub fn run() -> ExitCode {
    let args: Args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &Args) -> Result<(), Box<dyn Error>> {
    let topology: Arc<Topology> = Arc::new(Topology::dodecahedron());

    let mut world: World = match &args.load {
        Some(path) => load_world(topology, path)?,
        None => {
            let words: Vec<String> = match &args.words {
                Some(path) => load_words(path)?,
                None => DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            };
            let seed: u64 = match args.seed {
                Some(s) => s,
                None => rand::rng().random(),
            };
            let config: WorldConfig = WorldConfig {
                sizes: RoleSizes {
                    hazard_a: args.hazard_a,
                    hazard_b: args.hazard_b,
                    puzzle_stations: args.stations,
                },
                attempt_cap: args.attempts,
                number_puzzles: args.numbers,
            };
            debug!("Generating world: seed = {seed}  config = {config:?}");
            World::build(topology, seed, &config, &words)?
        }
    };

    if let Some(node) = args.relocate {
        world.relocate_treasure(node)?;
    }

    println!("{world}");
    println!("Unoccupied nodes: {:?}", world.unoccupied_nodes());

    for i in 1..=args.puzzles {
        if let Some(p) = world.next_word_puzzle() {
            println!("Word puzzle {i}: {}  (answer: {})", p.prompt, p.answer);
        }
    }
    for i in 1..=args.puzzles {
        if let Some(p) = world.next_number_puzzle() {
            println!("Number puzzle {i}: {}  (answer: {})", p.prompt, p.answer);
        }
    }

    if let Some(path) = &args.save {
        SaverWorld::new(path.clone()).save_snapshot(&world.snapshot())?;
        println!("World saved in {}", path.display());
    }
    Ok(())
}

/// Read the words from a file, one word per line. Blank lines are ignored.
fn load_words(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let content: String = fs::read_to_string(path)?;
    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect();
    debug!("{} word(s) read from {}", words.len(), path.display());
    Ok(words)
}

/// Restore a world saved with `--save`.
fn load_world(topology: Arc<Topology>, path: &Path) -> Result<World, Box<dyn Error>> {
    match SaverWorld::new(path.to_path_buf()).get_snapshot()? {
        Some(snapshot) => Ok(World::from_snapshot(topology, snapshot)?),
        None => Err(format!("{} does not exist", path.display()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn load_conflicts_with_generation_options() {
        for option in [
            "--seed=7",
            "--words=words.txt",
            "--hazard-a=3",
            "--hazard-b=3",
            "--stations=2",
            "--attempts=10",
            "--numbers=5",
        ] {
            let result = Args::try_parse_from(["puzzleworld", "--load=world.json", option]);
            assert_eq!(
                result.err().map(|e| e.kind()),
                Some(ErrorKind::ArgumentConflict),
                "{option} accepted with --load"
            );
        }
    }

    #[test]
    fn load_accepts_the_other_options() {
        let args = Args::try_parse_from([
            "puzzleworld",
            "--load=world.json",
            "--relocate=5",
            "--puzzles=3",
            "--save=out.json",
        ])
        .expect("options apply to a loaded world");

        assert_eq!(args.load, Some(PathBuf::from("world.json")));
        assert_eq!(args.relocate, Some(5));
    }
}
