/*
builder.rs

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

//! Retry loop that turns a seed into a validated placement.
//!
//! Each attempt is a pure function of its seed: a fresh random stream is created from the
//! candidate seed, a placement is drawn, and the placement is validated. When the placement is
//! rejected, the next seed (`seed + 1`) is tried, up to the attempt cap.

use log::debug;
use std::time::Instant;

use super::placement::{Placement, RoleSizes};
use super::rng::WorldRng;
use super::topology::Topology;
use super::validator::Validator;
use crate::error::WorldError;

/// Default number of seeds to try before giving up.
pub const DEFAULT_ATTEMPT_CAP: usize = 1000;

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// The validated placement.
    pub placement: Placement,

    /// Seed that produced the placement. It might differ from the requested seed.
    pub effective_seed: u64,

    /// Number of seeds tried, including the successful one.
    pub attempts: usize,

    /// Random stream in the state left by the placement draws of the successful attempt.
    pub rng: WorldRng,
}

/// [`WorldBuilder`] object.
pub struct WorldBuilder<'a> {
    /// Puzzle map.
    topology: &'a Topology,

    /// Number of nodes to draw for each role.
    sizes: RoleSizes,

    /// Maximum number of seeds to try.
    attempt_cap: usize,

    /// Number of attempts of the last build.
    pub iteration: usize,

    /// Duration in seconds of the last build.
    pub duration: f32,
}

impl<'a> WorldBuilder<'a> {
    /// Create the object.
    pub fn new(topology: &'a Topology, sizes: RoleSizes, attempt_cap: usize) -> Self {
        Self {
            topology,
            sizes,
            attempt_cap,
            iteration: 0,
            duration: 0.0,
        }
    }

    /// Draw and validate a placement for the given seed.
    ///
    /// Return [`None`] if the placement is rejected by the validator.
    ///
    /// # Errors
    ///
    /// The method returns [`WorldError::InsufficientNodes`] if the role sizes do not fit in the
    /// topology.
    pub fn attempt(&self, seed: u64) -> Result<Option<(Placement, WorldRng)>, WorldError> {
        let mut rng: WorldRng = WorldRng::new(seed);
        let placement: Placement = Placement::generate(self.topology, &mut rng, &self.sizes)?;

        match Validator::new(self.topology, self.sizes).check(&placement) {
            Ok(()) => Ok(Some((placement, rng))),
            Err(reason) => {
                debug!("Invalid world (seed {seed}): {reason}");
                Ok(None)
            }
        }
    }

    /// Try the seeds `seed`, `seed + 1`, ... until one produces a valid placement.
    ///
    /// # Errors
    ///
    /// The method returns [`WorldError::WorldGenerationExhausted`] if no seed succeeds within the
    /// attempt cap, or [`WorldError::InsufficientNodes`] if the role sizes do not fit in the
    /// topology. Neither error goes away by retrying.
    pub fn build(&mut self, seed: u64) -> Result<BuildOutcome, WorldError> {
        let start: Instant = Instant::now();
        self.iteration = 0;
        self.duration = 0.0;

        let mut candidate: u64 = seed;
        while self.iteration < self.attempt_cap {
            self.iteration += 1;
            let res: Option<(Placement, WorldRng)> = self.attempt(candidate)?;
            self.duration = start.elapsed().as_secs_f32();

            if let Some((placement, rng)) = res {
                if candidate == seed {
                    debug!("Valid world generated with seed {seed}");
                } else {
                    debug!("Seed {seed} invalid; used seed {candidate}");
                }
                debug!(
                    "Iterations = {}  Duration = {}",
                    self.iteration, self.duration
                );
                return Ok(BuildOutcome {
                    placement,
                    effective_seed: candidate,
                    attempts: self.iteration,
                    rng,
                });
            }

            // The seeds never wrap around
            candidate = match candidate.checked_add(1) {
                Some(s) => s,
                None => break,
            };
        }

        Err(WorldError::WorldGenerationExhausted {
            seed,
            attempts: self.iteration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::placement::Role;

    #[test]
    fn reference_seed_builds_within_the_cap() {
        let topology = Topology::dodecahedron();
        let mut builder = WorldBuilder::new(&topology, RoleSizes::default(), DEFAULT_ATTEMPT_CAP);

        let outcome = builder.build(1234).expect("the dodecahedron has valid placements");

        assert!(outcome.effective_seed >= 1234);
        assert!(outcome.effective_seed < 1234 + DEFAULT_ATTEMPT_CAP as u64);
        assert_eq!(outcome.attempts as u64, outcome.effective_seed - 1234 + 1);
        assert_eq!(builder.iteration, outcome.attempts);
        assert_eq!(outcome.rng.seed(), outcome.effective_seed);
        assert!(outcome.placement.matches(&RoleSizes::default()));
    }

    #[test]
    fn earlier_seeds_of_the_run_are_rejected() {
        let topology = Topology::dodecahedron();
        let sizes = RoleSizes::with_stations(2);
        let mut builder = WorldBuilder::new(&topology, sizes, DEFAULT_ATTEMPT_CAP);

        let outcome = builder.build(500).expect("the dodecahedron has valid placements");

        for seed in 500..outcome.effective_seed {
            assert_eq!(builder.attempt(seed), Ok(None));
        }
        assert!(matches!(builder.attempt(outcome.effective_seed), Ok(Some(_))));
    }

    #[test]
    fn attempt_matches_the_build() {
        let topology = Topology::dodecahedron();
        let mut builder = WorldBuilder::new(&topology, RoleSizes::default(), DEFAULT_ATTEMPT_CAP);

        let outcome = builder.build(77).expect("the dodecahedron has valid placements");
        let (placement, rng) = builder
            .attempt(outcome.effective_seed)
            .expect("sizes fit the map")
            .expect("the effective seed is valid");

        assert_eq!(placement, outcome.placement);
        assert_eq!(rng, outcome.rng);
    }

    #[test]
    fn zero_cap_is_exhausted() {
        let topology = Topology::dodecahedron();
        let mut builder = WorldBuilder::new(&topology, RoleSizes::default(), 0);

        assert_eq!(
            builder.build(1).map(|o| o.effective_seed),
            Err(WorldError::WorldGenerationExhausted {
                seed: 1,
                attempts: 0
            })
        );
    }

    #[test]
    fn last_seed_does_not_wrap() {
        let topology = Topology::dodecahedron();
        let mut builder = WorldBuilder::new(&topology, RoleSizes::default(), 10);

        match builder.build(u64::MAX) {
            Ok(outcome) => assert_eq!(outcome.effective_seed, u64::MAX),
            Err(e) => assert_eq!(
                e,
                WorldError::WorldGenerationExhausted {
                    seed: u64::MAX,
                    attempts: 1
                }
            ),
        }
    }

    #[test]
    fn oversized_roles_fail_without_retrying() {
        let topology = Topology::dodecahedron();
        let sizes = RoleSizes {
            hazard_a: 2,
            hazard_b: 2,
            puzzle_stations: 16,
        };
        let mut builder = WorldBuilder::new(&topology, sizes, DEFAULT_ATTEMPT_CAP);

        assert_eq!(
            builder.build(9).map(|o| o.effective_seed),
            Err(WorldError::InsufficientNodes {
                role: Role::PuzzleStation,
                requested: 16,
                available: 15,
            })
        );
        assert_eq!(builder.iteration, 1);
    }
}
