/*
world.rs

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

//! Manage a generated world.
//!
//! A [`World`] is built from a topology and a seed: the roles are placed with
//! [`WorldBuilder`], and the puzzles are prepared from the random stream left by the successful
//! placement. The puzzle sequence is therefore a function of the effective seed, the role sizes,
//! the word list, and the number of number puzzles.
//!
//! Once built, the placement only changes through [`World::relocate_treasure`].

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{RelocationError, WorldError};
use crate::generator::builder::{BuildOutcome, DEFAULT_ATTEMPT_CAP, WorldBuilder};
use crate::generator::placement::{Placement, Role, RoleSizes};
use crate::generator::puzzles::{DEFAULT_NUMBER_PUZZLES, PuzzleRecord, PuzzleSequence};
use crate::generator::topology::{NodeId, Topology};
use crate::generator::validator::Validator;

/// World generation parameters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WorldConfig {
    /// Number of nodes for each role.
    pub sizes: RoleSizes,

    /// Maximum number of seeds to try.
    pub attempt_cap: usize,

    /// Number of number puzzles to prepare.
    pub number_puzzles: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            sizes: RoleSizes::default(),
            attempt_cap: DEFAULT_ATTEMPT_CAP,
            number_puzzles: DEFAULT_NUMBER_PUZZLES,
        }
    }
}

/// Serializable state of a [`World`], without the topology.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorldSnapshot {
    /// Requested seed.
    pub seed: u64,

    /// Seed that produced the placement.
    pub effective_seed: u64,

    /// Number of seeds tried.
    pub attempts: usize,

    pub sizes: RoleSizes,
    pub placement: Placement,

    /// Prepared puzzles, with their cursors.
    pub puzzles: PuzzleSequence,
}

/// A validated world.
#[derive(Debug, Clone)]
pub struct World {
    /// Puzzle map, possibly shared with other worlds.
    topology: Arc<Topology>,

    /// Role assignment.
    placement: Placement,

    /// Number of nodes for each role.
    sizes: RoleSizes,

    /// Requested seed.
    seed: u64,

    /// Seed that produced the placement.
    effective_seed: u64,

    /// Number of seeds tried.
    attempts: usize,

    /// Prepared puzzles.
    puzzles: PuzzleSequence,
}

impl World {
    /// Generate a [`World`] object.
    ///
    /// # Errors
    ///
    /// The method returns [`WorldError::InsufficientNodes`] if the role sizes do not fit in the
    /// topology, and [`WorldError::WorldGenerationExhausted`] if no valid placement is found within
    /// the attempt cap.
    pub fn build<S: AsRef<str>>(
        topology: Arc<Topology>,
        seed: u64,
        config: &WorldConfig,
        words: &[S],
    ) -> Result<Self, WorldError> {
        let BuildOutcome {
            placement,
            effective_seed,
            attempts,
            mut rng,
        } = WorldBuilder::new(&topology, config.sizes, config.attempt_cap).build(seed)?;
        let puzzles: PuzzleSequence =
            PuzzleSequence::prepare(words, config.number_puzzles, &mut rng);

        info!(
            "World generated: seed = {seed}  effective seed = {effective_seed}  attempts = {attempts}"
        );
        Ok(Self {
            topology,
            placement,
            sizes: config.sizes,
            seed,
            effective_seed,
            attempts,
            puzzles,
        })
    }

    /// Rebuild a [`World`] object from a snapshot.
    ///
    /// # Errors
    ///
    /// The method returns [`WorldError::InvalidSnapshot`] if the seeds and attempt count disagree,
    /// if a puzzle prompt does not lead to its answer, or if the saved placement does not fit the
    /// topology or fails validation.
    pub fn from_snapshot(
        topology: Arc<Topology>,
        snapshot: WorldSnapshot,
    ) -> Result<Self, WorldError> {
        let WorldSnapshot {
            seed,
            effective_seed,
            attempts,
            sizes,
            placement,
            puzzles,
        } = snapshot;

        if effective_seed < seed {
            return Err(WorldError::InvalidSnapshot(format!(
                "effective seed {effective_seed} is lower than seed {seed}"
            )));
        }
        if effective_seed.checked_sub(seed).and_then(|d| d.checked_add(1)) != Some(attempts as u64)
        {
            return Err(WorldError::InvalidSnapshot(format!(
                "{attempts} attempt(s) do not lead from seed {seed} to seed {effective_seed}"
            )));
        }
        if !puzzles.is_consistent() {
            return Err(WorldError::InvalidSnapshot(
                "a puzzle prompt does not match its answer".to_string(),
            ));
        }
        if let Some(node) = placement.occupied().into_iter().find(|n| !topology.contains(*n)) {
            return Err(WorldError::InvalidSnapshot(format!(
                "node {node} is not part of the map"
            )));
        }
        if !placement.matches(&sizes) {
            return Err(WorldError::InvalidSnapshot(
                "the placement does not match the role sizes".to_string(),
            ));
        }
        Validator::new(&topology, sizes)
            .check(&placement)
            .map_err(|reason| WorldError::InvalidSnapshot(reason.to_string()))?;

        Ok(Self {
            topology,
            placement,
            sizes,
            seed,
            effective_seed,
            attempts,
            puzzles,
        })
    }

    /// Return the serializable state of the world.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            seed: self.seed,
            effective_seed: self.effective_seed,
            attempts: self.attempts,
            sizes: self.sizes,
            placement: self.placement.clone(),
            puzzles: self.puzzles.clone(),
        }
    }

    /// Puzzle map.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Role assignment.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn sizes(&self) -> RoleSizes {
        self.sizes
    }

    /// Requested seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Seed that produced the placement.
    pub fn effective_seed(&self) -> u64 {
        self.effective_seed
    }

    /// Number of seeds tried before finding a valid placement.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Nodes connected to the given node.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.topology.neighbors(node)
    }

    /// Whether the node holds the role.
    pub fn has(&self, role: Role, node: NodeId) -> bool {
        self.placement.has(role, node)
    }

    /// Whether a neighbor of the node holds the role.
    pub fn neighbor_has(&self, role: Role, node: NodeId) -> bool {
        self.neighbors(node)
            .iter()
            .any(|n| self.placement.has(role, *n))
    }

    pub fn treasure(&self) -> NodeId {
        self.placement.treasure
    }

    pub fn hazards_a(&self) -> &[NodeId] {
        &self.placement.hazard_a
    }

    pub fn hazards_b(&self) -> &[NodeId] {
        &self.placement.hazard_b
    }

    pub fn puzzle_stations(&self) -> &[NodeId] {
        &self.placement.puzzle_stations
    }

    /// Nodes without any role, in ascending order.
    pub fn unoccupied_nodes(&self) -> Vec<NodeId> {
        let occupied: BTreeSet<NodeId> = self.placement.occupied();
        self.topology
            .nodes()
            .filter(|n| !occupied.contains(n))
            .collect()
    }

    /// Move the treasure to an unoccupied node.
    ///
    /// Every safe node reaches the treasure, so all the safe nodes belong to the same connected
    /// part of the map. Any unoccupied node keeps the world valid.
    ///
    /// # Errors
    ///
    /// The method returns [`WorldError::InvalidRelocation`] if the node is not part of the map or
    /// already holds a role (including the treasure itself). The world is left unchanged.
    pub fn relocate_treasure(&mut self, node: NodeId) -> Result<(), WorldError> {
        if !self.topology.contains(node) {
            return Err(RelocationError::UnknownNode(node).into());
        }
        if self.placement.is_occupied(node) {
            return Err(RelocationError::Occupied(node).into());
        }

        info!(
            "Treasure moved from node {} to node {node}",
            self.placement.treasure
        );
        self.placement.treasure = node;
        Ok(())
    }

    /// Return the next word puzzle.
    pub fn next_word_puzzle(&mut self) -> Option<&PuzzleRecord> {
        self.puzzles.next_word_puzzle()
    }

    /// Return the next number puzzle.
    pub fn next_number_puzzle(&mut self) -> Option<&PuzzleRecord> {
        self.puzzles.next_number_puzzle()
    }

    /// Restart both puzzle sequences from their first puzzle.
    pub fn reset_puzzles(&mut self) {
        self.puzzles.reset();
    }

    /// Prepared puzzles.
    pub fn puzzles(&self) -> &PuzzleSequence {
        &self.puzzles
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== PuzzleWorld State ===")?;
        writeln!(f, "Seed:            {}", self.seed)?;
        writeln!(f, "Effective seed:  {}", self.effective_seed)?;
        writeln!(f, "Treasure:        {}", self.placement.treasure)?;
        writeln!(f, "Hazard A:        {:?}", self.placement.hazard_a)?;
        writeln!(f, "Hazard B:        {:?}", self.placement.hazard_b)?;
        writeln!(f, "Puzzle stations: {:?}", self.placement.puzzle_stations)?;
        writeln!(f, "Total nodes:     {}", self.topology.len())?;
        write!(f, "=========================")
    }
}
