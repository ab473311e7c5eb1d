/*
validator.rs

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

//! Check that a placement leaves every objective reachable.
//!
//! The hazard nodes are cut out of the map by blocking their edges. Then, from every remaining
//! (safe) node, a breadth-first walk must reach the treasure and all the puzzle stations.

use log::{Level, log_enabled};
use std::collections::BTreeSet;
use std::fmt;

use super::edges::Edges;
use super::placement::{Placement, RoleSizes};
use super::topology::{NodeId, Topology};

/// Reason why a placement is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// The treasure is not a node of the map.
    TreasureMissing,

    /// Fewer puzzle stations than required.
    TooFewStations { expected: usize, found: usize },

    /// The treasure or a puzzle station sits on a hazard.
    ObjectiveOnHazard(NodeId),

    /// A safe node cannot reach some objectives without going through a hazard.
    Unreachable { from: NodeId, missing: Vec<NodeId> },
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::TreasureMissing => write!(f, "treasure is not placed on the map"),
            ValidationFailure::TooFewStations { expected, found } => {
                write!(f, "{found} puzzle station(s) instead of {expected}")
            }
            ValidationFailure::ObjectiveOnHazard(node) => {
                write!(f, "objective at node {node} sits on a hazard")
            }
            ValidationFailure::Unreachable { from, missing } => write!(
                f,
                "node {from} cannot reach all objectives (missing {missing:?})"
            ),
        }
    }
}

/// Validator object.
pub struct Validator<'a> {
    /// Puzzle map.
    topology: &'a Topology,

    /// Required role sizes.
    sizes: RoleSizes,
}

impl<'a> Validator<'a> {
    /// Create the object.
    pub fn new(topology: &'a Topology, sizes: RoleSizes) -> Self {
        Self { topology, sizes }
    }

    /// Check the placement.
    ///
    /// # Errors
    ///
    /// The method returns the first reason found for rejecting the placement.
    pub fn check(&self, placement: &Placement) -> Result<(), ValidationFailure> {
        if !self.topology.contains(placement.treasure) {
            return Err(ValidationFailure::TreasureMissing);
        }
        if placement.puzzle_stations.len() < self.sizes.puzzle_stations {
            return Err(ValidationFailure::TooFewStations {
                expected: self.sizes.puzzle_stations,
                found: placement.puzzle_stations.len(),
            });
        }

        let hazards: BTreeSet<NodeId> = placement.hazards();
        let objectives: BTreeSet<NodeId> = placement.objectives();
        if let Some(node) = objectives.iter().find(|o| hazards.contains(o)) {
            return Err(ValidationFailure::ObjectiveOnHazard(*node));
        }

        // Induced subgraph on the safe nodes
        let mut edges: Edges = Edges::new(self.topology);
        for h in &hazards {
            edges.block_node(*h);
        }
        if log_enabled!(Level::Debug) {
            edges.debug();
        }

        for start in self.topology.nodes().filter(|n| !hazards.contains(n)) {
            let reachable: BTreeSet<NodeId> = edges.reachable_from(start);
            let missing: Vec<NodeId> = objectives.difference(&reachable).copied().collect();
            if !missing.is_empty() {
                return Err(ValidationFailure::Unreachable {
                    from: start,
                    missing,
                });
            }
        }
        Ok(())
    }
}
