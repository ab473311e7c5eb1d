/*
placement.rs

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

//! Draw a random, non-overlapping assignment of roles to nodes.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum_macros::Display;

use super::rng::WorldRng;
use super::topology::{NodeId, Topology};
use crate::error::WorldError;

/// Category of special node.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
pub enum Role {
    #[strum(to_string = "treasure")]
    Treasure,
    #[strum(to_string = "hazard A")]
    HazardA,
    #[strum(to_string = "hazard B")]
    HazardB,
    #[strum(to_string = "puzzle station")]
    PuzzleStation,
}

/// Number of nodes to draw for each role. There is always exactly one treasure.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct RoleSizes {
    pub hazard_a: usize,
    pub hazard_b: usize,

    /// Zero for the plain treasure hunt.
    pub puzzle_stations: usize,
}

impl Default for RoleSizes {
    fn default() -> Self {
        Self {
            hazard_a: 2,
            hazard_b: 2,
            puzzle_stations: 0,
        }
    }
}

impl RoleSizes {
    /// Default hazard sizes with the given number of puzzle stations.
    pub fn with_stations(puzzle_stations: usize) -> Self {
        Self {
            puzzle_stations,
            ..Self::default()
        }
    }

    /// Number of nodes occupied by all the roles together.
    pub fn total(&self) -> usize {
        1 + self.hazard_a + self.hazard_b + self.puzzle_stations
    }
}

/// One concrete assignment of roles to nodes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub treasure: NodeId,
    pub hazard_a: Vec<NodeId>,
    pub hazard_b: Vec<NodeId>,
    pub puzzle_stations: Vec<NodeId>,
}

impl Placement {
    /// Draw a random placement.
    ///
    /// Each role is drawn from the nodes left over by the previous roles, in the order treasure,
    /// hazard A, hazard B, and puzzle stations, so the role sets never overlap.
    ///
    /// # Errors
    ///
    /// The method returns [`WorldError::InsufficientNodes`] when the topology does not have enough
    /// nodes left for a role. This is a configuration error: another seed would fail the same way.
    pub fn generate(
        topology: &Topology,
        rng: &mut WorldRng,
        sizes: &RoleSizes,
    ) -> Result<Self, WorldError> {
        let nodes: Vec<NodeId> = topology.node_list();
        let treasure: NodeId = rng.choose(&nodes).ok_or(WorldError::InsufficientNodes {
            role: Role::Treasure,
            requested: 1,
            available: 0,
        })?;

        let mut remaining: Vec<NodeId> = nodes.into_iter().filter(|n| *n != treasure).collect();
        let hazard_a: Vec<NodeId> = draw(rng, &mut remaining, Role::HazardA, sizes.hazard_a)?;
        let hazard_b: Vec<NodeId> = draw(rng, &mut remaining, Role::HazardB, sizes.hazard_b)?;
        let puzzle_stations: Vec<NodeId> = if sizes.puzzle_stations > 0 {
            draw(
                rng,
                &mut remaining,
                Role::PuzzleStation,
                sizes.puzzle_stations,
            )?
        } else {
            Vec::new()
        };

        debug!(
            "Placement: treasure = {treasure}  hazard A = {hazard_a:?}  hazard B = {hazard_b:?}  stations = {puzzle_stations:?}"
        );
        Ok(Self {
            treasure,
            hazard_a,
            hazard_b,
            puzzle_stations,
        })
    }

    /// Nodes holding a hazard of either kind.
    pub fn hazards(&self) -> BTreeSet<NodeId> {
        self.hazard_a
            .iter()
            .chain(self.hazard_b.iter())
            .copied()
            .collect()
    }

    /// Nodes that every safe node must be able to reach: the treasure and the puzzle stations.
    pub fn objectives(&self) -> BTreeSet<NodeId> {
        std::iter::once(self.treasure)
            .chain(self.puzzle_stations.iter().copied())
            .collect()
    }

    /// Nodes holding any role.
    pub fn occupied(&self) -> BTreeSet<NodeId> {
        let mut occupied: BTreeSet<NodeId> = self.hazards();
        occupied.extend(self.objectives());
        occupied
    }

    /// Whether the node holds any role.
    pub fn is_occupied(&self, node: NodeId) -> bool {
        self.role_of(node).is_some()
    }

    /// Whether the node holds the given role.
    pub fn has(&self, role: Role, node: NodeId) -> bool {
        match role {
            Role::Treasure => self.treasure == node,
            Role::HazardA => self.hazard_a.contains(&node),
            Role::HazardB => self.hazard_b.contains(&node),
            Role::PuzzleStation => self.puzzle_stations.contains(&node),
        }
    }

    /// Return the role held by the node, if any.
    pub fn role_of(&self, node: NodeId) -> Option<Role> {
        [
            Role::Treasure,
            Role::HazardA,
            Role::HazardB,
            Role::PuzzleStation,
        ]
        .into_iter()
        .find(|role| self.has(*role, node))
    }

    /// Whether the number of nodes for each role matches the sizes, and no node holds two roles.
    pub fn matches(&self, sizes: &RoleSizes) -> bool {
        self.hazard_a.len() == sizes.hazard_a
            && self.hazard_b.len() == sizes.hazard_b
            && self.puzzle_stations.len() == sizes.puzzle_stations
            && self.occupied().len() == sizes.total()
    }
}

/// Draw `count` nodes for the role and remove them from the remaining nodes.
fn draw(
    rng: &mut WorldRng,
    remaining: &mut Vec<NodeId>,
    role: Role,
    count: usize,
) -> Result<Vec<NodeId>, WorldError> {
    let picked: Vec<NodeId> = rng.sample(remaining.as_slice(), count).ok_or(
        WorldError::InsufficientNodes {
            role,
            requested: count,
            available: remaining.len(),
        },
    )?;
    remaining.retain(|n| !picked.contains(n));
    Ok(picked)
}
