/*
error.rs

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

//! Errors raised while building or mutating a world.
//!
//! Placement rejections found by the validator are not errors: they drive the retry loop in
//! [`crate::generator::builder`] and are only reported through the logs. See
//! [`crate::generator::validator::ValidationFailure`].

use thiserror::Error;

use crate::generator::placement::Role;
use crate::generator::topology::NodeId;

/// Type of errors for malformed topologies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// The adjacency list does not define any node.
    #[error("the topology does not define any node")]
    Empty,

    /// The same node is defined twice.
    #[error("node {0} is defined more than once")]
    DuplicateNode(NodeId),

    /// A node does not have the expected number of neighbors.
    #[error("node {node} has {degree} neighbors instead of {expected}")]
    WrongDegree {
        node: NodeId,
        degree: usize,
        expected: usize,
    },

    /// A node lists itself as a neighbor.
    #[error("node {0} lists itself as a neighbor")]
    SelfLoop(NodeId),

    /// A node lists the same neighbor twice.
    #[error("node {node} lists neighbor {neighbor} more than once")]
    DuplicateNeighbor { node: NodeId, neighbor: NodeId },

    /// A node lists a neighbor that is not defined.
    #[error("node {node} lists unknown neighbor {neighbor}")]
    UnknownNeighbor { node: NodeId, neighbor: NodeId },

    /// An edge is only listed in one direction.
    #[error("edge {node}-{neighbor} is not listed by node {neighbor}")]
    Asymmetric { node: NodeId, neighbor: NodeId },

    /// Some nodes cannot be reached from the others.
    #[error("node {node} cannot be reached from node {from}")]
    Disconnected { node: NodeId, from: NodeId },
}

/// Reason why the treasure cannot be moved to a node.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RelocationError {
    /// The node is not part of the map.
    #[error("node {0} is not part of the map")]
    UnknownNode(NodeId),

    /// The node already holds the treasure, a hazard, or a puzzle station.
    #[error("node {0} is already occupied")]
    Occupied(NodeId),
}

/// Type of errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The role sizes do not fit in the topology. This is a configuration error: retrying with
    /// another seed cannot fix it.
    #[error("cannot place {requested} {role} node(s): only {available} node(s) left")]
    InsufficientNodes {
        role: Role,
        requested: usize,
        available: usize,
    },

    /// No seed produced a valid placement before the attempt cap was reached.
    #[error("no valid placement found after {attempts} attempt(s) starting from seed {seed}")]
    WorldGenerationExhausted { seed: u64, attempts: usize },

    /// The treasure cannot be moved to the requested node.
    #[error("cannot move the treasure: {0}")]
    InvalidRelocation(#[from] RelocationError),

    /// A saved world does not describe a valid placement.
    #[error("invalid world snapshot: {0}")]
    InvalidSnapshot(String),

    /// The topology is malformed.
    #[error(transparent)]
    Topology(#[from] TopologyError),
}
