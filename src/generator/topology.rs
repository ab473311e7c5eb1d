/*
topology.rs

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

//! Nodes of the puzzle map and the tunnels between them.

use log::debug;
use std::collections::{BTreeMap, BTreeSet};

use super::edges::Edges;
use crate::error::TopologyError;

/// Node identifier. Identifiers are fixed when the topology is built and never reused.
pub type NodeId = usize;

/// Number of neighbors of every node.
pub const DEGREE: usize = 3;

/// The classic "Hunt the Wumpus" cave: the vertexes and edges of a dodecahedron.
const DODECAHEDRON: [(NodeId, [NodeId; DEGREE]); 20] = [
    (1, [2, 5, 8]),
    (2, [1, 3, 10]),
    (3, [2, 4, 12]),
    (4, [3, 5, 14]),
    (5, [1, 4, 6]),
    (6, [5, 7, 15]),
    (7, [6, 8, 17]),
    (8, [1, 7, 9]),
    (9, [8, 10, 18]),
    (10, [2, 9, 11]),
    (11, [10, 12, 19]),
    (12, [3, 11, 13]),
    (13, [12, 14, 20]),
    (14, [4, 13, 15]),
    (15, [6, 14, 16]),
    (16, [15, 17, 20]),
    (17, [7, 16, 18]),
    (18, [9, 17, 19]),
    (19, [11, 18, 20]),
    (20, [13, 16, 19]),
];

/// Immutable adjacency of the puzzle map.
///
/// Every node has exactly [`DEGREE`] distinct neighbors, every edge is listed in both
/// directions, and the graph is connected. A [`Topology`] never changes once built, so it can be
/// shared between several worlds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    /// For each node, the ordered list of its neighbors.
    ///
    /// A [`BTreeMap`] keeps the nodes sorted, so that anything derived from the node order is
    /// reproducible.
    adjacency: BTreeMap<NodeId, Vec<NodeId>>,
}

impl Default for Topology {
    fn default() -> Self {
        Self::dodecahedron()
    }
}

impl Topology {
    /// Create the reference 20-node dodecahedron map.
    pub fn dodecahedron() -> Self {
        Self {
            adjacency: DODECAHEDRON
                .iter()
                .map(|(node, neighbors)| (*node, neighbors.to_vec()))
                .collect(),
        }
    }

    /// Create a [`Topology`] object from an adjacency list.
    ///
    /// # Errors
    ///
    /// The method returns an error if the list is empty, defines a node twice, if a node does not
    /// have exactly [`DEGREE`] distinct neighbors, lists itself or an unknown node, if an edge is
    /// only listed in one direction, or if the graph is not connected.
    pub fn from_adjacency<N>(
        adjacency: impl IntoIterator<Item = (NodeId, N)>,
    ) -> Result<Self, TopologyError>
    where
        N: AsRef<[NodeId]>,
    {
        let mut map: BTreeMap<NodeId, Vec<NodeId>> = BTreeMap::new();
        for (node, neighbors) in adjacency {
            if map.insert(node, neighbors.as_ref().to_vec()).is_some() {
                return Err(TopologyError::DuplicateNode(node));
            }
        }

        if map.is_empty() {
            return Err(TopologyError::Empty);
        }

        for (node, neighbors) in &map {
            if neighbors.len() != DEGREE {
                return Err(TopologyError::WrongDegree {
                    node: *node,
                    degree: neighbors.len(),
                    expected: DEGREE,
                });
            }
            let mut seen: BTreeSet<NodeId> = BTreeSet::new();
            for neighbor in neighbors {
                if neighbor == node {
                    return Err(TopologyError::SelfLoop(*node));
                }
                if !seen.insert(*neighbor) {
                    return Err(TopologyError::DuplicateNeighbor {
                        node: *node,
                        neighbor: *neighbor,
                    });
                }
            }
        }

        for (node, neighbors) in &map {
            for neighbor in neighbors {
                match map.get(neighbor) {
                    None => {
                        return Err(TopologyError::UnknownNeighbor {
                            node: *node,
                            neighbor: *neighbor,
                        });
                    }
                    Some(back) if !back.contains(node) => {
                        return Err(TopologyError::Asymmetric {
                            node: *node,
                            neighbor: *neighbor,
                        });
                    }
                    Some(_) => (),
                }
            }
        }

        let topology: Topology = Self { adjacency: map };

        // The map is not empty, so there is a first node
        let from: NodeId = topology.nodes().next().unwrap_or_default();
        let reachable: BTreeSet<NodeId> = Edges::new(&topology).reachable_from(from);
        if let Some(node) = topology.nodes().find(|n| !reachable.contains(n)) {
            return Err(TopologyError::Disconnected { node, from });
        }

        debug!("Topology with {} nodes", topology.len());
        Ok(topology)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the topology has no nodes. Always `false` for a validated topology.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether the node is part of the map.
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Iterate over the nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Return the nodes in ascending order.
    pub fn node_list(&self) -> Vec<NodeId> {
        self.nodes().collect()
    }

    /// Return the neighbors of the given node, or an empty slice for an unknown node.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        match self.adjacency.get(&node) {
            Some(n) => n,
            None => &[],
        }
    }

    /// Whether a tunnel connects the two nodes.
    pub fn are_adjacent(&self, node1: NodeId, node2: NodeId) -> bool {
        self.neighbors(node1).contains(&node2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dodecahedron_is_a_valid_topology() {
        let reference = Topology::dodecahedron();
        let rebuilt =
            Topology::from_adjacency(DODECAHEDRON).expect("dodecahedron must pass validation");

        assert_eq!(reference, rebuilt);
        assert_eq!(reference.len(), 20);
        assert_eq!(reference.node_list(), (1..=20).collect::<Vec<_>>());
        for node in reference.nodes() {
            assert_eq!(reference.neighbors(node).len(), DEGREE);
        }
    }

    #[test]
    fn neighbors_of_unknown_node_are_empty() {
        let topology = Topology::dodecahedron();

        assert_eq!(topology.neighbors(1), &[2, 5, 8]);
        assert!(topology.neighbors(21).is_empty());
        assert!(topology.are_adjacent(20, 13));
        assert!(!topology.are_adjacent(1, 20));
        assert!(!topology.contains(0));
    }

    #[test]
    fn complete_graph_on_four_nodes_is_accepted() {
        let topology =
            Topology::from_adjacency([(1, [2, 3, 4]), (2, [1, 3, 4]), (3, [1, 2, 4]), (4, [1, 2, 3])])
                .expect("K4 is 3-regular and connected");

        assert_eq!(topology.len(), 4);
    }

    #[test]
    fn malformed_adjacency_is_rejected() {
        let empty: [(NodeId, [NodeId; 3]); 0] = [];
        assert_eq!(Topology::from_adjacency(empty), Err(TopologyError::Empty));

        assert_eq!(
            Topology::from_adjacency([(1, vec![2, 3])]),
            Err(TopologyError::WrongDegree {
                node: 1,
                degree: 2,
                expected: DEGREE
            })
        );

        assert_eq!(
            Topology::from_adjacency([(1, [1, 2, 3])]),
            Err(TopologyError::SelfLoop(1))
        );

        assert_eq!(
            Topology::from_adjacency([(1, [2, 2, 3])]),
            Err(TopologyError::DuplicateNeighbor {
                node: 1,
                neighbor: 2
            })
        );

        assert_eq!(
            Topology::from_adjacency([(1, [2, 3, 4]), (2, [1, 3, 4]), (3, [1, 2, 4])]),
            Err(TopologyError::UnknownNeighbor {
                node: 1,
                neighbor: 4
            })
        );

        assert_eq!(
            Topology::from_adjacency([(1, [2, 3, 4]), (1, [2, 3, 4])]),
            Err(TopologyError::DuplicateNode(1))
        );
    }

    #[test]
    fn asymmetric_edge_is_rejected() {
        // 1 lists 5, but 5 does not list 1
        let result = Topology::from_adjacency([
            (1, [2, 3, 5]),
            (2, [1, 3, 4]),
            (3, [1, 2, 4]),
            (4, [2, 3, 5]),
            (5, [4, 6, 7]),
            (6, [5, 7, 4]),
            (7, [5, 6, 4]),
        ]);

        assert_eq!(
            result,
            Err(TopologyError::Asymmetric {
                node: 1,
                neighbor: 5
            })
        );
    }

    #[test]
    fn disconnected_graph_is_rejected() {
        // Two disjoint K4
        let result = Topology::from_adjacency([
            (1, [2, 3, 4]),
            (2, [1, 3, 4]),
            (3, [1, 2, 4]),
            (4, [1, 2, 3]),
            (5, [6, 7, 8]),
            (6, [5, 7, 8]),
            (7, [5, 6, 8]),
            (8, [5, 6, 7]),
        ]);

        assert_eq!(
            result,
            Err(TopologyError::Disconnected { node: 5, from: 1 })
        );
    }
}
