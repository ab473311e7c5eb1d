/*
edges.rs

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

//! Edges between nodes of the puzzle map, with a status used to cut the hazard nodes out of the
//! graph.

use log::debug;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

use super::topology::{NodeId, Topology};

/// Status of the edges in the puzzle map.
///
/// - an `Open` edge can be walked through.
/// - a `Blocked` edge touches a hazard node; similar to removing the edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EdgeStatus {
    Open,
    Blocked,
}

/// Represent the edges of the puzzle map.
#[derive(Debug, Clone)]
pub struct Edges {
    /// For each node, the [`std::collections::BTreeMap`] stores the list of the adjacent nodes.
    ///
    /// With each adjacent node, the [`std::collections::BTreeMap`] stores the status of the edge.
    edges: BTreeMap<NodeId, Vec<(NodeId, EdgeStatus)>>,
}

impl Edges {
    /// Create the edge object with all the edges of the topology open.
    pub fn new(topology: &Topology) -> Self {
        Self {
            edges: topology
                .nodes()
                .map(|node| {
                    (
                        node,
                        topology
                            .neighbors(node)
                            .iter()
                            .map(|n| (*n, EdgeStatus::Open))
                            .collect(),
                    )
                })
                .collect(),
        }
    }

    /// Set the status of the edge between the given nodes.
    pub fn set_status(&mut self, node1: NodeId, node2: NodeId, status: EdgeStatus) {
        if let Some(a) = self.edges.get_mut(&node1) {
            for t in a.iter_mut().filter(|t| t.0 == node2) {
                t.1 = status;
            }
        }

        if let Some(a) = self.edges.get_mut(&node2) {
            for t in a.iter_mut().filter(|t| t.0 == node1) {
                t.1 = status;
            }
        }
    }

    /// Block all the edges of the given node, which removes it from the walkable graph.
    pub fn block_node(&mut self, node: NodeId) {
        let neighbors: Vec<NodeId> = match self.edges.get(&node) {
            Some(a) => a.iter().map(|t| t.0).collect(),
            None => return,
        };
        for n in neighbors {
            self.set_status(node, n, EdgeStatus::Blocked);
        }
    }

    /// For the given node, return all the adjacent nodes reachable through an open edge.
    pub fn get_open_nodes(&self, node: NodeId) -> Vec<NodeId> {
        match self.edges.get(&node) {
            Some(a) => a
                .iter()
                .filter(|t| t.1 == EdgeStatus::Open)
                .map(|t| t.0)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Breadth-first walk through the open edges. Return all the nodes reachable from `start`,
    /// including `start` itself. An unknown start node reaches nothing.
    pub fn reachable_from(&self, start: NodeId) -> BTreeSet<NodeId> {
        let mut visited: BTreeSet<NodeId> = BTreeSet::new();
        if !self.edges.contains_key(&start) {
            return visited;
        }

        let mut queue: VecDeque<NodeId> = VecDeque::from([start]);
        visited.insert(start);
        while let Some(node) = queue.pop_front() {
            for n in self.get_open_nodes(node) {
                if visited.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        visited
    }

    /// Print the open edges.
    pub fn debug(&self) {
        let mut s: String = String::new();

        for (n1, e) in &self.edges {
            s.clear();
            s.push_str(&format!("{n1:>3} -->"));
            for (n2, c) in e {
                match c {
                    EdgeStatus::Open => s.push_str(&format!(" {n2}")),
                    EdgeStatus::Blocked => s.push_str(&format!(" ({n2})")),
                }
            }
            debug!("{s}");
        }
    }
}
