/*
lib.rs

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

//! Deterministic world generator for a graph-based treasure hunt.
//!
//! A [`World`] places a treasure, two kinds of hazards, and optional puzzle stations on the nodes
//! of a [`Topology`], such that every node without a hazard can reach the treasure and the
//! puzzle stations. The same seed always produces the same world and the same puzzles.

pub mod error;
pub mod generator;
pub mod saver;
pub mod world;

pub use error::{RelocationError, TopologyError, WorldError};
pub use generator::placement::{Placement, Role, RoleSizes};
pub use generator::puzzles::{PuzzleKind, PuzzleRecord};
pub use generator::topology::{NodeId, Topology};
pub use world::{World, WorldConfig, WorldSnapshot};
