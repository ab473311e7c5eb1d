/*
generator.rs

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

//! Place the roles on the map and prepare the puzzles.
//!
//! The map is a [`topology::Topology`] object: a fixed graph where every node has three
//! neighbors. The reference map is the dodecahedron of the classic "Hunt the Wumpus" game.
//!
//! To create a world, a placement and a puzzle sequence must be generated:
//!
//! * A placement is represented by a [`placement::Placement`] object. It assigns the treasure,
//!   the two kinds of hazards, and the optional puzzle stations to distinct nodes.
//!   You create this object by creating a [`builder::WorldBuilder`] object and by using its
//!   [`builder::WorldBuilder::build`] method.
//!   The builder draws a placement from a [`rng::WorldRng`] seeded with the requested seed, and
//!   checks it with a [`validator::Validator`]: every node without a hazard must be able to reach
//!   the treasure and the puzzle stations without going through a hazard.
//!   If the placement is rejected, then the next seed is tried.
//!
//! * A list of word and number puzzles represented by a [`puzzles::PuzzleSequence`] object.
//!   The puzzles are drawn from the random stream left by the successful placement, so they are
//!   reproducible from the seed.

pub mod builder;
pub mod edges;
pub mod placement;
pub mod puzzles;
pub mod rng;
pub mod topology;
pub mod validator;
pub mod words;
