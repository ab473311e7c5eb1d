/*
words.rs

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

//! Default word list for the word puzzles, used when no word file is provided.

pub const DEFAULT_WORDS: &[&str] = &[
    "lantern", "compass", "cavern", "tunnel", "torch", "rope", "ladder", "crystal", "goblet",
    "chest", "shovel", "beacon", "riddle", "puzzle", "scroll", "amulet", "crown", "dagger",
    "helmet", "shield", "anchor", "candle", "bridge", "marble", "quartz", "emerald", "sapphire",
    "garnet", "copper", "silver", "golden", "whisper", "shadow", "echo", "stalactite",
    "labyrinth", "passage", "chamber", "relic", "artifact",
];
