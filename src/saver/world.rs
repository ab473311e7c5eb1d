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

//! Save and restore a generated world.
//!
//! The saved object is a serialization of the [`WorldSnapshot`] object in JSON format by using
//! [`serde`]. The topology is not saved: it is provided again when the world is restored, and the
//! restored placement is validated against it.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::world::WorldSnapshot;

/// Object to save and restore a world.
pub struct SaverWorld {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverWorld {
    /// Create a [`SaverWorld`] object for the given save file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("World file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the [`WorldSnapshot`] object from the save file.
    ///
    /// Return the [`WorldSnapshot`] object or None if the save file does not exist.
    pub fn get_snapshot(&self) -> Result<Option<WorldSnapshot>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let snapshot: WorldSnapshot = serde_json::from_reader(reader)?;
        Ok(Some(snapshot))
    }

    /// Save the provided [`WorldSnapshot`] object.
    pub fn save_snapshot(&self, snapshot: &WorldSnapshot) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, snapshot)?;
        writer.flush()?;
        Ok(())
    }
}
