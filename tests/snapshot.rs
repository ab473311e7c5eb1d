use std::fs;
use std::sync::Arc;

use puzzleworld::generator::words::DEFAULT_WORDS;
use puzzleworld::saver::world::SaverWorld;
use puzzleworld::{RoleSizes, Topology, World, WorldConfig};

#[test]
fn saved_world_is_restored() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let saver = SaverWorld::new(dir.path().join("world.json"));
    let topology = Arc::new(Topology::dodecahedron());
    let config = WorldConfig {
        sizes: RoleSizes::with_stations(2),
        ..WorldConfig::default()
    };
    let mut world = World::build(Arc::clone(&topology), 4242, &config, DEFAULT_WORDS)
        .expect("the dodecahedron has valid placements");
    let _ = world.next_word_puzzle();
    let _ = world.next_number_puzzle();

    saver
        .save_snapshot(&world.snapshot())
        .expect("the file can be written");
    let snapshot = saver
        .get_snapshot()
        .expect("the file can be read")
        .expect("the file exists");
    let mut restored = World::from_snapshot(topology, snapshot).expect("snapshot is valid");

    assert_eq!(restored.snapshot(), world.snapshot());
    // The cursors survive the round trip
    assert_eq!(restored.next_word_puzzle(), world.next_word_puzzle());
    assert_eq!(restored.next_number_puzzle(), world.next_number_puzzle());
}

#[test]
fn missing_file_is_not_an_error() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let saver = SaverWorld::new(dir.path().join("absent.json"));

    assert!(saver.get_snapshot().expect("missing file is fine").is_none());
}

#[test]
fn corrupted_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let path = dir.path().join("world.json");
    fs::write(&path, "{ not json").expect("the file can be written");

    assert!(SaverWorld::new(path).get_snapshot().is_err());
}
