// PlacePrep - platform/mod.rs
//
// Platform abstraction layer: directories, config.toml and persistent storage.
// Dependencies: standard library, directories, toml.
// Must NOT depend on: core, app.

pub mod config;
pub mod fs;
pub mod storage;
