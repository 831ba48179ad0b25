// PlacePrep - lib.rs
//
// Library entry point, exposing the analyzer, history store and platform
// layers for the CLI binary and for integration testing.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
