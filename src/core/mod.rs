// PlacePrep - core/mod.rs
//
// Core business logic layer: analysis, scoring and export.
// Dependencies: serde, chrono, csv; no filesystem access.
// Must NOT depend on: platform or app.

pub mod analyzer;
pub mod catalog;
pub mod export;
pub mod model;
pub mod scoring;
