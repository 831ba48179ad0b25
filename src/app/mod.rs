// PlacePrep - app/mod.rs
//
// Application layer: the analysis history store.
// Dependencies: core layer, platform storage trait.

pub mod history;
