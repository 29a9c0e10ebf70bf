//! The `wa-map-maker` crate provides the `wamap` command-line interface
//! for turning images into Worms Armageddon colour maps.
//!
//! Besides the binary entry point it exposes the pieces the desktop front-end
//! reuses: logger setup and discovery of the game's `SavedLevels` folder.

#![doc = include_str!("../README.md")]
pub mod cli;
pub mod command;
pub mod locate;
pub mod logger;
