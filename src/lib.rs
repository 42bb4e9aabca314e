#![warn(missing_docs)]
//! Arena map construction for the drones bot game

pub mod checkpoints;
pub mod constants;
pub mod generator;
pub mod grid;
pub mod maze;
pub mod solver;
