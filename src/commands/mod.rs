//! Command implementations for the lotterycn CLI

pub mod history;
pub mod random;
