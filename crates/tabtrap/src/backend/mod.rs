//! Adapters translating host toolkit input into the crate's key model.

pub mod crossterm;
