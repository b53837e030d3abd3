//! Core domain types for darkicon.

mod colour;

pub use colour::Colour;
