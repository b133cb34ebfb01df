//! # Rules Core
//!
//! The rules reference crate - closed enumerations, pure derivation math, and
//! the class/level progression tables every character sheet is rendered from.
//! This crate is read-only lookup data and functions; it performs no I/O and
//! holds no mutable state.

pub mod catalog;
pub mod mechanics;
pub mod progression;

pub use catalog::*;
pub use mechanics::*;
pub use progression::*;
