//! # Roster Core
//!
//! Character records and the operations that maintain them: normalization of
//! stored data, the roster merge engine (save, patch, delete, capped list
//! additions), and the storage boundary traits with local implementations.
//! All derivation math and reference data comes from [`rules_core`].

pub mod character;
pub mod roster;
pub mod storage;

pub use character::*;
pub use roster::*;
pub use storage::*;
