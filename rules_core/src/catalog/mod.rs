//! Static enumerations and the race/class feature catalogs.
//!
//! Record fields holding race, background, and alignment stay free-form
//! strings; these lists are what a picker offers, not what the model
//! enforces.

mod features;

pub use features::*;

use crate::mechanics::Class;

pub const RACES: &[&str] = &[
    "Dwarf",
    "Elf",
    "Halfling",
    "Human",
    "Dragonborn",
    "Gnome",
    "Half-Elf",
    "Half-Orc",
    "Tiefling",
];

pub const BACKGROUNDS: &[&str] = &[
    "Acolyte",
    "Charlatan",
    "Criminal",
    "Entertainer",
    "Folk Hero",
    "Guild Artisan",
    "Hermit",
    "Noble",
    "Outlander",
    "Sage",
    "Sailor",
    "Soldier",
    "Urchin",
];

pub const ALIGNMENTS: &[&str] = &[
    "Lawful Good",
    "Neutral Good",
    "Chaotic Good",
    "Lawful Neutral",
    "True Neutral",
    "Chaotic Neutral",
    "Lawful Evil",
    "Neutral Evil",
    "Chaotic Evil",
];

pub const FIGHTING_STYLES: &[&str] = &[
    "Archery",
    "Defense",
    "Dueling",
    "Great Weapon Fighting",
    "Protection",
    "Two-Weapon Fighting",
];

/// All classes a picker should offer, in display order.
pub const CLASSES: [Class; 12] = Class::ALL;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(RACES.len(), 9);
        assert_eq!(BACKGROUNDS.len(), 13);
        assert_eq!(ALIGNMENTS.len(), 9);
        assert_eq!(CLASSES.len(), 12);
    }
}
