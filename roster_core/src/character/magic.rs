//! The spellcasting sub-record.

use serde::{Deserialize, Serialize};

use rules_core::{Ability, SPELL_SLOT_LEVELS};

/// A character's spellcasting state.
///
/// Stored data may arrive with any of these fields missing or the slot list
/// at the wrong length; [`crate::Character::normalize`] repairs the shape
/// before the record is displayed or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spellcasting {
    /// Governing ability; `None` for non-casters.
    #[serde(default)]
    pub ability: Option<Ability>,
    /// Informed save DC. User-editable; the derived value never silently
    /// overwrites a non-zero entry.
    #[serde(default)]
    pub save_dc: i32,
    /// Informed spell attack bonus, same override rules as `save_dc`.
    #[serde(default)]
    pub attack_bonus: i32,
    #[serde(default)]
    pub cantrips: Vec<String>,
    /// Known or prepared leveled spells.
    #[serde(default)]
    pub spells: Vec<String>,
    /// Spellbook contents; only meaningful for Wizards.
    #[serde(default)]
    pub spellbook: Vec<String>,
    /// Available slots for spell levels 1-9. Always exactly nine entries
    /// after normalization; always derived from the progression table.
    #[serde(default = "empty_slots")]
    pub slots: Vec<u8>,
}

fn empty_slots() -> Vec<u8> {
    vec![0; SPELL_SLOT_LEVELS]
}

impl Default for Spellcasting {
    fn default() -> Self {
        Self {
            ability: None,
            save_dc: 0,
            attack_bonus: 0,
            cantrips: Vec::new(),
            spells: Vec::new(),
            spellbook: Vec::new(),
            slots: empty_slots(),
        }
    }
}

/// Coerce a comma-separated free-text entry into a list of trimmed,
/// non-empty items.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
