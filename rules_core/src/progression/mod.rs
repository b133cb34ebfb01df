//! Class/level progression tables: spell slots, cantrips, and known spells.
//!
//! All lookups degrade rather than fail: an out-of-range level or a class
//! with no progression resolves to "no capability" (zeros, empty slots, or
//! [`SpellAllowance::None`]) so a sheet can always be rendered.

use crate::mechanics::Class;

/// Highest level the progression tables are defined for.
pub const MAX_LEVEL: u8 = 20;

/// Number of spell levels tracked in a slot array.
pub const SPELL_SLOT_LEVELS: usize = 9;

/// How many spells of each kind a class may have at a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellAllowance {
    /// No spells of this kind at all. Distinct from [`SpellAllowance::Unbounded`].
    None,
    /// A fixed count of known spells.
    Limited(u8),
    /// Prepares from the entire class list; no cap applies.
    Unbounded,
}

impl SpellAllowance {
    /// Whether a list currently holding `current_len` entries may accept
    /// another one.
    pub fn permits(&self, current_len: usize) -> bool {
        match self {
            SpellAllowance::None => false,
            SpellAllowance::Limited(count) => current_len < *count as usize,
            SpellAllowance::Unbounded => true,
        }
    }
}

/// Shared slot progression for Bard, Cleric, Druid, Sorcerer, and Wizard.
const FULL_CASTER_SLOTS: [[u8; SPELL_SLOT_LEVELS]; MAX_LEVEL as usize] = [
    [2, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 1, 0, 0, 0, 0, 0],
    [4, 3, 3, 2, 0, 0, 0, 0, 0],
    [4, 3, 3, 3, 1, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 1],
    [4, 3, 3, 3, 3, 1, 1, 1, 1],
    [4, 3, 3, 3, 3, 2, 1, 1, 1],
    [4, 3, 3, 3, 3, 2, 2, 1, 1],
];

/// Shared slot progression for Paladin and Ranger. Nothing at level 1.
const HALF_CASTER_SLOTS: [[u8; SPELL_SLOT_LEVELS]; MAX_LEVEL as usize] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [2, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 1, 0, 0, 0, 0, 0],
    [4, 3, 3, 1, 0, 0, 0, 0, 0],
    [4, 3, 3, 2, 0, 0, 0, 0, 0],
    [4, 3, 3, 2, 0, 0, 0, 0, 0],
    [4, 3, 3, 3, 1, 0, 0, 0, 0],
    [4, 3, 3, 3, 1, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 0, 0, 0, 0],
];

/// Warlock pact slots: few slots, all at the highest available level.
const PACT_SLOTS: [[u8; SPELL_SLOT_LEVELS]; MAX_LEVEL as usize] = [
    [1, 0, 0, 0, 0, 0, 0, 0, 0],
    [2, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 2, 0, 0, 0, 0, 0, 0, 0],
    [0, 2, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 2, 0, 0, 0, 0, 0, 0],
    [0, 0, 2, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 2, 0, 0, 0, 0, 0],
    [0, 0, 0, 2, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 2, 0, 0, 0, 0],
    [0, 0, 0, 0, 2, 0, 0, 0, 0],
    [0, 0, 0, 0, 3, 0, 0, 0, 0],
    [0, 0, 0, 0, 3, 0, 0, 0, 0],
    [0, 0, 0, 0, 3, 0, 0, 0, 0],
    [0, 0, 0, 0, 3, 0, 0, 0, 0],
    [0, 0, 0, 0, 3, 0, 0, 0, 0],
    [0, 0, 0, 0, 3, 0, 0, 0, 0],
    [0, 0, 0, 0, 4, 0, 0, 0, 0],
    [0, 0, 0, 0, 4, 0, 0, 0, 0],
    [0, 0, 0, 0, 4, 0, 0, 0, 0],
    [0, 0, 0, 0, 4, 0, 0, 0, 0],
];

const BARD_CANTRIPS: [u8; MAX_LEVEL as usize] =
    [2, 2, 2, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4];
const CLERIC_CANTRIPS: [u8; MAX_LEVEL as usize] =
    [3, 3, 3, 4, 4, 4, 4, 4, 4, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5];
const DRUID_CANTRIPS: [u8; MAX_LEVEL as usize] =
    [2, 2, 2, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4];
const SORCERER_CANTRIPS: [u8; MAX_LEVEL as usize] =
    [4, 4, 4, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6];
const WARLOCK_CANTRIPS: [u8; MAX_LEVEL as usize] =
    [2, 2, 2, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4];
const WIZARD_CANTRIPS: [u8; MAX_LEVEL as usize] =
    [3, 3, 3, 4, 4, 4, 4, 4, 4, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5];

const BARD_SPELLS_KNOWN: [u8; MAX_LEVEL as usize] =
    [4, 5, 6, 7, 8, 9, 10, 11, 12, 14, 15, 15, 16, 18, 19, 19, 20, 22, 22, 22];
const RANGER_SPELLS_KNOWN: [u8; MAX_LEVEL as usize] =
    [0, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11];
const SORCERER_SPELLS_KNOWN: [u8; MAX_LEVEL as usize] =
    [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 12, 13, 13, 14, 14, 15, 15, 15, 15];
const WARLOCK_SPELLS_KNOWN: [u8; MAX_LEVEL as usize] =
    [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 11, 11, 12, 12, 13, 13, 14, 14, 15, 15];

fn level_index(level: u8) -> Option<usize> {
    if (1..=MAX_LEVEL).contains(&level) {
        Some((level - 1) as usize)
    } else {
        None
    }
}

/// Spell slots available per spell level (1-9) for a class at a level.
///
/// Classes without a slot progression, and out-of-range levels, return nine
/// zeros.
pub fn spell_slots(class: Class, level: u8) -> [u8; SPELL_SLOT_LEVELS] {
    let Some(index) = level_index(level) else {
        return [0; SPELL_SLOT_LEVELS];
    };
    match class {
        Class::Bard | Class::Cleric | Class::Druid | Class::Sorcerer | Class::Wizard => {
            FULL_CASTER_SLOTS[index]
        }
        Class::Paladin | Class::Ranger => HALF_CASTER_SLOTS[index],
        Class::Warlock => PACT_SLOTS[index],
        Class::Barbarian | Class::Fighter | Class::Monk | Class::Rogue => [0; SPELL_SLOT_LEVELS],
    }
}

/// Number of cantrips a class knows at a level. 0 for classes without
/// cantrips and for out-of-range levels.
pub fn cantrips_known(class: Class, level: u8) -> u8 {
    let Some(index) = level_index(level) else {
        return 0;
    };
    match class {
        Class::Bard => BARD_CANTRIPS[index],
        Class::Cleric => CLERIC_CANTRIPS[index],
        Class::Druid => DRUID_CANTRIPS[index],
        Class::Sorcerer => SORCERER_CANTRIPS[index],
        Class::Warlock => WARLOCK_CANTRIPS[index],
        Class::Wizard => WIZARD_CANTRIPS[index],
        _ => 0,
    }
}

/// How many leveled spells a class may have known or prepared at a level.
///
/// Known-casters get a [`SpellAllowance::Limited`] count from their table.
/// Classes that prepare from their entire list (Cleric, Druid, Paladin,
/// Wizard) get [`SpellAllowance::Unbounded`] once their slot progression has
/// started. Everything else, including out-of-range levels, is
/// [`SpellAllowance::None`].
pub fn spells_known(class: Class, level: u8) -> SpellAllowance {
    let Some(index) = level_index(level) else {
        return SpellAllowance::None;
    };
    let limited = |count: u8| {
        if count == 0 {
            SpellAllowance::None
        } else {
            SpellAllowance::Limited(count)
        }
    };
    match class {
        Class::Bard => limited(BARD_SPELLS_KNOWN[index]),
        Class::Ranger => limited(RANGER_SPELLS_KNOWN[index]),
        Class::Sorcerer => limited(SORCERER_SPELLS_KNOWN[index]),
        Class::Warlock => limited(WARLOCK_SPELLS_KNOWN[index]),
        Class::Cleric | Class::Druid | Class::Paladin | Class::Wizard => {
            if spell_slots(class, level) == [0; SPELL_SLOT_LEVELS] {
                SpellAllowance::None
            } else {
                SpellAllowance::Unbounded
            }
        }
        Class::Barbarian | Class::Fighter | Class::Monk | Class::Rogue => SpellAllowance::None,
    }
}

/// Highest spell level a class may cast or prepare at a level, derived from
/// its slot progression. 0 when there is no progression.
pub fn max_spell_level(class: Class, level: u8) -> u8 {
    let slots = spell_slots(class, level);
    slots
        .iter()
        .rposition(|&count| count > 0)
        .map(|position| (position + 1) as u8)
        .unwrap_or(0)
}

/// Capacity of a Wizard's spellbook at a level: six starting spells plus two
/// per level gained. 0 for out-of-range levels.
pub fn spellbook_capacity(level: u8) -> u8 {
    if level_index(level).is_none() {
        return 0;
    }
    6 + 2 * (level - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_caster_slots_always_zero() {
        for level in 0..=25 {
            assert_eq!(spell_slots(Class::Barbarian, level), [0; 9]);
            assert_eq!(spell_slots(Class::Rogue, level), [0; 9]);
        }
    }

    #[test]
    fn test_half_caster_starts_at_level_two() {
        assert_eq!(spell_slots(Class::Paladin, 1), [0; 9]);
        assert_eq!(spell_slots(Class::Ranger, 1), [0; 9]);
        assert_eq!(spell_slots(Class::Paladin, 2), [2, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_full_caster_progression() {
        assert_eq!(spell_slots(Class::Cleric, 1), [2, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(spell_slots(Class::Cleric, 2), [3, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(spell_slots(Class::Wizard, 20), [4, 3, 3, 3, 3, 2, 2, 1, 1]);
    }

    #[test]
    fn test_out_of_range_levels_degrade() {
        assert_eq!(spell_slots(Class::Wizard, 0), [0; 9]);
        assert_eq!(spell_slots(Class::Wizard, 21), [0; 9]);
        assert_eq!(cantrips_known(Class::Wizard, 21), 0);
        assert_eq!(spells_known(Class::Bard, 0), SpellAllowance::None);
        assert_eq!(max_spell_level(Class::Wizard, 99), 0);
    }

    #[test]
    fn test_cantrips_known() {
        assert_eq!(cantrips_known(Class::Cleric, 1), 3);
        assert_eq!(cantrips_known(Class::Cleric, 4), 4);
        assert_eq!(cantrips_known(Class::Cleric, 10), 5);
        assert_eq!(cantrips_known(Class::Paladin, 10), 0);
        assert_eq!(cantrips_known(Class::Fighter, 10), 0);
    }

    #[test]
    fn test_spells_known_sentinels_are_distinct() {
        assert_eq!(spells_known(Class::Barbarian, 5), SpellAllowance::None);
        assert_eq!(spells_known(Class::Cleric, 5), SpellAllowance::Unbounded);
        assert_eq!(spells_known(Class::Sorcerer, 5), SpellAllowance::Limited(6));
        assert!(!SpellAllowance::None.permits(0));
        assert!(SpellAllowance::Unbounded.permits(1000));
    }

    #[test]
    fn test_spells_known_before_progression_starts() {
        // Paladins prepare from their list, but have nothing at level 1.
        assert_eq!(spells_known(Class::Paladin, 1), SpellAllowance::None);
        assert_eq!(spells_known(Class::Paladin, 2), SpellAllowance::Unbounded);
        assert_eq!(spells_known(Class::Ranger, 1), SpellAllowance::None);
        assert_eq!(spells_known(Class::Ranger, 2), SpellAllowance::Limited(2));
    }

    #[test]
    fn test_allowance_permits() {
        assert!(SpellAllowance::Limited(3).permits(2));
        assert!(!SpellAllowance::Limited(3).permits(3));
        assert!(!SpellAllowance::Limited(3).permits(4));
    }

    #[test]
    fn test_max_spell_level() {
        assert_eq!(max_spell_level(Class::Wizard, 1), 1);
        assert_eq!(max_spell_level(Class::Wizard, 5), 3);
        assert_eq!(max_spell_level(Class::Wizard, 17), 9);
        assert_eq!(max_spell_level(Class::Paladin, 1), 0);
        assert_eq!(max_spell_level(Class::Warlock, 9), 5);
        assert_eq!(max_spell_level(Class::Monk, 20), 0);
    }

    #[test]
    fn test_spellbook_capacity() {
        assert_eq!(spellbook_capacity(1), 6);
        assert_eq!(spellbook_capacity(2), 8);
        assert_eq!(spellbook_capacity(20), 44);
        assert_eq!(spellbook_capacity(0), 0);
        assert_eq!(spellbook_capacity(21), 0);
    }
}
