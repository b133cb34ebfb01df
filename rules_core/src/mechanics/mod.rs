//! Derivation math: ability modifiers, proficiency, and spellcasting bonuses.

use serde::{Deserialize, Serialize};

/// The six ability scores every derived roll is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Constitution => "Constitution",
            Ability::Intelligence => "Intelligence",
            Ability::Wisdom => "Wisdom",
            Ability::Charisma => "Charisma",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Ability::Strength => "str",
            Ability::Dexterity => "dex",
            Ability::Constitution => "con",
            Ability::Intelligence => "int",
            Ability::Wisdom => "wis",
            Ability::Charisma => "cha",
        }
    }

    /// Parse a long or abbreviated ability name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "str" | "strength" => Some(Ability::Strength),
            "dex" | "dexterity" => Some(Ability::Dexterity),
            "con" | "constitution" => Some(Ability::Constitution),
            "int" | "intelligence" => Some(Ability::Intelligence),
            "wis" | "wisdom" => Some(Ability::Wisdom),
            "cha" | "charisma" => Some(Ability::Charisma),
            _ => None,
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The eighteen skills, each permanently bound to one governing ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Acrobatics,
    AnimalHandling,
    Arcana,
    Athletics,
    Deception,
    History,
    Insight,
    Intimidation,
    Investigation,
    Medicine,
    Nature,
    Perception,
    Performance,
    Persuasion,
    Religion,
    SleightOfHand,
    Stealth,
    Survival,
}

impl Skill {
    pub const ALL: [Skill; 18] = [
        Skill::Acrobatics,
        Skill::AnimalHandling,
        Skill::Arcana,
        Skill::Athletics,
        Skill::Deception,
        Skill::History,
        Skill::Insight,
        Skill::Intimidation,
        Skill::Investigation,
        Skill::Medicine,
        Skill::Nature,
        Skill::Perception,
        Skill::Performance,
        Skill::Persuasion,
        Skill::Religion,
        Skill::SleightOfHand,
        Skill::Stealth,
        Skill::Survival,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Skill::Acrobatics => "Acrobatics",
            Skill::AnimalHandling => "Animal Handling",
            Skill::Arcana => "Arcana",
            Skill::Athletics => "Athletics",
            Skill::Deception => "Deception",
            Skill::History => "History",
            Skill::Insight => "Insight",
            Skill::Intimidation => "Intimidation",
            Skill::Investigation => "Investigation",
            Skill::Medicine => "Medicine",
            Skill::Nature => "Nature",
            Skill::Perception => "Perception",
            Skill::Performance => "Performance",
            Skill::Persuasion => "Persuasion",
            Skill::Religion => "Religion",
            Skill::SleightOfHand => "Sleight of Hand",
            Skill::Stealth => "Stealth",
            Skill::Survival => "Survival",
        }
    }

    /// The ability score governing checks with this skill.
    pub fn ability(&self) -> Ability {
        match self {
            Skill::Athletics => Ability::Strength,
            Skill::Acrobatics | Skill::SleightOfHand | Skill::Stealth => Ability::Dexterity,
            Skill::Arcana
            | Skill::History
            | Skill::Investigation
            | Skill::Nature
            | Skill::Religion => Ability::Intelligence,
            Skill::AnimalHandling
            | Skill::Insight
            | Skill::Medicine
            | Skill::Perception
            | Skill::Survival => Ability::Wisdom,
            Skill::Deception | Skill::Intimidation | Skill::Performance | Skill::Persuasion => {
                Ability::Charisma
            }
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Skill::ALL
            .into_iter()
            .find(|skill| skill.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The twelve character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Class {
    Barbarian,
    Bard,
    Cleric,
    Druid,
    Fighter,
    Monk,
    Paladin,
    Ranger,
    Rogue,
    Sorcerer,
    Warlock,
    Wizard,
}

impl Class {
    pub const ALL: [Class; 12] = [
        Class::Barbarian,
        Class::Bard,
        Class::Cleric,
        Class::Druid,
        Class::Fighter,
        Class::Monk,
        Class::Paladin,
        Class::Ranger,
        Class::Rogue,
        Class::Sorcerer,
        Class::Warlock,
        Class::Wizard,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Class::Barbarian => "Barbarian",
            Class::Bard => "Bard",
            Class::Cleric => "Cleric",
            Class::Druid => "Druid",
            Class::Fighter => "Fighter",
            Class::Monk => "Monk",
            Class::Paladin => "Paladin",
            Class::Ranger => "Ranger",
            Class::Rogue => "Rogue",
            Class::Sorcerer => "Sorcerer",
            Class::Warlock => "Warlock",
            Class::Wizard => "Wizard",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Class::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(name.trim()))
    }

    /// The default governing ability for this class's spellcasting.
    /// Non-casters have none.
    pub fn spellcasting_ability(&self) -> Option<Ability> {
        match self {
            Class::Bard | Class::Paladin | Class::Sorcerer | Class::Warlock => {
                Some(Ability::Charisma)
            }
            Class::Cleric | Class::Druid | Class::Ranger => Some(Ability::Wisdom),
            Class::Wizard => Some(Ability::Intelligence),
            Class::Barbarian | Class::Fighter | Class::Monk | Class::Rogue => None,
        }
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Calculate the modifier for an ability score: floor((score - 10) / 2).
pub fn ability_modifier(score: u8) -> i32 {
    (score as i32 - 10).div_euclid(2)
}

/// Render a modifier with an explicit sign, e.g. `+0`, `+2`, `-1`.
pub fn format_modifier(modifier: i32) -> String {
    if modifier >= 0 {
        format!("+{modifier}")
    } else {
        modifier.to_string()
    }
}

/// Proficiency bonus by character level. Levels below 1 grant nothing.
pub fn proficiency_bonus(level: u8) -> i32 {
    match level {
        0 => 0,
        1..=4 => 2,
        5..=8 => 3,
        9..=12 => 4,
        13..=16 => 5,
        _ => 6,
    }
}

/// Spell save DC: 8 + proficiency bonus + governing ability modifier.
pub fn spell_save_dc(level: u8, ability_score: u8) -> i32 {
    8 + proficiency_bonus(level) + ability_modifier(ability_score)
}

/// Spell attack bonus: proficiency bonus + governing ability modifier.
pub fn spell_attack_bonus(level: u8, ability_score: u8) -> i32 {
    proficiency_bonus(level) + ability_modifier(ability_score)
}

/// Skill check bonus: ability modifier, plus proficiency when trained.
pub fn skill_check_bonus(level: u8, ability_score: u8, proficient: bool) -> i32 {
    let base = ability_modifier(ability_score);
    if proficient {
        base + proficiency_bonus(level)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_modifier() {
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(15), 2);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(1), -5);
        assert_eq!(ability_modifier(30), 10);
    }

    #[test]
    fn test_format_modifier() {
        assert_eq!(format_modifier(0), "+0");
        assert_eq!(format_modifier(3), "+3");
        assert_eq!(format_modifier(-1), "-1");
    }

    #[test]
    fn test_proficiency_bonus_boundaries() {
        assert_eq!(proficiency_bonus(0), 0);
        assert_eq!(proficiency_bonus(1), 2);
        assert_eq!(proficiency_bonus(4), 2);
        assert_eq!(proficiency_bonus(5), 3);
        assert_eq!(proficiency_bonus(8), 3);
        assert_eq!(proficiency_bonus(9), 4);
        assert_eq!(proficiency_bonus(16), 5);
        assert_eq!(proficiency_bonus(17), 6);
        assert_eq!(proficiency_bonus(20), 6);
    }

    #[test]
    fn test_proficiency_bonus_monotonic() {
        let mut previous = 0;
        for level in 1..=20 {
            let bonus = proficiency_bonus(level);
            assert!(bonus >= previous);
            previous = bonus;
        }
    }

    #[test]
    fn test_spell_math_worked_example() {
        // Level 2, Wisdom 15: modifier +2, proficiency +2.
        assert_eq!(spell_save_dc(2, 15), 12);
        assert_eq!(spell_attack_bonus(2, 15), 4);
    }

    #[test]
    fn test_skill_check_bonus() {
        assert_eq!(skill_check_bonus(5, 14, false), 2);
        assert_eq!(skill_check_bonus(5, 14, true), 5);
    }

    #[test]
    fn test_skill_governing_abilities() {
        assert_eq!(Skill::Athletics.ability(), Ability::Strength);
        assert_eq!(Skill::Stealth.ability(), Ability::Dexterity);
        assert_eq!(Skill::Religion.ability(), Ability::Intelligence);
        assert_eq!(Skill::Perception.ability(), Ability::Wisdom);
        assert_eq!(Skill::Persuasion.ability(), Ability::Charisma);
    }

    #[test]
    fn test_name_parsing() {
        assert_eq!(Ability::from_name("WIS"), Some(Ability::Wisdom));
        assert_eq!(Ability::from_name("wisdom"), Some(Ability::Wisdom));
        assert_eq!(Ability::from_name("luck"), None);
        assert_eq!(Skill::from_name("sleight of hand"), Some(Skill::SleightOfHand));
        assert_eq!(Class::from_name("warlock"), Some(Class::Warlock));
        assert_eq!(Class::from_name("Artificer"), None);
    }

    #[test]
    fn test_spellcasting_ability_defaults() {
        assert_eq!(Class::Cleric.spellcasting_ability(), Some(Ability::Wisdom));
        assert_eq!(Class::Wizard.spellcasting_ability(), Some(Ability::Intelligence));
        assert_eq!(Class::Bard.spellcasting_ability(), Some(Ability::Charisma));
        assert_eq!(Class::Barbarian.spellcasting_ability(), None);
    }
}
