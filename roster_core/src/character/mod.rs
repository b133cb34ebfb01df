//! Character record definitions and normalization.

mod magic;

pub use magic::*;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rules_core::{
    ability_modifier, proficiency_bonus, progression, skill_check_bonus, spell_attack_bonus,
    spell_save_dc, Ability, Class, Skill, SPELL_SLOT_LEVELS,
};

/// Unique identifier for a character record. Assigned at creation, never
/// reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Create a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a character ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a nil/empty character ID (useful for not-yet-saved records).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The six ability scores of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            strength: 10,
            dexterity: 10,
            constitution: 10,
            intelligence: 10,
            wisdom: 10,
            charisma: 10,
        }
    }
}

impl Attributes {
    pub fn score(&self, ability: Ability) -> u8 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }
}

/// A full character record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    #[serde(default)]
    pub portrait: String,
    #[serde(default)]
    pub race: String,
    pub class: Class,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub alignment: String,
    #[serde(default)]
    pub age: String,

    /// Experience level; drives all derived math.
    pub level: u8,
    pub hp: i32,
    pub hp_max: i32,
    pub armor_class: i32,
    #[serde(default)]
    pub currency: i32,

    pub attributes: Attributes,

    /// Skills the character is proficient in.
    #[serde(default)]
    pub skills: HashSet<Skill>,

    // Free-text fields; opaque to the core.
    #[serde(default)]
    pub skill_notes: String,
    #[serde(default)]
    pub items: String,
    #[serde(default)]
    pub saving_throw_notes: String,
    #[serde(default)]
    pub feature_notes: String,
    #[serde(default)]
    pub fighting_style: String,

    /// Recorded feature choices, keyed by feature ID.
    #[serde(default)]
    pub choices: HashMap<String, String>,

    /// Spellcasting sub-record. Absent in stored data deserializes to the
    /// default shape; normalization fully populates it.
    #[serde(default)]
    pub magic: Spellcasting,
}

impl Character {
    /// Create a fresh default record with the given name and class.
    pub fn new(name: impl Into<String>, class: Class) -> Self {
        let mut character = Self {
            id: CharacterId::new(),
            name: name.into(),
            portrait: String::new(),
            race: String::new(),
            class,
            background: String::new(),
            alignment: String::new(),
            age: String::new(),
            level: 1,
            hp: 10,
            hp_max: 10,
            armor_class: 10,
            currency: 0,
            attributes: Attributes::default(),
            skills: HashSet::new(),
            skill_notes: String::new(),
            items: String::new(),
            saving_throw_notes: String::new(),
            feature_notes: String::new(),
            fighting_style: String::new(),
            choices: HashMap::new(),
            magic: Spellcasting::default(),
        };
        character.normalize();
        character
    }

    /// The built-in example record, reinserted whenever the roster would
    /// otherwise be empty.
    pub fn template() -> Self {
        let mut character = Self::new("Sister Amara", Class::Cleric);
        character.race = "Human".to_string();
        character.background = "Acolyte".to_string();
        character.alignment = "Lawful Good".to_string();
        character.age = "34".to_string();
        character.level = 2;
        character.hp = 15;
        character.hp_max = 15;
        character.armor_class = 16;
        character.currency = 50;
        character.attributes = Attributes {
            strength: 12,
            dexterity: 10,
            constitution: 12,
            intelligence: 10,
            wisdom: 15,
            charisma: 13,
        };
        character.skills = HashSet::from([Skill::Insight, Skill::Religion]);
        character.items = "Mace\nShield\nChain mail\nHoly symbol".to_string();
        character.magic.cantrips = vec![
            "Sacred Flame".to_string(),
            "Guidance".to_string(),
            "Thaumaturgy".to_string(),
        ];
        character.magic.spells = vec![
            "Bless".to_string(),
            "Cure Wounds".to_string(),
            "Guiding Bolt".to_string(),
            "Shield of Faith".to_string(),
        ];
        // Level changed after construction; re-derive DC, bonus and slots.
        character.magic.save_dc = 0;
        character.magic.attack_bonus = 0;
        character.normalize();
        character
    }

    /// Repair the record into a fully-populated, internally consistent
    /// shape. Applied on load, on class/level change, and before save.
    ///
    /// Spell slots are always derived from the progression table; the
    /// informed DC and attack bonus are only filled in when still unset,
    /// since the user may override them.
    pub fn normalize(&mut self) {
        if self.magic.slots.len() != SPELL_SLOT_LEVELS {
            self.magic.slots = vec![0; SPELL_SLOT_LEVELS];
        }
        if self.magic.ability.is_none() {
            self.magic.ability = self.class.spellcasting_ability();
        }
        self.magic.slots = progression::spell_slots(self.class, self.level).to_vec();
        if let Some(ability) = self.magic.ability {
            let score = self.attributes.score(ability);
            if self.magic.save_dc == 0 {
                self.magic.save_dc = spell_save_dc(self.level, score);
            }
            if self.magic.attack_bonus == 0 {
                self.magic.attack_bonus = spell_attack_bonus(self.level, score);
            }
        }
    }

    pub fn ability_modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.attributes.score(ability))
    }

    pub fn proficiency_bonus(&self) -> i32 {
        proficiency_bonus(self.level)
    }

    /// Advisory spell save DC derived from the current level and governing
    /// ability. `None` for non-casters.
    pub fn derived_save_dc(&self) -> Option<i32> {
        self.magic
            .ability
            .map(|ability| spell_save_dc(self.level, self.attributes.score(ability)))
    }

    /// Advisory spell attack bonus, same rules as [`Self::derived_save_dc`].
    pub fn derived_attack_bonus(&self) -> Option<i32> {
        self.magic
            .ability
            .map(|ability| spell_attack_bonus(self.level, self.attributes.score(ability)))
    }

    /// Check bonus for a skill, including proficiency when trained.
    pub fn skill_bonus(&self, skill: Skill) -> i32 {
        skill_check_bonus(
            self.level,
            self.attributes.score(skill.ability()),
            self.skills.contains(&skill),
        )
    }
}
