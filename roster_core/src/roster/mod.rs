//! The roster: the in-memory character collection and its merge engine.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use rules_core::{progression, Class, Skill, SpellAllowance, SPELL_SLOT_LEVELS};

use crate::character::{Attributes, Character, CharacterId, Spellcasting};
use crate::storage::CharacterStore;

use std::collections::{HashMap, HashSet};

/// A sparse set of top-level field changes for [`Roster::patch`].
///
/// Nested records (`attributes`, `magic`, `skills`, `choices`) are replaced
/// wholesale when present; there is no deep merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub portrait: Option<String>,
    #[serde(default)]
    pub race: Option<String>,
    #[serde(default)]
    pub class: Option<Class>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub alignment: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub hp: Option<i32>,
    #[serde(default)]
    pub hp_max: Option<i32>,
    #[serde(default)]
    pub armor_class: Option<i32>,
    #[serde(default)]
    pub currency: Option<i32>,
    #[serde(default)]
    pub attributes: Option<Attributes>,
    #[serde(default)]
    pub skills: Option<HashSet<Skill>>,
    #[serde(default)]
    pub skill_notes: Option<String>,
    #[serde(default)]
    pub items: Option<String>,
    #[serde(default)]
    pub saving_throw_notes: Option<String>,
    #[serde(default)]
    pub feature_notes: Option<String>,
    #[serde(default)]
    pub fighting_style: Option<String>,
    #[serde(default)]
    pub choices: Option<HashMap<String, String>>,
    #[serde(default)]
    pub magic: Option<Spellcasting>,
}

/// The character collection held by one process.
///
/// Never empty: deleting the last record reinserts the built-in template.
/// Insertion order is preserved for list views.
#[derive(Debug, Clone)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Create a roster seeded with the built-in template record.
    pub fn new() -> Self {
        Self {
            characters: vec![Character::template()],
        }
    }

    /// Build a roster from loaded records, normalizing each. An empty list
    /// falls back to the template.
    pub fn from_characters(mut characters: Vec<Character>) -> Self {
        if characters.is_empty() {
            return Self::new();
        }
        for character in &mut characters {
            character.normalize();
        }
        Self { characters }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|character| character.id == id)
    }

    fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters
            .iter_mut()
            .find(|character| character.id == id)
    }

    /// Create-or-replace. A record whose ID matches an existing one replaces
    /// it in place; otherwise the record is appended, receiving a fresh ID
    /// if it arrived with a nil one. Returns the stored record's ID.
    pub fn save(&mut self, mut character: Character) -> CharacterId {
        character.normalize();
        if let Some(existing) = self.get_mut(character.id) {
            let id = character.id;
            *existing = character;
            return id;
        }
        if character.id.is_nil() {
            character.id = CharacterId::new();
        }
        let id = character.id;
        self.characters.push(character);
        id
    }

    /// Shallow-merge a sparse patch over an existing record. Missing ID is
    /// a logged no-op, not a failure. Returns whether a record was changed.
    pub fn patch(&mut self, id: CharacterId, patch: CharacterPatch) -> bool {
        let Some(character) = self.get_mut(id) else {
            debug!(%id, "patch: no such character");
            return false;
        };

        let progression_changed = patch.class.is_some() || patch.level.is_some();

        if let Some(name) = patch.name {
            character.name = name;
        }
        if let Some(portrait) = patch.portrait {
            character.portrait = portrait;
        }
        if let Some(race) = patch.race {
            character.race = race;
        }
        if let Some(class) = patch.class {
            character.class = class;
        }
        if let Some(background) = patch.background {
            character.background = background;
        }
        if let Some(alignment) = patch.alignment {
            character.alignment = alignment;
        }
        if let Some(age) = patch.age {
            character.age = age;
        }
        if let Some(level) = patch.level {
            character.level = level;
        }
        if let Some(hp_max) = patch.hp_max {
            character.hp_max = hp_max;
        }
        if let Some(hp) = patch.hp {
            // Never present negative hit points.
            character.hp = hp.max(0);
        }
        if let Some(armor_class) = patch.armor_class {
            character.armor_class = armor_class;
        }
        if let Some(currency) = patch.currency {
            character.currency = currency;
        }
        if let Some(attributes) = patch.attributes {
            character.attributes = attributes;
        }
        if let Some(skills) = patch.skills {
            character.skills = skills;
        }
        if let Some(skill_notes) = patch.skill_notes {
            character.skill_notes = skill_notes;
        }
        if let Some(items) = patch.items {
            character.items = items;
        }
        if let Some(saving_throw_notes) = patch.saving_throw_notes {
            character.saving_throw_notes = saving_throw_notes;
        }
        if let Some(feature_notes) = patch.feature_notes {
            character.feature_notes = feature_notes;
        }
        if let Some(fighting_style) = patch.fighting_style {
            character.fighting_style = fighting_style;
        }
        if let Some(choices) = patch.choices {
            character.choices = choices;
        }
        if let Some(magic) = patch.magic {
            character.magic = magic;
            // The slot list must hold exactly nine entries whatever the
            // patch carried; a well-formed manual override is kept as-is
            // until the next class/level change re-derives it.
            if character.magic.slots.len() != SPELL_SLOT_LEVELS {
                character.magic.slots =
                    progression::spell_slots(character.class, character.level).to_vec();
            }
        }

        if progression_changed {
            character.normalize();
        }
        true
    }

    /// Remove by ID. The caller is expected to have confirmed the removal.
    /// An emptied roster gets the template reinserted. Returns whether a
    /// record was removed.
    pub fn delete(&mut self, id: CharacterId) -> bool {
        let before = self.characters.len();
        self.characters.retain(|character| character.id != id);
        let removed = self.characters.len() < before;
        if !removed {
            debug!(%id, "delete: no such character");
        }
        if self.characters.is_empty() {
            self.characters.push(Character::template());
        }
        removed
    }

    /// Player self-service healing: hit points are clamped to
    /// `0..=hp_max`. A negative amount is a (clamped) damage adjustment.
    pub fn heal(&mut self, id: CharacterId, amount: i32) -> bool {
        let Some(character) = self.get_mut(id) else {
            debug!(%id, "heal: no such character");
            return false;
        };
        // min then max: hp stays zero when hp_max has been patched below it.
        character.hp = (character.hp + amount).min(character.hp_max).max(0);
        true
    }

    /// Game-master hit point adjustment: clamps at zero on the low end
    /// only; the GM may push above the recorded maximum.
    pub fn adjust_hp(&mut self, id: CharacterId, delta: i32) -> bool {
        let Some(character) = self.get_mut(id) else {
            debug!(%id, "adjust_hp: no such character");
            return false;
        };
        character.hp = (character.hp + delta).max(0);
        true
    }

    /// Game-master currency adjustment, clamped at zero.
    pub fn adjust_currency(&mut self, id: CharacterId, delta: i32) -> bool {
        let Some(character) = self.get_mut(id) else {
            debug!(%id, "adjust_currency: no such character");
            return false;
        };
        character.currency = (character.currency + delta).max(0);
        true
    }

    /// Append a line to a character's inventory text.
    pub fn append_item(&mut self, id: CharacterId, item: &str) -> bool {
        let Some(character) = self.get_mut(id) else {
            debug!(%id, "append_item: no such character");
            return false;
        };
        let item = item.trim();
        if item.is_empty() {
            return false;
        }
        if character.items.is_empty() {
            character.items = item.to_string();
        } else {
            character.items.push('\n');
            character.items.push_str(item);
        }
        true
    }

    /// Add a cantrip name, capped by the class/level cantrip allowance.
    ///
    /// A soft guard, not a security boundary: a new entry is rejected (and
    /// logged) when the list is already at the allowance; re-adding a
    /// present entry succeeds without growing the list.
    pub fn add_cantrip(&mut self, id: CharacterId, name: &str) -> bool {
        let Some(character) = self.get_mut(id) else {
            debug!(%id, "add_cantrip: no such character");
            return false;
        };
        let allowance = progression::cantrips_known(character.class, character.level);
        Self::add_capped(
            &mut character.magic.cantrips,
            name,
            SpellAllowance::Limited(allowance),
            "cantrips",
        )
    }

    pub fn remove_cantrip(&mut self, id: CharacterId, name: &str) -> bool {
        self.get_mut(id)
            .map(|character| Self::remove_entry(&mut character.magic.cantrips, name))
            .unwrap_or(false)
    }

    /// Add a known/prepared spell name, capped by the spells-known
    /// allowance (never capped for prepares-from-list classes).
    pub fn add_spell(&mut self, id: CharacterId, name: &str) -> bool {
        let Some(character) = self.get_mut(id) else {
            debug!(%id, "add_spell: no such character");
            return false;
        };
        let allowance = progression::spells_known(character.class, character.level);
        Self::add_capped(&mut character.magic.spells, name, allowance, "spells")
    }

    pub fn remove_spell(&mut self, id: CharacterId, name: &str) -> bool {
        self.get_mut(id)
            .map(|character| Self::remove_entry(&mut character.magic.spells, name))
            .unwrap_or(false)
    }

    /// Add a spell to the spellbook. Wizard-only; capped by the level-based
    /// spellbook capacity.
    pub fn add_spellbook_entry(&mut self, id: CharacterId, name: &str) -> bool {
        let Some(character) = self.get_mut(id) else {
            debug!(%id, "add_spellbook_entry: no such character");
            return false;
        };
        if character.class != Class::Wizard {
            debug!(%id, class = %character.class, "add_spellbook_entry: not a wizard");
            return false;
        }
        let capacity = progression::spellbook_capacity(character.level);
        Self::add_capped(
            &mut character.magic.spellbook,
            name,
            SpellAllowance::Limited(capacity),
            "spellbook",
        )
    }

    pub fn remove_spellbook_entry(&mut self, id: CharacterId, name: &str) -> bool {
        self.get_mut(id)
            .map(|character| Self::remove_entry(&mut character.magic.spellbook, name))
            .unwrap_or(false)
    }

    fn add_capped(
        list: &mut Vec<String>,
        name: &str,
        allowance: SpellAllowance,
        field: &'static str,
    ) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        if list.iter().any(|entry| entry == name) {
            return true;
        }
        if !allowance.permits(list.len()) {
            debug!(field, name, len = list.len(), "addition rejected: at allowance");
            return false;
        }
        list.push(name.to_string());
        true
    }

    /// Removal is always permitted regardless of any cap.
    fn remove_entry(list: &mut Vec<String>, name: &str) -> bool {
        let before = list.len();
        list.retain(|entry| entry != name.trim());
        list.len() < before
    }

    /// Load a roster from a store. Read failures and empty stores fall back
    /// to the template roster so the application always has something to
    /// show.
    pub fn load_from(store: &dyn CharacterStore) -> Self {
        match store.read_all() {
            Ok(characters) => Self::from_characters(characters),
            Err(error) => {
                warn!(%error, "failed to read characters, falling back to template");
                Self::new()
            }
        }
    }

    /// Persist the full collection, best-effort. A write failure is logged;
    /// the in-memory state is not rolled back.
    pub fn persist_to(&self, store: &dyn CharacterStore) {
        if let Err(error) = store.write_all(&self.characters) {
            warn!(%error, "failed to persist characters");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_with(character: Character) -> (Roster, CharacterId) {
        let mut roster = Roster::new();
        let id = roster.save(character);
        (roster, id)
    }

    #[test]
    fn test_new_roster_is_never_empty() {
        let roster = Roster::new();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.characters()[0].name, "Sister Amara");
    }

    #[test]
    fn test_save_appends_and_assigns_id() {
        let mut roster = Roster::new();
        let before = roster.len();
        let mut character = Character::new("Fresh", Class::Rogue);
        character.id = CharacterId::nil();
        let id = roster.save(character);
        assert!(!id.is_nil());
        assert_eq!(roster.len(), before + 1);
    }

    #[test]
    fn test_save_replaces_in_place() {
        let (mut roster, id) = roster_with(Character::new("Original", Class::Fighter));
        let before = roster.len();
        let mut edited = roster.get(id).unwrap().clone();
        edited.name = "Edited".to_string();
        let saved_id = roster.save(edited);
        assert_eq!(saved_id, id);
        assert_eq!(roster.len(), before);
        assert_eq!(roster.get(id).unwrap().name, "Edited");
    }

    #[test]
    fn test_delete_last_reinserts_template() {
        let mut roster = Roster::new();
        let id = roster.characters()[0].id;
        assert!(roster.delete(id));
        assert_eq!(roster.len(), 1);
        assert_ne!(roster.characters()[0].id, id);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut roster = Roster::new();
        let before = roster.len();
        assert!(!roster.delete(CharacterId::new()));
        assert_eq!(roster.len(), before);
    }

    #[test]
    fn test_patch_missing_is_noop() {
        let mut roster = Roster::new();
        assert!(!roster.patch(CharacterId::new(), CharacterPatch::default()));
    }

    #[test]
    fn test_patch_shallow_merges() {
        let (mut roster, id) = roster_with(Character::new("Patched", Class::Fighter));
        let patch = CharacterPatch {
            currency: Some(120),
            armor_class: Some(18),
            ..Default::default()
        };
        assert!(roster.patch(id, patch));
        let character = roster.get(id).unwrap();
        assert_eq!(character.currency, 120);
        assert_eq!(character.armor_class, 18);
        assert_eq!(character.name, "Patched");
    }

    #[test]
    fn test_patch_replaces_nested_wholesale() {
        let (mut roster, id) = roster_with(Character::new("Nested", Class::Fighter));
        let attributes = Attributes {
            strength: 18,
            ..Default::default()
        };
        assert!(roster.patch(
            id,
            CharacterPatch {
                attributes: Some(attributes),
                ..Default::default()
            }
        ));
        let character = roster.get(id).unwrap();
        assert_eq!(character.attributes.strength, 18);
        assert_eq!(character.attributes.dexterity, 10);
    }

    #[test]
    fn test_patch_hp_clamps_low() {
        let (mut roster, id) = roster_with(Character::new("Bruised", Class::Fighter));
        assert!(roster.patch(
            id,
            CharacterPatch {
                hp: Some(-5),
                ..Default::default()
            }
        ));
        assert_eq!(roster.get(id).unwrap().hp, 0);
    }

    #[test]
    fn test_patch_level_rederives_slots() {
        let (mut roster, id) = roster_with(Character::new("Leveling", Class::Cleric));
        assert!(roster.patch(
            id,
            CharacterPatch {
                level: Some(3),
                ..Default::default()
            }
        ));
        let character = roster.get(id).unwrap();
        assert_eq!(character.magic.slots, vec![4, 2, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_patch_magic_repairs_malformed_slots() {
        use crate::storage::{CharacterStore, MemoryStore};

        let (mut roster, id) = roster_with(Character::new("Slotted", Class::Cleric));
        let magic = Spellcasting {
            slots: vec![7, 7, 7],
            ..roster.get(id).unwrap().magic.clone()
        };
        assert!(roster.patch(
            id,
            CharacterPatch {
                magic: Some(magic),
                ..Default::default()
            }
        ));
        // Level 1 Cleric slots from the progression table, exactly nine.
        assert_eq!(
            roster.get(id).unwrap().magic.slots,
            vec![2, 0, 0, 0, 0, 0, 0, 0, 0]
        );

        let store = MemoryStore::new();
        roster.persist_to(&store);
        let persisted = store.read_all().unwrap();
        let record = persisted
            .iter()
            .find(|character| character.id == id)
            .unwrap();
        assert_eq!(record.magic.slots.len(), 9);
    }

    #[test]
    fn test_patch_magic_keeps_well_formed_manual_slots() {
        let (mut roster, id) = roster_with(Character::new("Override", Class::Cleric));
        let magic = Spellcasting {
            slots: vec![9, 0, 0, 0, 0, 0, 0, 0, 0],
            ..roster.get(id).unwrap().magic.clone()
        };
        roster.patch(
            id,
            CharacterPatch {
                magic: Some(magic),
                ..Default::default()
            },
        );
        assert_eq!(roster.get(id).unwrap().magic.slots[0], 9);

        // The next class/level change re-derives the slots.
        roster.patch(
            id,
            CharacterPatch {
                level: Some(2),
                ..Default::default()
            },
        );
        assert_eq!(
            roster.get(id).unwrap().magic.slots,
            vec![3, 0, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_heal_clamps_to_max() {
        let (mut roster, id) = roster_with(Character::new("Wounded", Class::Fighter));
        roster.patch(
            id,
            CharacterPatch {
                hp: Some(4),
                hp_max: Some(10),
                ..Default::default()
            },
        );
        assert!(roster.heal(id, 20));
        assert_eq!(roster.get(id).unwrap().hp, 10);
        assert!(roster.heal(id, -50));
        assert_eq!(roster.get(id).unwrap().hp, 0);
    }

    #[test]
    fn test_adjust_hp_allows_over_max() {
        let (mut roster, id) = roster_with(Character::new("Blessed", Class::Fighter));
        assert!(roster.adjust_hp(id, 7));
        assert_eq!(roster.get(id).unwrap().hp, 17);
        assert!(roster.adjust_hp(id, -100));
        assert_eq!(roster.get(id).unwrap().hp, 0);
    }

    #[test]
    fn test_adjust_currency_clamps_at_zero() {
        let (mut roster, id) = roster_with(Character::new("Pauper", Class::Fighter));
        assert!(roster.adjust_currency(id, 30));
        assert_eq!(roster.get(id).unwrap().currency, 30);
        assert!(roster.adjust_currency(id, -100));
        assert_eq!(roster.get(id).unwrap().currency, 0);
    }

    #[test]
    fn test_append_item() {
        let (mut roster, id) = roster_with(Character::new("Packrat", Class::Fighter));
        assert!(roster.append_item(id, "Rope (50 ft.)"));
        assert!(roster.append_item(id, "Torch"));
        assert_eq!(roster.get(id).unwrap().items, "Rope (50 ft.)\nTorch");
        assert!(!roster.append_item(id, "   "));
    }

    #[test]
    fn test_add_cantrip_respects_allowance() {
        // Level 1 Cleric knows 3 cantrips.
        let (mut roster, id) = roster_with(Character::new("Novice", Class::Cleric));
        assert!(roster.add_cantrip(id, "Sacred Flame"));
        assert!(roster.add_cantrip(id, "Guidance"));
        assert!(roster.add_cantrip(id, "Thaumaturgy"));
        assert!(!roster.add_cantrip(id, "Light"));
        assert_eq!(roster.get(id).unwrap().magic.cantrips.len(), 3);

        // Re-adding a present entry succeeds without growing the list.
        assert!(roster.add_cantrip(id, "Guidance"));
        assert_eq!(roster.get(id).unwrap().magic.cantrips.len(), 3);

        // Removal always works, even at the cap.
        assert!(roster.remove_cantrip(id, "Guidance"));
        assert_eq!(roster.get(id).unwrap().magic.cantrips.len(), 2);
        assert!(roster.add_cantrip(id, "Light"));
    }

    #[test]
    fn test_add_spell_unbounded_for_prepared_casters() {
        let (mut roster, id) = roster_with(Character::new("Prepared", Class::Cleric));
        for index in 0..40 {
            assert!(roster.add_spell(id, &format!("Spell {index}")));
        }
        assert_eq!(roster.get(id).unwrap().magic.spells.len(), 40);
    }

    #[test]
    fn test_add_spell_capped_for_known_casters() {
        // Level 1 Sorcerer knows 2 spells.
        let (mut roster, id) = roster_with(Character::new("Innate", Class::Sorcerer));
        assert!(roster.add_spell(id, "Magic Missile"));
        assert!(roster.add_spell(id, "Shield"));
        assert!(!roster.add_spell(id, "Sleep"));
    }

    #[test]
    fn test_add_spell_rejected_for_non_casters() {
        let (mut roster, id) = roster_with(Character::new("Mundane", Class::Barbarian));
        assert!(!roster.add_spell(id, "Fireball"));
        assert!(roster.get(id).unwrap().magic.spells.is_empty());
    }

    #[test]
    fn test_spellbook_is_wizard_only() {
        let (mut roster, id) = roster_with(Character::new("Scholar", Class::Wizard));
        for index in 0..6 {
            assert!(roster.add_spellbook_entry(id, &format!("Spell {index}")));
        }
        assert!(!roster.add_spellbook_entry(id, "One Too Many"));

        let (mut roster, id) = roster_with(Character::new("Singer", Class::Bard));
        assert!(!roster.add_spellbook_entry(id, "Fly"));
    }

    #[test]
    fn test_from_characters_empty_falls_back_to_template() {
        let roster = Roster::from_characters(Vec::new());
        assert_eq!(roster.len(), 1);
    }
}
