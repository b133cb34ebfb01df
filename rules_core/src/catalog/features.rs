//! Race and class feature definitions.
//!
//! These tables feed no derivation math; they are a read-only catalog a
//! sheet renders and a player records choices against. Prerequisites are
//! exposed as data ([`Prerequisite`]) with a single equality predicate; the
//! core does not validate that recorded choices satisfy them.

use std::collections::HashMap;

use crate::mechanics::Class;

/// One feature a race or class grants at a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDef {
    /// Stable identifier, also the key choices are recorded under.
    pub id: &'static str,
    /// Character level at which the feature is granted.
    pub level: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: FeatureKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    /// Granted automatically, nothing to pick.
    Grant,
    /// An ability score increase at this level.
    AbilityScoreIncrease,
    /// The player picks from an enumerated set of options.
    Choice(ChoiceDef),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceDef {
    pub prompt: &'static str,
    pub options: &'static [ChoiceOption],
    pub max_picks: u8,
    /// Gate on an earlier choice, e.g. subclass-specific features.
    pub prerequisite: Option<Prerequisite>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Value recorded when this option is chosen.
    pub value: &'static str,
    pub label: &'static str,
    /// Optional longer description shown alongside the label.
    pub detail: Option<&'static str>,
    /// Optional side-data, e.g. a damage type bound to the option.
    pub data: Option<&'static str>,
}

/// Reference to an earlier choice and the value it must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prerequisite {
    pub feature_id: &'static str,
    pub chosen_value: &'static str,
}

impl Prerequisite {
    /// Equality check against a player's recorded choice map.
    pub fn satisfied_by(&self, choices: &HashMap<String, String>) -> bool {
        choices
            .get(self.feature_id)
            .is_some_and(|value| value == self.chosen_value)
    }
}

const fn option(value: &'static str, label: &'static str) -> ChoiceOption {
    ChoiceOption {
        value,
        label,
        detail: None,
        data: None,
    }
}

const FIGHTING_STYLE_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        value: "archery",
        label: "Archery",
        detail: Some("+2 to attack rolls with ranged weapons."),
        data: None,
    },
    ChoiceOption {
        value: "defense",
        label: "Defense",
        detail: Some("+1 AC while wearing armor."),
        data: None,
    },
    ChoiceOption {
        value: "dueling",
        label: "Dueling",
        detail: Some("+2 damage with a one-handed melee weapon."),
        data: None,
    },
    ChoiceOption {
        value: "great-weapon-fighting",
        label: "Great Weapon Fighting",
        detail: Some("Reroll 1s and 2s on two-handed weapon damage."),
        data: None,
    },
    ChoiceOption {
        value: "protection",
        label: "Protection",
        detail: Some("Impose disadvantage on attacks against allies near you."),
        data: None,
    },
    ChoiceOption {
        value: "two-weapon-fighting",
        label: "Two-Weapon Fighting",
        detail: Some("Add your ability modifier to off-hand damage."),
        data: None,
    },
];

const SKILL_OPTIONS: &[ChoiceOption] = &[
    option("acrobatics", "Acrobatics"),
    option("animal-handling", "Animal Handling"),
    option("arcana", "Arcana"),
    option("athletics", "Athletics"),
    option("deception", "Deception"),
    option("history", "History"),
    option("insight", "Insight"),
    option("intimidation", "Intimidation"),
    option("investigation", "Investigation"),
    option("medicine", "Medicine"),
    option("nature", "Nature"),
    option("perception", "Perception"),
    option("performance", "Performance"),
    option("persuasion", "Persuasion"),
    option("religion", "Religion"),
    option("sleight-of-hand", "Sleight of Hand"),
    option("stealth", "Stealth"),
    option("survival", "Survival"),
];

const BARBARIAN_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "barbarian-rage",
        level: 1,
        name: "Rage",
        description: "Enter a rage as a bonus action for bonus melee damage and resistance to physical damage.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "barbarian-unarmored-defense",
        level: 1,
        name: "Unarmored Defense",
        description: "While not wearing armor, AC equals 10 + Dexterity modifier + Constitution modifier.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "barbarian-reckless-attack",
        level: 2,
        name: "Reckless Attack",
        description: "Attack with advantage at the cost of granting advantage against you.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "barbarian-path",
        level: 3,
        name: "Primal Path",
        description: "Choose the path that shapes your rage.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose a primal path",
            options: &[
                option("berserker", "Path of the Berserker"),
                option("totem-warrior", "Path of the Totem Warrior"),
            ],
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "barbarian-asi-4",
        level: 4,
        name: "Ability Score Improvement",
        description: "Increase one ability score by 2, or two scores by 1.",
        kind: FeatureKind::AbilityScoreIncrease,
    },
];

const BARD_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "bard-inspiration",
        level: 1,
        name: "Bardic Inspiration",
        description: "Grant an inspiration die to another creature as a bonus action.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "bard-jack-of-all-trades",
        level: 2,
        name: "Jack of All Trades",
        description: "Add half your proficiency bonus to unproficient ability checks.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "bard-expertise",
        level: 3,
        name: "Expertise",
        description: "Double proficiency bonus for two chosen skill proficiencies.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose two skills for expertise",
            options: SKILL_OPTIONS,
            max_picks: 2,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "bard-college",
        level: 3,
        name: "Bard College",
        description: "Choose the college whose tradition you follow.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose a bard college",
            options: &[
                option("lore", "College of Lore"),
                option("valor", "College of Valor"),
            ],
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "bard-asi-4",
        level: 4,
        name: "Ability Score Improvement",
        description: "Increase one ability score by 2, or two scores by 1.",
        kind: FeatureKind::AbilityScoreIncrease,
    },
];

const CLERIC_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "cleric-domain",
        level: 1,
        name: "Divine Domain",
        description: "Choose the domain related to your deity.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose a divine domain",
            options: &[
                option("knowledge", "Knowledge Domain"),
                option("life", "Life Domain"),
                option("light", "Light Domain"),
                option("war", "War Domain"),
            ],
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "cleric-knowledge-skills",
        level: 1,
        name: "Blessings of Knowledge",
        description: "Learn two languages and gain proficiency in two Intelligence skills.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose two Intelligence skills",
            options: &[
                option("arcana", "Arcana"),
                option("history", "History"),
                option("nature", "Nature"),
                option("religion", "Religion"),
            ],
            max_picks: 2,
            prerequisite: Some(Prerequisite {
                feature_id: "cleric-domain",
                chosen_value: "knowledge",
            }),
        }),
    },
    FeatureDef {
        id: "cleric-channel-divinity",
        level: 2,
        name: "Channel Divinity",
        description: "Channel divine energy to fuel magical effects such as Turn Undead.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "cleric-asi-4",
        level: 4,
        name: "Ability Score Improvement",
        description: "Increase one ability score by 2, or two scores by 1.",
        kind: FeatureKind::AbilityScoreIncrease,
    },
    FeatureDef {
        id: "cleric-destroy-undead",
        level: 5,
        name: "Destroy Undead",
        description: "Turned undead of low enough challenge rating are destroyed outright.",
        kind: FeatureKind::Grant,
    },
];

const DRUID_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "druid-druidic",
        level: 1,
        name: "Druidic",
        description: "You know Druidic, the secret language of druids.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "druid-wild-shape",
        level: 2,
        name: "Wild Shape",
        description: "Magically assume the shape of a beast you have seen before.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "druid-circle",
        level: 2,
        name: "Druid Circle",
        description: "Choose the circle your druid identifies with.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose a druid circle",
            options: &[
                option("land", "Circle of the Land"),
                option("moon", "Circle of the Moon"),
            ],
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "druid-asi-4",
        level: 4,
        name: "Ability Score Improvement",
        description: "Increase one ability score by 2, or two scores by 1.",
        kind: FeatureKind::AbilityScoreIncrease,
    },
];

const FIGHTER_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "fighter-style",
        level: 1,
        name: "Fighting Style",
        description: "Adopt a particular style of fighting as your specialty.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose a fighting style",
            options: FIGHTING_STYLE_OPTIONS,
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "fighter-second-wind",
        level: 1,
        name: "Second Wind",
        description: "Use a bonus action to regain hit points equal to 1d10 + fighter level.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "fighter-action-surge",
        level: 2,
        name: "Action Surge",
        description: "Take one additional action on your turn, once per rest.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "fighter-archetype",
        level: 3,
        name: "Martial Archetype",
        description: "Choose the archetype you strive to emulate.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose a martial archetype",
            options: &[
                option("champion", "Champion"),
                option("battle-master", "Battle Master"),
                option("eldritch-knight", "Eldritch Knight"),
            ],
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "fighter-maneuvers",
        level: 3,
        name: "Combat Maneuvers",
        description: "Learn maneuvers fueled by superiority dice.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose three maneuvers",
            options: &[
                option("commanders-strike", "Commander's Strike"),
                option("disarming-attack", "Disarming Attack"),
                option("feinting-attack", "Feinting Attack"),
                option("parry", "Parry"),
                option("precision-attack", "Precision Attack"),
                option("riposte", "Riposte"),
                option("trip-attack", "Trip Attack"),
            ],
            max_picks: 3,
            prerequisite: Some(Prerequisite {
                feature_id: "fighter-archetype",
                chosen_value: "battle-master",
            }),
        }),
    },
    FeatureDef {
        id: "fighter-asi-4",
        level: 4,
        name: "Ability Score Improvement",
        description: "Increase one ability score by 2, or two scores by 1.",
        kind: FeatureKind::AbilityScoreIncrease,
    },
];

const MONK_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "monk-martial-arts",
        level: 1,
        name: "Martial Arts",
        description: "Use Dexterity for unarmed strikes and monk weapons; unarmed damage scales with level.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "monk-ki",
        level: 2,
        name: "Ki",
        description: "Spend ki points to fuel Flurry of Blows, Patient Defense, and Step of the Wind.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "monk-tradition",
        level: 3,
        name: "Monastic Tradition",
        description: "Commit to a monastic tradition.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose a monastic tradition",
            options: &[
                option("open-hand", "Way of the Open Hand"),
                option("shadow", "Way of Shadow"),
                option("four-elements", "Way of the Four Elements"),
            ],
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "monk-asi-4",
        level: 4,
        name: "Ability Score Improvement",
        description: "Increase one ability score by 2, or two scores by 1.",
        kind: FeatureKind::AbilityScoreIncrease,
    },
];

const PALADIN_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "paladin-lay-on-hands",
        level: 1,
        name: "Lay on Hands",
        description: "A pool of healing power that restores 5 hit points per paladin level per day.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "paladin-style",
        level: 2,
        name: "Fighting Style",
        description: "Adopt a style of fighting as your specialty.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose a fighting style",
            options: FIGHTING_STYLE_OPTIONS,
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "paladin-oath",
        level: 3,
        name: "Sacred Oath",
        description: "Swear the oath that binds you as a paladin.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose a sacred oath",
            options: &[
                option("devotion", "Oath of Devotion"),
                option("ancients", "Oath of the Ancients"),
                option("vengeance", "Oath of Vengeance"),
            ],
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "paladin-asi-4",
        level: 4,
        name: "Ability Score Improvement",
        description: "Increase one ability score by 2, or two scores by 1.",
        kind: FeatureKind::AbilityScoreIncrease,
    },
];

const RANGER_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "ranger-favored-enemy",
        level: 1,
        name: "Favored Enemy",
        description: "Choose a type of enemy you have significant experience hunting.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose a favored enemy",
            options: &[
                option("beasts", "Beasts"),
                option("fey", "Fey"),
                option("giants", "Giants"),
                option("monstrosities", "Monstrosities"),
                option("undead", "Undead"),
            ],
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "ranger-style",
        level: 2,
        name: "Fighting Style",
        description: "Adopt a style of fighting as your specialty.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose a fighting style",
            options: FIGHTING_STYLE_OPTIONS,
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "ranger-conclave",
        level: 3,
        name: "Ranger Archetype",
        description: "Choose the archetype you strive to emulate.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose a ranger archetype",
            options: &[
                option("hunter", "Hunter"),
                option("beast-master", "Beast Master"),
            ],
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "ranger-asi-4",
        level: 4,
        name: "Ability Score Improvement",
        description: "Increase one ability score by 2, or two scores by 1.",
        kind: FeatureKind::AbilityScoreIncrease,
    },
];

const ROGUE_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "rogue-sneak-attack",
        level: 1,
        name: "Sneak Attack",
        description: "Deal extra damage once per turn when you have advantage or an ally is adjacent.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "rogue-expertise",
        level: 1,
        name: "Expertise",
        description: "Double proficiency bonus for two chosen skill proficiencies.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose two skills for expertise",
            options: SKILL_OPTIONS,
            max_picks: 2,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "rogue-cunning-action",
        level: 2,
        name: "Cunning Action",
        description: "Dash, Disengage, or Hide as a bonus action.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "rogue-archetype",
        level: 3,
        name: "Roguish Archetype",
        description: "Choose the archetype that reflects your talents.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose a roguish archetype",
            options: &[
                option("thief", "Thief"),
                option("assassin", "Assassin"),
                option("arcane-trickster", "Arcane Trickster"),
            ],
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "rogue-asi-4",
        level: 4,
        name: "Ability Score Improvement",
        description: "Increase one ability score by 2, or two scores by 1.",
        kind: FeatureKind::AbilityScoreIncrease,
    },
];

const SORCERER_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "sorcerer-origin",
        level: 1,
        name: "Sorcerous Origin",
        description: "Choose the source of your innate magic.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose a sorcerous origin",
            options: &[
                option("draconic", "Draconic Bloodline"),
                option("wild", "Wild Magic"),
            ],
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "sorcerer-font-of-magic",
        level: 2,
        name: "Font of Magic",
        description: "Sorcery points convertible to and from spell slots.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "sorcerer-metamagic",
        level: 3,
        name: "Metamagic",
        description: "Twist your spells with metamagic options.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose two metamagic options",
            options: &[
                option("careful-spell", "Careful Spell"),
                option("distant-spell", "Distant Spell"),
                option("empowered-spell", "Empowered Spell"),
                option("quickened-spell", "Quickened Spell"),
                option("subtle-spell", "Subtle Spell"),
                option("twinned-spell", "Twinned Spell"),
            ],
            max_picks: 2,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "sorcerer-asi-4",
        level: 4,
        name: "Ability Score Improvement",
        description: "Increase one ability score by 2, or two scores by 1.",
        kind: FeatureKind::AbilityScoreIncrease,
    },
];

const WARLOCK_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "warlock-patron",
        level: 1,
        name: "Otherworldly Patron",
        description: "Strike a bargain with an otherworldly being.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose an otherworldly patron",
            options: &[
                option("archfey", "The Archfey"),
                option("fiend", "The Fiend"),
                option("great-old-one", "The Great Old One"),
            ],
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "warlock-invocations",
        level: 2,
        name: "Eldritch Invocations",
        description: "Fragments of forbidden knowledge imbue you with abilities.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose two eldritch invocations",
            options: &[
                option("agonizing-blast", "Agonizing Blast"),
                option("armor-of-shadows", "Armor of Shadows"),
                option("devils-sight", "Devil's Sight"),
                option("eldritch-sight", "Eldritch Sight"),
                option("mask-of-many-faces", "Mask of Many Faces"),
            ],
            max_picks: 2,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "warlock-pact-boon",
        level: 3,
        name: "Pact Boon",
        description: "Your patron bestows a gift upon you.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose a pact boon",
            options: &[
                option("blade", "Pact of the Blade"),
                option("chain", "Pact of the Chain"),
                option("tome", "Pact of the Tome"),
            ],
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "warlock-tome-cantrips",
        level: 3,
        name: "Book of Shadows",
        description: "Your Book of Shadows holds three cantrips from any class list.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose three cantrips for your Book of Shadows",
            options: &[
                option("guidance", "Guidance"),
                option("mage-hand", "Mage Hand"),
                option("minor-illusion", "Minor Illusion"),
                option("prestidigitation", "Prestidigitation"),
                option("sacred-flame", "Sacred Flame"),
                option("vicious-mockery", "Vicious Mockery"),
            ],
            max_picks: 3,
            prerequisite: Some(Prerequisite {
                feature_id: "warlock-pact-boon",
                chosen_value: "tome",
            }),
        }),
    },
    FeatureDef {
        id: "warlock-asi-4",
        level: 4,
        name: "Ability Score Improvement",
        description: "Increase one ability score by 2, or two scores by 1.",
        kind: FeatureKind::AbilityScoreIncrease,
    },
];

const WIZARD_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "wizard-spellbook",
        level: 1,
        name: "Spellbook",
        description: "Your spellbook holds the wizard spells you have learned.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "wizard-arcane-recovery",
        level: 1,
        name: "Arcane Recovery",
        description: "Recover expended spell slots during a short rest, once per day.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "wizard-tradition",
        level: 2,
        name: "Arcane Tradition",
        description: "Choose the school of magic you specialize in.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose an arcane tradition",
            options: &[
                option("abjuration", "School of Abjuration"),
                option("divination", "School of Divination"),
                option("evocation", "School of Evocation"),
                option("illusion", "School of Illusion"),
                option("necromancy", "School of Necromancy"),
            ],
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "wizard-asi-4",
        level: 4,
        name: "Ability Score Improvement",
        description: "Increase one ability score by 2, or two scores by 1.",
        kind: FeatureKind::AbilityScoreIncrease,
    },
];

const DWARF_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "dwarf-darkvision",
        level: 1,
        name: "Darkvision",
        description: "See in dim light within 60 feet as if it were bright light.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "dwarf-resilience",
        level: 1,
        name: "Dwarven Resilience",
        description: "Advantage on saves against poison, and resistance to poison damage.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "dwarf-stonecunning",
        level: 1,
        name: "Stonecunning",
        description: "Double proficiency on History checks related to stonework.",
        kind: FeatureKind::Grant,
    },
];

const ELF_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "elf-darkvision",
        level: 1,
        name: "Darkvision",
        description: "See in dim light within 60 feet as if it were bright light.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "elf-keen-senses",
        level: 1,
        name: "Keen Senses",
        description: "Proficiency in the Perception skill.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "elf-fey-ancestry",
        level: 1,
        name: "Fey Ancestry",
        description: "Advantage on saves against being charmed; magic cannot put you to sleep.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "elf-trance",
        level: 1,
        name: "Trance",
        description: "Four hours of semiconscious meditation replace sleep.",
        kind: FeatureKind::Grant,
    },
];

const HALFLING_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "halfling-lucky",
        level: 1,
        name: "Lucky",
        description: "Reroll 1s on attack rolls, ability checks, and saving throws.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "halfling-brave",
        level: 1,
        name: "Brave",
        description: "Advantage on saving throws against being frightened.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "halfling-nimbleness",
        level: 1,
        name: "Halfling Nimbleness",
        description: "Move through the space of any creature larger than you.",
        kind: FeatureKind::Grant,
    },
];

const HUMAN_FEATURES: &[FeatureDef] = &[FeatureDef {
    id: "human-versatility",
    level: 1,
    name: "Versatile",
    description: "Each of your ability scores increases by 1.",
    kind: FeatureKind::AbilityScoreIncrease,
}];

const DRAGONBORN_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "dragonborn-ancestry",
        level: 1,
        name: "Draconic Ancestry",
        description: "Your breath weapon and damage resistance are determined by your dragon ancestor.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose a draconic ancestry",
            options: &[
                ChoiceOption {
                    value: "black",
                    label: "Black",
                    detail: Some("Acid breath in a 5 by 30 ft. line."),
                    data: Some("acid"),
                },
                ChoiceOption {
                    value: "blue",
                    label: "Blue",
                    detail: Some("Lightning breath in a 5 by 30 ft. line."),
                    data: Some("lightning"),
                },
                ChoiceOption {
                    value: "gold",
                    label: "Gold",
                    detail: Some("Fire breath in a 15 ft. cone."),
                    data: Some("fire"),
                },
                ChoiceOption {
                    value: "silver",
                    label: "Silver",
                    detail: Some("Cold breath in a 15 ft. cone."),
                    data: Some("cold"),
                },
                ChoiceOption {
                    value: "green",
                    label: "Green",
                    detail: Some("Poison breath in a 15 ft. cone."),
                    data: Some("poison"),
                },
            ],
            max_picks: 1,
            prerequisite: None,
        }),
    },
    FeatureDef {
        id: "dragonborn-breath-weapon",
        level: 1,
        name: "Breath Weapon",
        description: "Exhale destructive energy of your ancestry's damage type.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "dragonborn-resistance",
        level: 1,
        name: "Damage Resistance",
        description: "Resistance to the damage type of your draconic ancestry.",
        kind: FeatureKind::Grant,
    },
];

const GNOME_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "gnome-darkvision",
        level: 1,
        name: "Darkvision",
        description: "See in dim light within 60 feet as if it were bright light.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "gnome-cunning",
        level: 1,
        name: "Gnome Cunning",
        description: "Advantage on Intelligence, Wisdom, and Charisma saves against magic.",
        kind: FeatureKind::Grant,
    },
];

const HALF_ELF_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "half-elf-darkvision",
        level: 1,
        name: "Darkvision",
        description: "See in dim light within 60 feet as if it were bright light.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "half-elf-fey-ancestry",
        level: 1,
        name: "Fey Ancestry",
        description: "Advantage on saves against being charmed; magic cannot put you to sleep.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "half-elf-versatility",
        level: 1,
        name: "Skill Versatility",
        description: "Gain proficiency in two skills of your choice.",
        kind: FeatureKind::Choice(ChoiceDef {
            prompt: "Choose two skills",
            options: SKILL_OPTIONS,
            max_picks: 2,
            prerequisite: None,
        }),
    },
];

const HALF_ORC_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "half-orc-darkvision",
        level: 1,
        name: "Darkvision",
        description: "See in dim light within 60 feet as if it were bright light.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "half-orc-menacing",
        level: 1,
        name: "Menacing",
        description: "Proficiency in the Intimidation skill.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "half-orc-relentless",
        level: 1,
        name: "Relentless Endurance",
        description: "Drop to 1 hit point instead of 0, once per long rest.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "half-orc-savage-attacks",
        level: 1,
        name: "Savage Attacks",
        description: "Roll one extra damage die on melee critical hits.",
        kind: FeatureKind::Grant,
    },
];

const TIEFLING_FEATURES: &[FeatureDef] = &[
    FeatureDef {
        id: "tiefling-darkvision",
        level: 1,
        name: "Darkvision",
        description: "See in dim light within 60 feet as if it were bright light.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "tiefling-hellish-resistance",
        level: 1,
        name: "Hellish Resistance",
        description: "Resistance to fire damage.",
        kind: FeatureKind::Grant,
    },
    FeatureDef {
        id: "tiefling-infernal-legacy",
        level: 1,
        name: "Infernal Legacy",
        description: "You know the Thaumaturgy cantrip; higher levels grant innate spells.",
        kind: FeatureKind::Grant,
    },
];

/// Features granted by a class, ordered by the level they are granted at.
pub fn class_features(class: Class) -> &'static [FeatureDef] {
    match class {
        Class::Barbarian => BARBARIAN_FEATURES,
        Class::Bard => BARD_FEATURES,
        Class::Cleric => CLERIC_FEATURES,
        Class::Druid => DRUID_FEATURES,
        Class::Fighter => FIGHTER_FEATURES,
        Class::Monk => MONK_FEATURES,
        Class::Paladin => PALADIN_FEATURES,
        Class::Ranger => RANGER_FEATURES,
        Class::Rogue => ROGUE_FEATURES,
        Class::Sorcerer => SORCERER_FEATURES,
        Class::Warlock => WARLOCK_FEATURES,
        Class::Wizard => WIZARD_FEATURES,
    }
}

/// Features granted by a race, matched by display name. Unknown races get
/// an empty slice.
pub fn race_features(race: &str) -> &'static [FeatureDef] {
    match race.trim().to_lowercase().as_str() {
        "dwarf" => DWARF_FEATURES,
        "elf" => ELF_FEATURES,
        "halfling" => HALFLING_FEATURES,
        "human" => HUMAN_FEATURES,
        "dragonborn" => DRAGONBORN_FEATURES,
        "gnome" => GNOME_FEATURES,
        "half-elf" => HALF_ELF_FEATURES,
        "half-orc" => HALF_ORC_FEATURES,
        "tiefling" => TIEFLING_FEATURES,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_class_has_features() {
        for class in Class::ALL {
            assert!(
                !class_features(class).is_empty(),
                "{class} has no features"
            );
        }
    }

    #[test]
    fn test_features_ordered_by_level() {
        for class in Class::ALL {
            let features = class_features(class);
            for pair in features.windows(2) {
                assert!(pair[0].level <= pair[1].level);
            }
        }
    }

    #[test]
    fn test_race_lookup() {
        assert!(!race_features("Dwarf").is_empty());
        assert!(!race_features("half-ELF").is_empty());
        assert!(race_features("Warforged").is_empty());
    }

    #[test]
    fn test_prerequisite_gating() {
        let maneuvers = FIGHTER_FEATURES
            .iter()
            .find(|feature| feature.id == "fighter-maneuvers")
            .unwrap();
        let FeatureKind::Choice(choice) = maneuvers.kind else {
            panic!("maneuvers should be a choice");
        };
        let prerequisite = choice.prerequisite.unwrap();

        let mut choices = HashMap::new();
        assert!(!prerequisite.satisfied_by(&choices));

        choices.insert("fighter-archetype".to_string(), "champion".to_string());
        assert!(!prerequisite.satisfied_by(&choices));

        choices.insert("fighter-archetype".to_string(), "battle-master".to_string());
        assert!(prerequisite.satisfied_by(&choices));
    }

    #[test]
    fn test_choice_options_carry_side_data() {
        let ancestry = DRAGONBORN_FEATURES
            .iter()
            .find(|feature| feature.id == "dragonborn-ancestry")
            .unwrap();
        let FeatureKind::Choice(choice) = ancestry.kind else {
            panic!("ancestry should be a choice");
        };
        let gold = choice
            .options
            .iter()
            .find(|option| option.value == "gold")
            .unwrap();
        assert_eq!(gold.data, Some("fire"));
        assert!(gold.detail.is_some());
    }
}
