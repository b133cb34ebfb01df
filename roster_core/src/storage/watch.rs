//! Change notification for a single watched record.
//!
//! An external actor overwriting a record delivers an untyped payload here;
//! only payloads that decode to a character with a populated ID and name
//! reach the callback. Delivery is last-writer-wins with no conflict
//! detection against local edits.

use serde_json::Value;
use tracing::debug;

use crate::character::{Character, CharacterId};

/// Watches one character ID and forwards valid updates to a callback.
pub struct RecordWatch<F: FnMut(Character)> {
    id: CharacterId,
    callback: F,
}

impl<F: FnMut(Character)> RecordWatch<F> {
    pub fn new(id: CharacterId, callback: F) -> Self {
        Self { id, callback }
    }

    pub fn watched_id(&self) -> CharacterId {
        self.id
    }

    /// Feed one raw payload. Returns whether it was delivered. Malformed
    /// payloads and records for other IDs are dropped with a diagnostic.
    pub fn deliver(&mut self, payload: &Value) -> bool {
        let character: Character = match serde_json::from_value(payload.clone()) {
            Ok(character) => character,
            Err(error) => {
                debug!(%error, "dropping malformed change payload");
                return false;
            }
        };
        if character.id.is_nil() || character.name.trim().is_empty() {
            debug!("dropping change payload without id/name");
            return false;
        }
        if character.id != self.id {
            debug!(%character.id, watched = %self.id, "dropping change payload for unwatched record");
            return false;
        }
        (self.callback)(character);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules_core::Class;
    use std::cell::RefCell;

    fn payload_for(character: &Character) -> Value {
        serde_json::to_value(character).unwrap()
    }

    #[test]
    fn test_delivers_matching_record() {
        let character = Character::new("Watched", Class::Druid);
        let received = RefCell::new(Vec::new());
        let mut watch = RecordWatch::new(character.id, |update: Character| {
            received.borrow_mut().push(update.name);
        });

        assert!(watch.deliver(&payload_for(&character)));
        assert_eq!(received.borrow().as_slice(), ["Watched"]);
    }

    #[test]
    fn test_drops_other_ids() {
        let watched = Character::new("Watched", Class::Druid);
        let other = Character::new("Other", Class::Rogue);
        let mut watch = RecordWatch::new(watched.id, |_| panic!("should not deliver"));
        assert!(!watch.deliver(&payload_for(&other)));
    }

    #[test]
    fn test_drops_malformed_payloads() {
        let watched = Character::new("Watched", Class::Druid);
        let mut watch = RecordWatch::new(watched.id, |_| panic!("should not deliver"));

        assert!(!watch.deliver(&serde_json::json!({"id": "not-a-uuid"})));
        assert!(!watch.deliver(&serde_json::json!(42)));

        let mut nameless = watched.clone();
        nameless.name = "   ".to_string();
        assert!(!watch.deliver(&payload_for(&nameless)));
    }
}
