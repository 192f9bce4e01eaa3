//! The state store: a coerced in-memory cache over the persistence slot.
//!
//! A store is constructed explicitly and passed by reference to whoever
//! needs it; there is no module-level singleton. Construction performs the
//! one-time load-and-clean; every `set` coerces, updates the cache and
//! persists the full state best-effort.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::state::codec::{decode_state, encode_state, StateMap};
use crate::state::coerce;
use crate::state::slot::{FileSlot, MemorySlot, PersistenceSlot};

/// Well-known state keys.
pub mod keys {
    pub const STUDENT_ACTIVITIES: &str = "student_activities";
    pub const ATTACHMENTS: &str = "attachments";
    pub const EXAM_DATE: &str = "exam_date";
    pub const TARGET_SCORE: &str = "target_score";
    pub const USERS: &str = "users";
    pub const CURRENT_USER: &str = "currentUser";
}

pub struct StateStore {
    cache: StateMap,
    slot: Box<dyn PersistenceSlot>,
}

impl StateStore {
    /// Build a store over the given slot, loading and cleaning its content.
    ///
    /// An unreadable slot loads as empty state; every known field then takes
    /// its coerced default. This is the only point where the slot is read.
    pub fn new(slot: Box<dyn PersistenceSlot>) -> Self {
        let raw = match slot.read() {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("warning: state slot unreadable, starting empty: {e}");
                None
            }
        };
        let loaded = decode_state(raw.as_deref());
        Self {
            cache: clean_initial_state(&loaded),
            slot,
        }
    }

    /// File-backed store under the default data directory, falling back to
    /// a memory-only store when durable storage is unavailable.
    pub fn open_default() -> Self {
        match FileSlot::open() {
            Ok(slot) => Self::new(Box::new(slot)),
            Err(e) => {
                eprintln!("warning: falling back to in-memory state: {e}");
                Self::new(Box::new(MemorySlot::new()))
            }
        }
    }

    /// The cached value for `key`, or `fallback` when the key is absent,
    /// null, or not deserializable as `T`. Never mutates, never errors.
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.cache.get(key) {
            None | Some(Value::Null) => fallback,
            Some(value) => serde_json::from_value(value.clone()).unwrap_or(fallback),
        }
    }

    /// Coerce `value` per the key's rule, update the cache and persist the
    /// full state. Persistence failure is swallowed: the cache update always
    /// sticks, sets apply in program order, last write wins per key.
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) {
        let value = to_value(value);
        let coerced = coerce_for_key(key, value);
        self.cache.insert(key.to_string(), coerced);
        self.persist();
    }

    /// Raw cached value, mainly for diagnostics.
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.cache.get(key)
    }

    fn persist(&self) {
        let token = encode_state(&self.cache);
        if let Err(e) = self.slot.write(&token) {
            eprintln!("warning: state persist failed, cache kept in memory: {e}");
        }
    }
}

fn to_value<T: Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

fn coerce_for_key(key: &str, value: Value) -> Value {
    match key {
        keys::STUDENT_ACTIVITIES => to_value(coerce::coerce_activities(&value).into_inner()),
        keys::ATTACHMENTS => to_value(coerce::coerce_attachments(&value).into_inner()),
        keys::EXAM_DATE => Value::String(coerce::coerce_exam_date(&value).into_inner()),
        keys::TARGET_SCORE => to_value(coerce::coerce_target_score(&value).into_inner()),
        _ => value,
    }
}

/// Apply every per-key coercion rule to freshly decoded state.
///
/// `users` must be an object and `currentUser` an object or null; both are
/// otherwise passed through untouched (auth owns their internals).
fn clean_initial_state(loaded: &StateMap) -> StateMap {
    let missing = Value::Null;
    let field = |key: &str| loaded.get(key).unwrap_or(&missing);

    let mut cache = StateMap::new();
    cache.insert(
        keys::STUDENT_ACTIVITIES.into(),
        to_value(coerce::coerce_activities(field(keys::STUDENT_ACTIVITIES)).into_inner()),
    );
    cache.insert(
        keys::ATTACHMENTS.into(),
        to_value(coerce::coerce_attachments(field(keys::ATTACHMENTS)).into_inner()),
    );
    cache.insert(
        keys::EXAM_DATE.into(),
        Value::String(coerce::coerce_exam_date(field(keys::EXAM_DATE)).into_inner()),
    );
    cache.insert(
        keys::TARGET_SCORE.into(),
        to_value(coerce::coerce_target_score(field(keys::TARGET_SCORE)).into_inner()),
    );
    cache.insert(
        keys::USERS.into(),
        match field(keys::USERS) {
            Value::Object(m) => Value::Object(m.clone()),
            _ => Value::Object(Default::default()),
        },
    );
    cache.insert(
        keys::CURRENT_USER.into(),
        match field(keys::CURRENT_USER) {
            Value::Object(m) => Value::Object(m.clone()),
            _ => Value::Null,
        },
    );
    cache
}
