//! String-keyed record access for the `required_*` predicates.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use serde_json::{Map, Value};

use crate::presence::{Classify, Presence};

/// Anything that can report the [`Presence`] of a named field.
///
/// Looking up a key the record does not carry yields [`Presence::Absent`];
/// the lookup itself never fails. Record shape beyond direct key access is
/// opaque to this crate.
pub trait Record {
    /// Returns the classification of the value stored under `key`.
    fn presence_of(&self, key: &str) -> Presence;
}

impl Record for Map<String, Value> {
    fn presence_of(&self, key: &str) -> Presence {
        self.get(key).map_or(Presence::Absent, |value| value.presence())
    }
}

/// Non-object values report every key as absent.
impl Record for Value {
    fn presence_of(&self, key: &str) -> Presence {
        self.as_object()
            .map_or(Presence::Absent, |map| map.presence_of(key))
    }
}

impl<K, V, S> Record for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: Classify,
    S: BuildHasher,
{
    fn presence_of(&self, key: &str) -> Presence {
        self.get(key).map_or(Presence::Absent, |value| value.presence())
    }
}

impl<K, V> Record for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Classify,
{
    fn presence_of(&self, key: &str) -> Presence {
        self.get(key).map_or(Presence::Absent, |value| value.presence())
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn presence_of(&self, key: &str) -> Presence {
        R::presence_of(self, key)
    }
}
