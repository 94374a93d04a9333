//! Three-state value classification: absent, null, or present.
//!
//! A [`Slot`] distinguishes a value that was never supplied ([`Slot::Absent`])
//! from one that was explicitly emptied ([`Slot::Null`]) and from an actual
//! value ([`Slot::Value`]). The [`Classify`] trait extends the same
//! classification to `Option`s, JSON values, and plain present values so the
//! predicate functions can accept any of them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Classification of a value into exactly one of three buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Presence {
    /// The value was never supplied.
    Absent,
    /// The value was supplied as an explicit empty marker.
    Null,
    /// Any other value, including falsy ones (`0`, `""`, `false`).
    Present,
}

impl Presence {
    /// True unless the value is absent. Null counts as set.
    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// True only for a present, non-null value.
    #[must_use]
    pub const fn not_nullable(self) -> bool {
        matches!(self, Self::Present)
    }
}

/// A value slot that may be absent, explicitly null, or hold a value.
///
/// `Slot<T>` is the named form of the nested `Option<Option<T>>` idiom and
/// converts losslessly in both directions:
///
/// ```
/// use sift::Slot;
///
/// assert_eq!(Slot::from(Some(Some(5))), Slot::Value(5));
/// assert_eq!(Slot::<i32>::from(Some(None)), Slot::Null);
/// assert_eq!(Slot::<i32>::from(None), Slot::Absent);
/// ```
///
/// With serde, a missing field deserializes to [`Slot::Absent`] (via
/// `#[serde(default)]`) while an explicit JSON `null` deserializes to
/// [`Slot::Null`]. Serializing [`Slot::Absent`] writes `null` unless the
/// field is skipped with `#[serde(skip_serializing_if = "Slot::is_absent")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot<T> {
    /// Never supplied.
    Absent,
    /// Supplied as an explicit empty marker.
    Null,
    /// Supplied with a value.
    Value(T),
}

impl<T> Slot<T> {
    /// Returns the classification of this slot.
    #[must_use]
    pub const fn presence(&self) -> Presence {
        match self {
            Self::Absent => Presence::Absent,
            Self::Null => Presence::Null,
            Self::Value(_) => Presence::Present,
        }
    }

    /// True if the slot was never supplied.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// True if the slot holds the explicit empty marker.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True if the slot holds a value.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Converts from `&Slot<T>` to `Slot<&T>`.
    #[must_use]
    pub const fn as_ref(&self) -> Slot<&T> {
        match self {
            Self::Absent => Slot::Absent,
            Self::Null => Slot::Null,
            Self::Value(value) => Slot::Value(value),
        }
    }

    /// Returns the held value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    /// Maps the held value, preserving absent and null states.
    pub fn map<U, F>(self, f: F) -> Slot<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Absent => Slot::Absent,
            Self::Null => Slot::Null,
            Self::Value(value) => Slot::Value(f(value)),
        }
    }

    /// Narrows away the absent state.
    ///
    /// `None` iff the slot was absent; a surviving null becomes `Some(None)`.
    #[must_use]
    pub fn into_set(self) -> Option<Option<T>> {
        match self {
            Self::Absent => None,
            Self::Null => Some(None),
            Self::Value(value) => Some(Some(value)),
        }
    }

    /// Narrows away both the absent and the null state.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<Option<T>>> for Slot<T> {
    fn from(nested: Option<Option<T>>) -> Self {
        match nested {
            None => Self::Absent,
            Some(None) => Self::Null,
            Some(Some(value)) => Self::Value(value),
        }
    }
}

impl<T> From<Slot<T>> for Option<Option<T>> {
    fn from(slot: Slot<T>) -> Self {
        slot.into_set()
    }
}

impl<T: Serialize> Serialize for Slot<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(value) => serializer.serialize_some(value),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Slot<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            None => Self::Null,
            Some(value) => Self::Value(value),
        })
    }
}

/// Types whose values classify as absent, null, or present.
///
/// Classification is total: every value falls into exactly one bucket.
///
/// | Input | `Absent` | `Null` | `Present` |
/// |---|---|---|---|
/// | `Slot<T>` | `Absent` | `Null` | `Value(_)` |
/// | `Option<T>` | `None` | `Some(inner)` where `inner` is empty | `Some(_)` |
/// | `Option<Option<T>>` | `None` | `Some(None)` | `Some(Some(_))` |
/// | `serde_json::Value` | — | `Value::Null` | anything else |
///
/// A held primitive, string, or unit-like value is always `Present`;
/// implement `Classify` the same way for your own leaf types.
pub trait Classify {
    /// Returns the classification of this value.
    fn presence(&self) -> Presence;
}

impl<T> Classify for Slot<T> {
    fn presence(&self) -> Presence {
        Self::presence(self)
    }
}

impl<T: Classify> Classify for Option<T> {
    fn presence(&self) -> Presence {
        match self {
            None => Presence::Absent,
            // An inner emptiness was still explicitly supplied.
            Some(value) => match value.presence() {
                Presence::Absent => Presence::Null,
                presence => presence,
            },
        }
    }
}

impl Classify for serde_json::Value {
    fn presence(&self) -> Presence {
        if self.is_null() {
            Presence::Null
        } else {
            Presence::Present
        }
    }
}

impl<C: Classify + ?Sized> Classify for &C {
    fn presence(&self) -> Presence {
        C::presence(self)
    }
}

impl Classify for str {
    fn presence(&self) -> Presence {
        Presence::Present
    }
}

macro_rules! impl_classify_present {
    ($($ty:ty),* $(,)?) => {
        $(impl Classify for $ty {
            fn presence(&self) -> Presence {
                Presence::Present
            }
        })*
    };
}

impl_classify_present!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);
