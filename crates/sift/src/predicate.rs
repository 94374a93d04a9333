//! Filtering predicates over classified values and records.
//!
//! The two base predicates decide a single value; the two `required_*`
//! builders return reusable predicates that check named record fields with
//! short-circuiting AND semantics.

use crate::presence::Classify;
use crate::record::Record;

/// True unless the value is absent.
///
/// Null and every present value pass, including falsy ones.
///
/// ```
/// use sift::{is_set, Slot};
///
/// let items = vec![Slot::Value("ok"), Slot::Null, Slot::Absent];
/// let kept: Vec<_> = items.into_iter().filter(is_set).collect();
/// assert_eq!(kept, vec![Slot::Value("ok"), Slot::Null]);
/// ```
pub fn is_set<T: Classify>(value: &T) -> bool {
    value.presence().is_set()
}

/// True only for a present, non-null value.
///
/// ```
/// use sift::{not_nullable, Slot};
///
/// let items = vec![Slot::Value(0), Slot::Null, Slot::Absent];
/// let kept: Vec<_> = items.into_iter().filter(not_nullable).collect();
/// assert_eq!(kept, vec![Slot::Value(0)]);
/// ```
pub fn not_nullable<T: Classify>(value: &T) -> bool {
    value.presence().not_nullable()
}

/// Builds a predicate that checks every named key with [`is_set`] semantics.
///
/// Keys are checked left-to-right in the supplied order, short-circuiting on
/// the first failure. Keys that are not named pass through unexamined, and
/// an empty key list accepts every record.
///
/// ```
/// use serde_json::json;
/// use sift::required_is_set;
///
/// let rows = vec![json!({}), json!({"keys": "ok"})];
/// let kept: Vec<_> = rows.into_iter().filter(required_is_set(["keys"])).collect();
/// assert_eq!(kept, vec![json!({"keys": "ok"})]);
/// ```
pub fn required_is_set<R>(
    keys: impl IntoIterator<Item = impl AsRef<str>>,
) -> impl Fn(&R) -> bool
where
    R: Record,
{
    let keys = collect_keys(keys);
    move |row: &R| keys.iter().all(|key| row.presence_of(key).is_set())
}

/// Builds a predicate that checks every named key with [`not_nullable`]
/// semantics.
///
/// ```
/// use serde_json::json;
/// use sift::required_is_not_nullable;
///
/// let rows = vec![json!({}), json!({"keys": null}), json!({"keys": "ok"})];
/// let kept: Vec<_> = rows
///     .into_iter()
///     .filter(required_is_not_nullable(["keys"]))
///     .collect();
/// assert_eq!(kept, vec![json!({"keys": "ok"})]);
/// ```
pub fn required_is_not_nullable<R>(
    keys: impl IntoIterator<Item = impl AsRef<str>>,
) -> impl Fn(&R) -> bool
where
    R: Record,
{
    let keys = collect_keys(keys);
    move |row: &R| keys.iter().all(|key| row.presence_of(key).not_nullable())
}

fn collect_keys(keys: impl IntoIterator<Item = impl AsRef<str>>) -> Vec<String> {
    keys.into_iter().map(|key| key.as_ref().to_owned()).collect()
}
