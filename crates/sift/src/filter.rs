//! Vec-based filtering helpers with narrowed output types.

use crate::predicate::{required_is_not_nullable, required_is_set};
use crate::presence::Slot;
use crate::record::Record;

/// Drops absent items; survivors keep their null state as `None`.
pub fn filter_set<T>(items: Vec<Slot<T>>) -> Vec<Option<T>> {
    items.into_iter().filter_map(Slot::into_set).collect()
}

/// Drops absent and null items, keeping only held values.
pub fn filter_not_nullable<T>(items: Vec<Slot<T>>) -> Vec<T> {
    items.into_iter().filter_map(Slot::into_value).collect()
}

/// Keeps rows whose named keys are all set.
pub fn filter_required_is_set<R: Record>(
    rows: Vec<R>,
    keys: impl IntoIterator<Item = impl AsRef<str>>,
) -> Vec<R> {
    let pred = required_is_set(keys);
    rows.into_iter().filter(|row| pred(row)).collect()
}

/// Keeps rows whose named keys are all set and non-null.
pub fn filter_required_is_not_nullable<R: Record>(
    rows: Vec<R>,
    keys: impl IntoIterator<Item = impl AsRef<str>>,
) -> Vec<R> {
    let pred = required_is_not_nullable(keys);
    rows.into_iter().filter(|row| pred(row)).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn scalar_fixture() -> Vec<Slot<Value>> {
        vec![
            Slot::Value(json!("valid")),
            Slot::Null,
            Slot::Absent,
            Slot::Value(json!(0)),
            Slot::Value(json!(false)),
        ]
    }

    #[test]
    fn filter_set_removes_only_absent() {
        let kept = filter_set(scalar_fixture());
        assert_eq!(
            kept,
            vec![
                Some(json!("valid")),
                None,
                Some(json!(0)),
                Some(json!(false)),
            ]
        );
    }

    #[test]
    fn filter_not_nullable_removes_absent_and_null() {
        let kept = filter_not_nullable(scalar_fixture());
        assert_eq!(kept, vec![json!("valid"), json!(0), json!(false)]);
    }

    #[test]
    fn record_filters_preserve_row_order() {
        let rows = vec![
            json!({"key": "valid"}),
            json!({"key": null}),
            json!({}),
            json!({"key": 0}),
            json!({"key": false}),
        ];

        let set = filter_required_is_set(rows.clone(), ["key"]);
        assert_eq!(
            set,
            vec![
                json!({"key": "valid"}),
                json!({"key": null}),
                json!({"key": 0}),
                json!({"key": false}),
            ]
        );

        let non_null = filter_required_is_not_nullable(rows, ["key"]);
        assert_eq!(
            non_null,
            vec![json!({"key": "valid"}), json!({"key": 0}), json!({"key": false})]
        );
    }

    #[test]
    fn record_filtering_is_idempotent() {
        let rows = vec![json!({"key": null}), json!({}), json!({"key": 1})];
        let once = filter_required_is_not_nullable(rows, ["key"]);
        let twice = filter_required_is_not_nullable(once.clone(), ["key"]);
        assert_eq!(once, twice);
    }
}
