//! Record operations over `serde_json` values.
//!
//! JSON objects are records; arrays and scalars are leaves. JSON has no
//! undefined value: an absent key is the undefined case, and `null` is an
//! ordinary value that overwrites. Both operations insist that their
//! top-level arguments are objects and report
//! [`RecordError::TypeMismatch`] otherwise; below the top level a shape
//! mismatch simply lets the delta win.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::RecordError;
use super::merge::DeepMerge;

const OBJECT: &str = "object";

/// Kind name of a JSON value, as used in [`RecordError::TypeMismatch`].
#[must_use]
pub const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => OBJECT,
    }
}

impl DeepMerge for Map<String, Value> {
    fn deep_merge(mut self, delta: Self) -> Self {
        for (key, delta_value) in delta {
            match self.get_mut(&key) {
                Some(slot) => {
                    let main_value = std::mem::take(slot);
                    *slot = main_value.deep_merge(delta_value);
                }
                None => {
                    self.insert(key, delta_value);
                }
            }
        }
        self
    }
}

impl DeepMerge for Value {
    fn deep_merge(self, delta: Self) -> Self {
        match (self, delta) {
            (Self::Object(main), Self::Object(delta)) => Self::Object(main.deep_merge(delta)),
            (_, delta) => delta,
        }
    }
}

/// Deep-merges two JSON objects.
///
/// Key order follows `main`, with keys that only `delta` has appended in
/// `delta` order.
///
/// # Errors
///
/// Returns [`RecordError::TypeMismatch`] if `main` or `delta` is not an
/// object.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use funclib::record::merge_json;
///
/// let merged = merge_json(
///     json!({ "a": 1, "b": { "c": 2 } }),
///     json!({ "b": { "c": 3, "d": 4 }, "e": 5 }),
/// )?;
/// assert_eq!(merged, json!({ "a": 1, "b": { "c": 3, "d": 4 }, "e": 5 }));
/// # Ok::<(), funclib::record::RecordError>(())
/// ```
pub fn merge_json(main: Value, delta: Value) -> Result<Value, RecordError> {
    let (main, delta) = top_level_objects(main, delta)?;
    Ok(Value::Object(main.deep_merge(delta)))
}

fn top_level_objects(
    main: Value,
    delta: Value,
) -> Result<(Map<String, Value>, Map<String, Value>), RecordError> {
    match (main, delta) {
        (Value::Object(main), Value::Object(delta)) => Ok((main, delta)),
        (Value::Object(_), delta) => Err(RecordError::type_mismatch(OBJECT, kind_of(&delta))),
        (main, _) => Err(RecordError::type_mismatch(OBJECT, kind_of(&main))),
    }
}

/// Maps every value of a JSON object, keeping its keys and their order.
///
/// # Errors
///
/// Returns [`RecordError::TypeMismatch`] if `record` is not an object.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use funclib::record::map_json_values;
///
/// let doubled = map_json_values(&json!({ "x": 1, "y": 2 }), |value| {
///     value.as_i64().map_or(Value::Null, |number| json!(number * 2))
/// })?;
/// assert_eq!(doubled, json!({ "x": 2, "y": 4 }));
/// # Ok::<(), funclib::record::RecordError>(())
/// ```
pub fn map_json_values<F>(record: &Value, mut conversion: F) -> Result<Value, RecordError>
where
    F: FnMut(&Value) -> Value,
{
    match record {
        Value::Object(entries) => Ok(Value::Object(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), conversion(value)))
                .collect(),
        )),
        other => Err(RecordError::type_mismatch(OBJECT, kind_of(other))),
    }
}

/// Deep-merges two serializable values through their JSON form.
///
/// `Option::None` fields serialize to `null`; here they are treated as
/// undefined, so a `None` in `delta` keeps the value from `main` when `main`
/// has that key. A key that only `delta` has is carried through as is, even
/// when its value is `null`.
///
/// # Errors
///
/// Returns [`RecordError::TypeMismatch`] if either value does not serialize
/// to an object, and [`RecordError::Conversion`] if serialization fails or
/// the merged object does not deserialize back into `T`.
///
/// # Examples
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use funclib::record::merge_serialized;
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Settings {
///     theme: Option<String>,
///     font_size: Option<u8>,
/// }
///
/// let main = Settings { theme: Some("dark".into()), font_size: Some(12) };
/// let delta = Settings { theme: None, font_size: Some(14) };
///
/// let merged = merge_serialized(&main, &delta)?;
/// assert_eq!(merged, Settings { theme: Some("dark".into()), font_size: Some(14) });
/// # Ok::<(), funclib::record::RecordError>(())
/// ```
pub fn merge_serialized<T>(main: &T, delta: &T) -> Result<T, RecordError>
where
    T: Serialize + DeserializeOwned,
{
    let (main, delta) = top_level_objects(serde_json::to_value(main)?, serde_json::to_value(delta)?)?;
    Ok(serde_json::from_value(Value::Object(merge_defined(main, delta)))?)
}

/// Like [`DeepMerge`] for maps, except that a `null` delta does not overwrite
/// an existing main value.
fn merge_defined(mut main: Map<String, Value>, delta: Map<String, Value>) -> Map<String, Value> {
    for (key, delta_value) in delta {
        match main.get_mut(&key) {
            Some(_) if delta_value.is_null() => {}
            Some(slot) => {
                *slot = match (std::mem::take(slot), delta_value) {
                    (Value::Object(main_entries), Value::Object(delta_entries)) => {
                        Value::Object(merge_defined(main_entries, delta_entries))
                    }
                    (_, delta_value) => delta_value,
                };
            }
            None => {
                main.insert(key, delta_value);
            }
        }
    }
    main
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_a_defined_value() {
        let merged = merge_json(json!({ "a": 1 }), json!({ "a": null })).unwrap();
        assert_eq!(merged, json!({ "a": null }));
    }

    #[test]
    fn test_arrays_are_leaves() {
        let merged = merge_json(json!({ "a": [1, 2] }), json!({ "a": [3] })).unwrap();
        assert_eq!(merged, json!({ "a": [3] }));
    }

    #[test]
    fn test_key_order_follows_main_then_delta() {
        let merged = merge_json(json!({ "z": 1, "a": 2 }), json!({ "m": 3, "z": 4 })).unwrap();
        let keys: Vec<&str> = merged
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_null_delta_keeps_present_main_value_only() {
        let main = Map::from_iter([("kept".to_string(), json!(1))]);
        let delta = Map::from_iter([
            ("kept".to_string(), Value::Null),
            ("added".to_string(), Value::Null),
        ]);

        assert_eq!(
            Value::Object(merge_defined(main, delta)),
            json!({ "kept": 1, "added": null })
        );
    }

    #[test]
    fn test_non_object_delta_is_rejected() {
        assert_eq!(
            merge_json(json!({}), json!([1])),
            Err(RecordError::TypeMismatch {
                expected: "object",
                found: "array"
            })
        );
    }
}
