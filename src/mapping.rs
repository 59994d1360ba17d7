//! Conversion of model types into JSON-compatible mappings.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Insertion-ordered mapping from field names to JSON values.
pub type Mapping = Map<String, Value>;

/// Renders a model as an ordered mapping, one entry per field.
///
/// Every model type in the client implements this. Nested models embed
/// through [`ToMapping::to_value`] rather than as opaque objects, so a
/// mapping is plain JSON all the way down.
pub trait ToMapping {
    /// All of the model's fields, absent ones included as `null`
    fn to_mapping(&self) -> Mapping;

    /// The mapping wrapped as a JSON value, for embedding into another model
    fn to_value(&self) -> Value {
        Value::Object(self.to_mapping())
    }
}

/// Convert a sequence of models element-wise into a JSON array
pub fn sequence_to_value<T: ToMapping>(items: &[T]) -> Value {
    Value::Array(items.iter().map(ToMapping::to_value).collect())
}

/// Convert a keyed collection of models value-wise, preserving keys
pub fn keyed_to_value<T: ToMapping>(entries: &BTreeMap<String, T>) -> Value {
    Value::Object(
        entries
            .iter()
            .map(|(key, model)| (key.clone(), model.to_value()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct StatusModel {
        code: u32,
        note: Option<String>,
    }

    impl ToMapping for StatusModel {
        fn to_mapping(&self) -> Mapping {
            let mut out = Mapping::new();
            out.insert("code".to_string(), json!(self.code));
            out.insert(
                "note".to_string(),
                self.note.clone().map(Value::String).unwrap_or(Value::Null),
            );
            out
        }
    }

    #[test]
    fn test_to_value_wraps_the_mapping_as_an_object() {
        let model = StatusModel {
            code: 200,
            note: None,
        };

        assert_eq!(model.to_value(), json!({"code": 200, "note": null}));
    }

    #[test]
    fn test_sequence_converts_each_element() {
        let items = vec![
            StatusModel {
                code: 200,
                note: Some("ok".to_string()),
            },
            StatusModel {
                code: 500,
                note: None,
            },
        ];

        assert_eq!(
            sequence_to_value(&items),
            json!([
                {"code": 200, "note": "ok"},
                {"code": 500, "note": null},
            ])
        );
    }

    #[test]
    fn test_keyed_converts_values_and_preserves_keys() {
        let mut entries = BTreeMap::new();
        entries.insert(
            "first".to_string(),
            StatusModel {
                code: 200,
                note: None,
            },
        );
        entries.insert(
            "second".to_string(),
            StatusModel {
                code: 404,
                note: Some("missing".to_string()),
            },
        );

        assert_eq!(
            keyed_to_value(&entries),
            json!({
                "first": {"code": 200, "note": null},
                "second": {"code": 404, "note": "missing"},
            })
        );
    }
}
