use serde_json::Value;

/// Collects the string bound to `"type"` in `value` and its nested objects.
///
/// An object with a string `"type"` yields that string and nothing below it.
/// Any other object is searched value by value, which includes a non-string
/// `"type"` value. Arrays and scalars yield nothing; elements of arrays are
/// never visited.
pub fn collect_types(value: &Value) -> Vec<String> {
    let mut types = Vec::new();
    collect_into(value, &mut types);
    types
}

/// Collects types from every top-level value of `root`.
///
/// The root object itself is not checked for a `"type"` key.
pub fn collect_document_types(root: &Value) -> Vec<String> {
    let mut types = Vec::new();
    if let Value::Object(map) = root {
        for value in map.values() {
            collect_into(value, &mut types);
        }
    }
    tracing::debug!(count = types.len(), "collected types");
    types
}

fn collect_into(value: &Value, types: &mut Vec<String>) {
    let map = match value {
        Value::Object(map) => map,
        _ => return,
    };

    if let Some(Value::String(ty)) = map.get("type") {
        types.push(ty.clone());
        return;
    }

    for value in map.values() {
        collect_into(value, types);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn scalars_and_arrays_yield_nothing() {
        assert!(collect_types(&json!(null)).is_empty());
        assert!(collect_types(&json!("type")).is_empty());
        assert!(collect_types(&json!(42)).is_empty());
        assert!(collect_types(&json!([{"type": "hidden"}])).is_empty());
    }

    #[test]
    fn string_type_short_circuits() {
        let value = json!({
            "type": "outer",
            "child": {"type": "inner"},
        });
        assert_eq!(collect_types(&value), ["outer"]);
    }

    #[test]
    fn non_string_type_is_recursed_into() {
        let value = json!({
            "type": {"a": {"type": "enum"}, "b": {"type": "number"}},
            "default": {"type": "string"},
        });
        assert_eq!(collect_types(&value), ["enum", "number", "string"]);
    }

    #[test]
    fn numeric_type_falls_through_to_children() {
        let value = json!({"type": 3, "nested": {"type": "color"}});
        assert_eq!(collect_types(&value), ["color"]);
    }

    #[test]
    fn arrays_under_objects_are_opaque() {
        let value = json!({
            "layers": {
                "values": [{"type": "fill"}, {"type": "line"}],
                "spec": {"type": "array"},
            }
        });
        assert_eq!(collect_types(&value), ["array"]);
    }

    #[test]
    fn duplicates_kept_in_document_order() {
        let value = json!({
            "b": {"type": "number"},
            "a": {"inner": {"type": "color"}},
            "c": {"type": "number"},
        });
        assert_eq!(collect_types(&value), ["number", "color", "number"]);
    }

    #[test]
    fn document_root_type_is_ignored() {
        let root = json!({
            "type": "root",
            "$version": 8,
            "paint": {"type": "enum"},
            "layout": {"visibility": {"type": "enum"}},
        });
        assert_eq!(collect_document_types(&root), ["enum", "enum"]);
    }

    #[test]
    fn document_without_types_is_empty() {
        let root = json!({"a": {"b": [1, 2]}, "c": "type", "d": {"kind": "x"}});
        assert!(collect_document_types(&root).is_empty());
        assert!(collect_document_types(&json!(["not", "an", "object"])).is_empty());
    }

    #[test]
    fn collection_is_repeatable() {
        let root = json!({
            "a": {"type": "x"},
            "b": {"c": {"type": "y"}, "d": {"type": {"e": {"type": "z"}}}},
        });
        let first = collect_document_types(&root);
        let second = collect_document_types(&root);
        assert_eq!(first, ["x", "y", "z"]);
        assert_eq!(first, second);
    }
}
