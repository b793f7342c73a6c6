use serde_json::Value;

/// Finds the record list inside an arbitrary leaderboard response body.
///
/// Tries, in order: the body itself if it is an array, a `data` array, an
/// `items` array, then the first array-valued top-level field. Anything else
/// yields an empty slice, which callers treat as end of data.
pub fn extract_records(body: &Value) -> &[Value] {
    match body {
        Value::Array(records) => records,
        Value::Object(fields) => {
            for key in ["data", "items"] {
                if let Some(Value::Array(records)) = fields.get(key) {
                    return records;
                }
            }
            fields
                .values()
                .find_map(|v| v.as_array())
                .map(Vec::as_slice)
                .unwrap_or(&[])
        }
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_is_the_list() {
        let body = json!([{"user": "a"}, {"user": "b"}]);
        assert_eq!(extract_records(&body).len(), 2);
    }

    #[test]
    fn data_wins_over_items() {
        let body = json!({"items": [1, 2, 3], "data": [1]});
        assert_eq!(extract_records(&body), &[json!(1)]);
    }

    #[test]
    fn falls_back_to_first_array_field_in_declaration_order() {
        let body = json!({"meta": {"page": 1}, "leaders": [{"user": "x"}], "other": [1, 2]});
        assert_eq!(extract_records(&body).len(), 1);
    }

    #[test]
    fn non_array_data_is_ignored() {
        let body = json!({"data": {"rows": 3}, "rows": [1, 2]});
        assert_eq!(extract_records(&body).len(), 2);
    }

    #[test]
    fn scalars_and_null_yield_nothing() {
        assert!(extract_records(&Value::Null).is_empty());
        assert!(extract_records(&json!("hello")).is_empty());
        assert!(extract_records(&json!({"total": 0})).is_empty());
    }
}
