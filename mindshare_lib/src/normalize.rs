//! Schema inference for leaderboard records.
//!
//! The upstream endpoint does not commit to field names, so each canonical
//! field is recovered by scanning the record's keys (in declaration order)
//! for a lower-cased substring match against a keyword table. The username
//! comes from the first matching key, whatever it holds; mindshare and rank
//! take the first matching key whose value coerces to a finite number.

use serde::Serialize;
use serde_json::{Map, Value};

/// Keywords identifying a username-like key.
pub const USERNAME_KEYS: &[&str] = &["username", "user", "handle", "twitter", "name", "creator"];
/// Keywords identifying a mindshare-like key.
pub const MINDSHARE_KEYS: &[&str] = &["mindshare", "score", "ms", "value", "points"];
/// Keywords identifying a rank-like key.
pub const RANK_KEYS: &[&str] = &["rank", "position"];

/// Canonical leaderboard row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedEntry {
    /// 1-based rank, either read from the record or synthesized from its page position.
    pub rank: f64,
    pub username: Option<String>,
    pub mindshare: Option<f64>,
    /// The untouched upstream record.
    pub raw: Map<String, Value>,
}

/// Position of a record within the paginated upstream result.
#[derive(Clone, Copy, Debug)]
pub struct RecordPosition {
    /// 1-based page number.
    pub page: u32,
    /// 0-based index within the page.
    pub index: usize,
    /// Assumed page size for rank synthesis.
    pub page_size_hint: u32,
}

impl RecordPosition {
    pub fn synthesized_rank(&self) -> f64 {
        (f64::from(self.page) - 1.0) * f64::from(self.page_size_hint) + (self.index as f64 + 1.0)
    }
}

/// Converts one upstream record into a [`NormalizedEntry`].
///
/// Returns `None` when the record is not a JSON object. The returned entry
/// always has a finite rank; `username` and `mindshare` may be absent.
pub fn normalize(record: &Value, position: RecordPosition) -> Option<NormalizedEntry> {
    let fields = record.as_object()?;

    let username = match first_matching_value(fields, USERNAME_KEYS) {
        Some(value) => clean_username(&stringify(value)),
        None => at_prefixed_value(fields).and_then(|name| clean_username(&name)),
    };
    let mindshare = first_match(fields, MINDSHARE_KEYS, coerce_finite);
    let rank = first_match(fields, RANK_KEYS, coerce_finite)
        .unwrap_or_else(|| position.synthesized_rank());

    Some(NormalizedEntry {
        rank,
        username,
        mindshare,
        raw: fields.clone(),
    })
}

fn key_matches(key: &str, keywords: &[&str]) -> bool {
    let key = key.to_lowercase();
    keywords.iter().any(|kw| key.contains(kw))
}

/// Value of the first key matching any keyword, whatever it holds.
fn first_matching_value<'a>(
    fields: &'a Map<String, Value>,
    keywords: &[&str],
) -> Option<&'a Value> {
    fields
        .iter()
        .find(|(key, _)| key_matches(key, keywords))
        .map(|(_, value)| value)
}

/// Returns the first extracted value among keys matching any keyword.
fn first_match<T>(
    fields: &Map<String, Value>,
    keywords: &[&str],
    extract: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    fields
        .iter()
        .filter(|(key, _)| key_matches(key, keywords))
        .find_map(|(_, value)| extract(value))
}

/// String form of a JSON value, the way the upstream's own JavaScript
/// clients render it (`null` is `"null"`, arrays join with commas).
fn stringify(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => stringify(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn at_prefixed_value(fields: &Map<String, Value>) -> Option<String> {
    fields
        .values()
        .filter_map(Value::as_str)
        .find(|s| s.starts_with('@'))
        .map(str::to_string)
}

fn clean_username(name: &str) -> Option<String> {
    let trimmed = name.trim();
    let stripped = trimmed.strip_prefix('@').unwrap_or(trimmed);
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// Loose numeric coercion with finite results only.
///
/// `null` and `false` are 0, `true` is 1, blank strings are 0, numeric
/// strings (decimal, or `0x`/`0o`/`0b` prefixed) parse, and an array
/// coerces through its comma-joined string form (`[]` is 0, `[5]` is 5,
/// `[1, 2]` is not a number). Objects never coerce.
pub fn coerce_finite(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => coerce_str(s)?,
        Value::Array(_) => coerce_str(&stringify(value))?,
        Value::Object(_) => return None,
    };
    n.is_finite().then_some(n)
}

fn coerce_str(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    let radix = match s.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    match radix {
        Some(radix) => u64::from_str_radix(&s[2..], radix).ok().map(|n| n as f64),
        // Rust accepts "inf"/"nan" spellings; they end up non-finite and are dropped.
        None => s.parse::<f64>().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at(page: u32, index: usize) -> RecordPosition {
        RecordPosition {
            page,
            index,
            page_size_hint: 100,
        }
    }

    #[test]
    fn username_key_is_taken_verbatim_minus_at_and_whitespace() {
        let entry = normalize(&json!({"username": "  @Alice_01 "}), at(1, 0)).unwrap();
        assert_eq!(entry.username.as_deref(), Some("Alice_01"));
    }

    #[test]
    fn only_one_leading_at_is_stripped() {
        let entry = normalize(&json!({"handle": "@@echo"}), at(1, 0)).unwrap();
        assert_eq!(entry.username.as_deref(), Some("@echo"));
    }

    #[test]
    fn first_matching_key_in_declaration_order_wins() {
        let entry = normalize(
            &json!({"displayName": "Display", "username": "real"}),
            at(1, 0),
        )
        .unwrap();
        assert_eq!(entry.username.as_deref(), Some("Display"));
    }

    #[test]
    fn key_matching_is_case_insensitive() {
        let entry = normalize(&json!({"TwitterHandle": "bob", "SCORE": 3}), at(1, 0)).unwrap();
        assert_eq!(entry.username.as_deref(), Some("bob"));
        assert_eq!(entry.mindshare, Some(3.0));
    }

    #[test]
    fn numeric_username_is_stringified() {
        let entry = normalize(&json!({"user": 42}), at(1, 0)).unwrap();
        assert_eq!(entry.username.as_deref(), Some("42"));
    }

    #[test]
    fn falls_back_to_at_prefixed_value() {
        let entry = normalize(&json!({"id": 7, "account": "@carol", "ms": 0.5}), at(1, 0)).unwrap();
        assert_eq!(entry.username.as_deref(), Some("carol"));
        assert_eq!(entry.mindshare, Some(0.5));
    }

    #[test]
    fn no_username_is_absent() {
        let entry = normalize(&json!({"id": 7, "score": 1}), at(1, 0)).unwrap();
        assert_eq!(entry.username, None);
    }

    #[test]
    fn blank_username_is_absent() {
        let entry = normalize(&json!({"username": " @ "}), at(1, 0)).unwrap();
        assert_eq!(entry.username, None);
    }

    #[test]
    fn mindshare_skips_non_numeric_matches() {
        let entry = normalize(
            &json!({"user": "dan", "scoreLabel": "high", "mindshare": "12.5"}),
            at(1, 0),
        )
        .unwrap();
        assert_eq!(entry.mindshare, Some(12.5));
    }

    #[test]
    fn non_finite_mindshare_is_skipped() {
        let entry = normalize(
            &json!({"user": "dan", "mindshare": "Infinity", "points": 4}),
            at(1, 0),
        )
        .unwrap();
        assert_eq!(entry.mindshare, Some(4.0));
    }

    #[test]
    fn explicit_rank_is_used() {
        let entry = normalize(&json!({"user": "eve", "position": "17"}), at(3, 0)).unwrap();
        assert_eq!(entry.rank, 17.0);
    }

    #[test]
    fn missing_rank_is_synthesized_from_position() {
        let entry = normalize(&json!({"user": "eve"}), at(2, 5)).unwrap();
        assert_eq!(entry.rank, 106.0);
    }

    #[test]
    fn unparsable_rank_falls_back_to_position() {
        let entry = normalize(&json!({"user": "eve", "rank": "n/a"}), at(1, 0)).unwrap();
        assert_eq!(entry.rank, 1.0);
    }

    #[test]
    fn non_object_records_are_rejected() {
        assert!(normalize(&json!("alice"), at(1, 0)).is_none());
        assert!(normalize(&json!(null), at(1, 0)).is_none());
        assert!(normalize(&json!([1, 2]), at(1, 0)).is_none());
    }

    #[test]
    fn raw_record_is_retained() {
        let record = json!({"user": "bob", "score": 10, "extra": true});
        let entry = normalize(&record, at(1, 0)).unwrap();
        assert_eq!(Value::Object(entry.raw), record);
    }

    #[test]
    fn coerce_treats_null_bool_and_blank_loosely() {
        assert_eq!(coerce_finite(&json!(null)), Some(0.0));
        assert_eq!(coerce_finite(&json!(true)), Some(1.0));
        assert_eq!(coerce_finite(&json!(false)), Some(0.0));
        assert_eq!(coerce_finite(&json!("")), Some(0.0));
        assert_eq!(coerce_finite(&json!("   ")), Some(0.0));
        assert_eq!(coerce_finite(&json!(" 2.5 ")), Some(2.5));
        assert_eq!(coerce_finite(&json!("0x1F")), Some(31.0));
    }

    #[test]
    fn coerce_arrays_through_their_string_form() {
        assert_eq!(coerce_finite(&json!([])), Some(0.0));
        assert_eq!(coerce_finite(&json!([5])), Some(5.0));
        assert_eq!(coerce_finite(&json!(["7"])), Some(7.0));
        assert_eq!(coerce_finite(&json!([null])), Some(0.0));
        assert_eq!(coerce_finite(&json!([1, 2])), None);
        assert_eq!(coerce_finite(&json!({"v": 1})), None);
        assert_eq!(coerce_finite(&json!("abc")), None);
    }

    #[test]
    fn null_mindshare_and_rank_coerce_to_zero() {
        let entry = normalize(
            &json!({"username": "bob", "mindshare": null, "rank": null}),
            at(1, 0),
        )
        .unwrap();
        assert_eq!(entry.mindshare, Some(0.0));
        assert_eq!(entry.rank, 0.0);
    }

    #[test]
    fn first_username_key_wins_even_when_null() {
        let entry = normalize(&json!({"displayName": null, "username": "bob"}), at(1, 0)).unwrap();
        assert_eq!(entry.username.as_deref(), Some("null"));
    }

    #[test]
    fn structured_username_values_are_stringified() {
        let entry = normalize(&json!({"user": {"id": 1}, "handle": "@bob"}), at(1, 0)).unwrap();
        assert_eq!(entry.username.as_deref(), Some("[object Object]"));

        let entry = normalize(&json!({"creator": ["a", null, "b"]}), at(1, 0)).unwrap();
        assert_eq!(entry.username.as_deref(), Some("a,,b"));
    }

    #[test]
    fn at_fallback_only_when_no_key_matches() {
        let entry = normalize(&json!({"name": "", "alias": "@carol"}), at(1, 0)).unwrap();
        assert_eq!(entry.username, None);
    }
}
