//! Decoding helpers shared by every endpoint.
//!
//! With the `tracing` feature enabled, fields present in an API response but
//! missing from the target type are logged as warnings, and decode failures
//! are logged with the JSON path that broke. Manifold adds fields to its
//! records regularly, so this is how drift shows up.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserialize an API response, reporting unknown fields.
///
/// Unknown fields never fail decoding. Missing or mistyped fields do, and the
/// failing path is logged before the error is returned.
#[cfg(feature = "tracing")]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    use std::any::type_name;

    tracing::trace!(
        type_name = %type_name::<T>(),
        json = %value,
        "deserializing JSON"
    );

    let original = value.clone();
    let mut unknown_paths: Vec<String> = Vec::new();

    let result: T = serde_ignored::deserialize(value, |path| {
        unknown_paths.push(path.to_string());
    })
    .inspect_err(|_| {
        let json_str = original.to_string();
        let jd = &mut serde_json::Deserializer::from_str(&json_str);
        let path_result: Result<T, _> = serde_path_to_error::deserialize(jd);
        if let Err(path_err) = path_result {
            let path = path_err.path().to_string();
            let value_display = format_value(lookup_value(&original, &path));

            tracing::error!(
                type_name = %type_name::<T>(),
                path = %path,
                value = %value_display,
                error = %path_err.inner(),
                "deserialization failed"
            );
        }
    })?;

    let type_name = type_name::<T>();
    for path in unknown_paths {
        let value_display = format_value(lookup_value(&original, &path));

        tracing::warn!(
            type_name = %type_name,
            field = %path,
            value = %value_display,
            "unknown field in API response"
        );
    }

    Ok(result)
}

/// Pass-through deserialization when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Look up a value by a `serde_ignored` or `serde_path_to_error` path.
///
/// `?` segments (Option wrappers) are skipped. Array indices may be written
/// as `bets.0` or `bets[0]`.
#[cfg(feature = "tracing")]
fn lookup_value<'value>(value: &'value Value, path: &str) -> Option<&'value Value> {
    let mut current = value;

    for segment in parse_path_segments(path) {
        if segment.is_empty() || segment == "?" {
            continue;
        }

        current = match current {
            Value::Object(map) => map.get(&segment)?,
            Value::Array(arr) => arr.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

/// `fills[2].amount` -> `["fills", "2", "amount"]`
#[cfg(feature = "tracing")]
fn parse_path_segments(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    let mut chars = path.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '.' | '[' => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
                if ch == '[' {
                    for inner in chars.by_ref() {
                        if inner == ']' {
                            break;
                        }
                        current.push(inner);
                    }
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
            ']' => {}
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

#[cfg(feature = "tracing")]
fn format_value(value: Option<&Value>) -> String {
    value.map_or_else(|| "<unable to retrieve>".to_owned(), Value::to_string)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Probe {
        contract_id: String,
        #[serde(default)]
        limit_prob: Option<f64>,
    }

    #[test]
    fn known_fields_decode() {
        let probe: Probe = deserialize_with_warnings(json!({
            "contractId": "c1",
            "limitProb": 0.4
        }))
        .expect("decode");

        assert_eq!(probe.contract_id, "c1");
        assert_eq!(probe.limit_prob, Some(0.4));
    }

    #[test]
    fn unknown_fields_do_not_fail() {
        let probe: Probe = deserialize_with_warnings(json!({
            "contractId": "c1",
            "visibility": "public",
            "isApi": true
        }))
        .expect("decode");

        assert_eq!(probe.limit_prob, None);
    }

    #[test]
    fn missing_required_field_fails() {
        let result: crate::Result<Probe> = deserialize_with_warnings(json!({ "limitProb": 0.5 }));

        let err = result.expect_err("contractId is required");
        assert_eq!(err.kind(), crate::error::Kind::Internal);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn lookup_follows_dots_and_brackets() {
        let value = json!({ "fills": [{ "amount": 10 }, { "amount": 25 }] });

        assert_eq!(lookup_value(&value, "fills[1].amount"), Some(&json!(25)));
        assert_eq!(lookup_value(&value, "fills.0.amount"), Some(&json!(10)));
        assert_eq!(lookup_value(&value, "?.fills.?.0"), Some(&json!({ "amount": 10 })));
        assert_eq!(lookup_value(&value, ""), Some(&value));
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn lookup_misses_return_none() {
        let value = json!({ "question": "Will it rain?", "fills": [1, 2] });

        assert_eq!(lookup_value(&value, "fills.9"), None);
        assert_eq!(lookup_value(&value, "fills.first"), None);
        assert_eq!(lookup_value(&value, "question.text"), None);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn format_value_renders_json_or_placeholder() {
        assert_eq!(format_value(Some(&json!([1, 2]))), "[1,2]");
        assert_eq!(format_value(Some(&json!("YES"))), "\"YES\"");
        assert_eq!(format_value(None), "<unable to retrieve>");
    }
}
