//! Validation helpers shared by the input boxes.
//!
//! Each routine checks a candidate that was supplied programmatically (for
//! example loaded from a task file) rather than produced interactively. Type
//! mismatches are reported as an `Err` message, never as a panic.

use serde_json::Value;

use crate::{ParamKind, SweepEntry, TeamSlot, json_type_name};

/// Validate a candidate against one of the scalar kinds.
///
/// Integers are acceptable where a real is required. `List` accepts any array.
pub fn validate_scalar(candidate: &Value, kind: ParamKind) -> Result<(), String> {
    let accepted = match kind {
        ParamKind::Integer => candidate.as_i64().is_some() || candidate.as_u64().is_some(),
        ParamKind::Real => candidate.is_number(),
        ParamKind::Text => candidate.is_string(),
        ParamKind::Boolean => candidate.is_boolean(),
        ParamKind::List => candidate.is_array(),
    };
    if accepted {
        Ok(())
    } else {
        Err(format!("expected {}, not {}", kind, json_type_name(candidate)))
    }
}

/// Validate a serialized sweep plan: a list of `"A-B-T"` strings.
///
/// The first failing element determines the message.
pub fn validate_sweep_tokens(candidate: &Value) -> Result<(), String> {
    for item in string_items(candidate)? {
        item.parse::<SweepEntry>().map_err(|error| error.to_string())?;
    }
    Ok(())
}

/// Validate a team list: each element empty, `zhanli`, or `A-B` in range.
pub fn validate_team_tokens(candidate: &Value) -> Result<(), String> {
    for item in string_items(candidate)? {
        item.parse::<TeamSlot>().map_err(|error| error.to_string())?;
    }
    Ok(())
}

fn string_items(candidate: &Value) -> Result<Vec<&str>, String> {
    let Value::Array(items) = candidate else {
        return Err(format!("expected list, not {}", json_type_name(candidate)));
    };
    items
        .iter()
        .map(|item| {
            item.as_str()
                .ok_or_else(|| format!("every item of the list must be a string, but found {}", json_type_name(item)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_kind_rejects_reals_and_strings() {
        assert!(validate_scalar(&json!(4), ParamKind::Integer).is_ok());
        assert!(validate_scalar(&json!(4.5), ParamKind::Integer).is_err());
        let message = validate_scalar(&json!("4"), ParamKind::Integer).unwrap_err();
        assert_eq!(message, "expected integer, not string");
    }

    #[test]
    fn real_kind_accepts_integers() {
        assert!(validate_scalar(&json!(4), ParamKind::Real).is_ok());
        assert!(validate_scalar(&json!(0.25), ParamKind::Real).is_ok());
        assert!(validate_scalar(&json!(true), ParamKind::Real).is_err());
    }

    #[test]
    fn sweep_tokens_accept_well_formed_list() {
        assert!(validate_sweep_tokens(&json!(["1-2-3"])).is_ok());
        assert!(validate_sweep_tokens(&json!([])).is_ok());
    }

    #[test]
    fn sweep_tokens_name_the_failing_rule() {
        let not_list = validate_sweep_tokens(&json!("1-2-3")).unwrap_err();
        assert!(not_list.contains("expected list"), "{not_list}");

        let not_string = validate_sweep_tokens(&json!(["1-2-3", 4])).unwrap_err();
        assert!(not_string.contains("must be a string"), "{not_string}");

        let no_dash = validate_sweep_tokens(&json!(["123"])).unwrap_err();
        assert!(no_dash.contains("contains no '-'"), "{no_dash}");

        let count = validate_sweep_tokens(&json!(["1-2"])).unwrap_err();
        assert!(count.contains("2 fields"), "{count}");

        let not_integer = validate_sweep_tokens(&json!(["1-2-x"])).unwrap_err();
        assert!(not_integer.contains("not an integer"), "{not_integer}");
    }

    #[test]
    fn first_failing_sweep_token_wins() {
        let message = validate_sweep_tokens(&json!(["1-2-3", "4-5", "x"])).unwrap_err();
        assert!(message.contains("'4-5'"), "{message}");
    }

    #[test]
    fn team_tokens_reject_end_literal() {
        let message = validate_team_tokens(&json!(["1-2", "zhanli", "end"])).unwrap_err();
        assert!(message.contains("'end'"), "{message}");
        assert!(validate_team_tokens(&json!(["1-2", "zhanli"])).is_ok());
    }

    #[test]
    fn team_tokens_accept_empty_placeholder() {
        // Produce never emits an empty slot, but externally supplied lists may.
        assert!(validate_team_tokens(&json!(["", "3-1"])).is_ok());
    }
}
