//! Best-effort conversions from loosely typed JSON values sent by devices.
//! Firmware sends numbers either as JSON numbers or as strings. Booleans
//! count as 1/0 and string rendering follows the documents already stored
//! in `Datos` (`True`, `None`).

use serde_json::Value;

pub fn coerce_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    parsed.filter(|f| f.is_finite())
}

/// Integers pass through, floats are truncated toward zero, strings must
/// hold an integer literal, booleans are 1/0.
pub fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            if n.is_u64() {
                // above i64::MAX
                return None;
            }
            n.as_f64().and_then(truncate_f64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

pub fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

fn truncate_f64(f: f64) -> Option<i64> {
    if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn floats_from_numbers_and_strings() {
        assert_eq!(coerce_f64(&json!(23.5)), Some(23.5));
        assert_eq!(coerce_f64(&json!(60)), Some(60.0));
        assert_eq!(coerce_f64(&json!("23.5")), Some(23.5));
        assert_eq!(coerce_f64(&json!(" -4.25 ")), Some(-4.25));
        assert_eq!(coerce_f64(&json!("1e2")), Some(100.0));
    }

    #[test]
    fn booleans_count_as_one_and_zero() {
        assert_eq!(coerce_f64(&json!(true)), Some(1.0));
        assert_eq!(coerce_f64(&json!(false)), Some(0.0));
        assert_eq!(coerce_i64(&json!(true)), Some(1));
        assert_eq!(coerce_i64(&json!(false)), Some(0));
    }

    #[test]
    fn floats_reject_garbage() {
        assert_eq!(coerce_f64(&json!("abc")), None);
        assert_eq!(coerce_f64(&json!("")), None);
        assert_eq!(coerce_f64(&json!("NaN")), None);
        assert_eq!(coerce_f64(&json!("inf")), None);
        assert_eq!(coerce_f64(&json!(null)), None);
        assert_eq!(coerce_f64(&json!("true")), None);
        assert_eq!(coerce_f64(&json!([1.0])), None);
        assert_eq!(coerce_f64(&json!({"v": 1.0})), None);
    }

    #[test]
    fn integers() {
        assert_eq!(coerce_i64(&json!(100)), Some(100));
        assert_eq!(coerce_i64(&json!("100")), Some(100));
        assert_eq!(coerce_i64(&json!(" +7 ")), Some(7));
        assert_eq!(coerce_i64(&json!(12.9)), Some(12));
        assert_eq!(coerce_i64(&json!(-12.9)), Some(-12));
    }

    #[test]
    fn integers_reject_garbage() {
        assert_eq!(coerce_i64(&json!("not-a-number")), None);
        assert_eq!(coerce_i64(&json!("1.5")), None);
        assert_eq!(coerce_i64(&json!(u64::MAX)), None);
        assert_eq!(coerce_i64(&json!(1e300)), None);
        assert_eq!(coerce_i64(&json!(null)), None);
        assert_eq!(coerce_i64(&json!([1])), None);
    }

    #[test]
    fn strings_keep_text_and_render_the_rest() {
        assert_eq!(coerce_string(&json!("alto")), "alto");
        assert_eq!(coerce_string(&json!(1)), "1");
        assert_eq!(coerce_string(&json!(1.0)), "1.0");
        assert_eq!(coerce_string(&json!(true)), "True");
        assert_eq!(coerce_string(&json!(false)), "False");
        assert_eq!(coerce_string(&json!(null)), "None");
    }
}
