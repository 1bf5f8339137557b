//! Lenient read-only view over a single player entry.
//!
//! The relay never validates player objects. Fields are interpreted the
//! way the game server's Lua/JSON bridge tends to send them: money may
//! arrive as a string, `wanted` as `0`/`1`, and `job` may be missing.
//! Entries that are not JSON objects behave like players with every
//! field missing.

use serde_json::Value;

/// Job category used when a player has no (or a falsy) `job` field.
pub const UNKNOWN_JOB: &str = "Unknown";

/// Borrowed view of one entry from the `players` array.
#[derive(Debug, Clone, Copy)]
pub struct Player<'a>(&'a Value);

impl<'a> Player<'a> {
    /// Wrap a raw player value.
    pub const fn new(raw: &'a Value) -> Self {
        Self(raw)
    }

    /// The raw JSON value, exactly as the game server sent it.
    pub const fn raw(&self) -> &'a Value {
        self.0
    }

    /// The `steamid` field when it is a non-empty string.
    pub fn steamid(&self) -> Option<&'a str> {
        non_empty_str(self.0.get("steamid"))
    }

    /// The `steamid64` field when it is a non-empty string.
    pub fn steamid64(&self) -> Option<&'a str> {
        non_empty_str(self.0.get("steamid64"))
    }

    /// Whether this player is identified by `id`.
    ///
    /// `id` must already be lowercased. `steamid` is compared
    /// case-insensitively, `steamid64` by exact string equality.
    pub fn matches_id(&self, id: &str) -> bool {
        self.steamid().is_some_and(|sid| sid.to_lowercase() == id)
            || self.steamid64().is_some_and(|sid64| sid64 == id)
    }

    /// The `name` field rendered as text, if present and not null.
    pub fn name(&self) -> Option<String> {
        match self.0.get("name")? {
            Value::Null => None,
            other => Some(display_text(other)),
        }
    }

    /// The `money` field coerced to a number; see [`coerce_number`].
    pub fn money(&self) -> f64 {
        self.0.get("money").map_or(0.0, coerce_number)
    }

    /// Whether the `wanted` flag is truthy.
    pub fn is_wanted(&self) -> bool {
        self.0.get("wanted").is_some_and(is_truthy)
    }

    /// The job category, [`UNKNOWN_JOB`] when missing or falsy.
    pub fn job(&self) -> String {
        match self.0.get("job") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(v) if is_truthy(v) => display_text(v),
            _ => UNKNOWN_JOB.to_owned(),
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Render a scalar the way string conversion would: strings verbatim,
/// numbers in their shortest form (`5.0` becomes `5`). Arrays and
/// objects fall back to their JSON text.
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => n
            .as_f64()
            .map_or_else(|| n.to_string(), |f| f.to_string()),
        other => other.to_string(),
    }
}

/// Coerce a JSON value to a finite number, falling back to `0`.
///
/// Numbers pass through. Strings are trimmed and parsed as decimal, or
/// as an unsigned integer when prefixed `0x`, `0o` or `0b`; an empty
/// string is `0`. `true` is `1`, and a single-element array coerces its
/// element. Everything else, including values that parse to infinity
/// or NaN, becomes `0`.
pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_numeric_text(s),
        Value::Bool(true) => 1.0,
        Value::Array(items) => match items.as_slice() {
            [single @ (Value::Number(_) | Value::String(_) | Value::Array(_))] => {
                coerce_number(single)
            }
            _ => 0.0,
        },
        Value::Bool(false) | Value::Null | Value::Object(_) => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

#[allow(clippy::cast_precision_loss)]
fn parse_numeric_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return trimmed.parse::<f64>().unwrap_or(0.0),
    };
    // `from_str_radix` tolerates a leading sign; prefixed literals do not.
    trimmed
        .get(2..)
        .filter(|digits| !digits.starts_with(['+', '-']))
        .and_then(|digits| u128::from_str_radix(digits, radix).ok())
        .map_or(0.0, |n| n as f64)
}

/// JavaScript-style truthiness of a JSON value.
///
/// `false`, `null`, `0`, NaN and `""` are falsy; everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn money_coercion() {
        assert!((coerce_number(&json!(100)) - 100.0).abs() < f64::EPSILON);
        assert!((coerce_number(&json!(" 42.5 ")) - 42.5).abs() < f64::EPSILON);
        assert!((coerce_number(&json!(true)) - 1.0).abs() < f64::EPSILON);
        assert!(coerce_number(&json!("bad")).abs() < f64::EPSILON);
        assert!(coerce_number(&json!("")).abs() < f64::EPSILON);
        assert!(coerce_number(&json!("inf")).abs() < f64::EPSILON);
        assert!(coerce_number(&json!(null)).abs() < f64::EPSILON);
        assert!(coerce_number(&json!({"amount": 5})).abs() < f64::EPSILON);
    }

    #[test]
    fn money_coercion_follows_number_conversion() {
        assert!((coerce_number(&json!("0x10")) - 16.0).abs() < f64::EPSILON);
        assert!((coerce_number(&json!(" 0o17 ")) - 15.0).abs() < f64::EPSILON);
        assert!((coerce_number(&json!("0B101")) - 5.0).abs() < f64::EPSILON);
        assert!(coerce_number(&json!("0x")).abs() < f64::EPSILON);
        assert!(coerce_number(&json!("0x-1")).abs() < f64::EPSILON);
        assert!(coerce_number(&json!("0xZZ")).abs() < f64::EPSILON);

        assert!((coerce_number(&json!([5])) - 5.0).abs() < f64::EPSILON);
        assert!((coerce_number(&json!([["7"]])) - 7.0).abs() < f64::EPSILON);
        assert!(coerce_number(&json!([])).abs() < f64::EPSILON);
        assert!(coerce_number(&json!([1, 2])).abs() < f64::EPSILON);
        assert!(coerce_number(&json!([true])).abs() < f64::EPSILON);

        // JSON cannot carry infinity, so it collapses to zero.
        assert!(coerce_number(&json!("Infinity")).abs() < f64::EPSILON);
    }

    #[test]
    fn truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("false")));
        assert!(is_truthy(&json!([])));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(null)));
    }

    #[test]
    fn job_defaults_to_unknown() {
        let missing = json!({"name": "A"});
        let null = json!({"job": null});
        let empty = json!({"job": ""});
        let numeric = json!({"job": 5});
        let named = json!({"job": "Police"});

        assert_eq!(Player::new(&missing).job(), UNKNOWN_JOB);
        assert_eq!(Player::new(&null).job(), UNKNOWN_JOB);
        assert_eq!(Player::new(&empty).job(), UNKNOWN_JOB);
        assert_eq!(Player::new(&numeric).job(), "5");
        assert_eq!(Player::new(&named).job(), "Police");
    }

    #[test]
    fn non_string_fields_render_as_text() {
        let whole = json!({"name": 42.0, "job": 5.0});
        let fractional = json!({"name": 1.5, "job": true});
        let listed = json!({"name": ["x"], "job": 7});

        assert_eq!(Player::new(&whole).name().as_deref(), Some("42"));
        assert_eq!(Player::new(&whole).job(), "5");
        assert_eq!(Player::new(&fractional).name().as_deref(), Some("1.5"));
        assert_eq!(Player::new(&fractional).job(), "true");
        assert_eq!(Player::new(&listed).name().as_deref(), Some("[\"x\"]"));
        assert_eq!(Player::new(&listed).job(), "7");
    }

    #[test]
    fn id_matching_rules() {
        let p = json!({"steamid": "STEAM_0:1:ABC", "steamid64": "7656119800000000A"});
        let player = Player::new(&p);

        assert!(player.matches_id("steam_0:1:abc"));
        assert!(!player.matches_id("7656119800000000a"));
        assert!(!player.matches_id(""));
    }

    #[test]
    fn non_object_entry_has_no_fields() {
        let p = json!(42);
        let player = Player::new(&p);

        assert!(player.name().is_none());
        assert!(player.money().abs() < f64::EPSILON);
        assert!(!player.is_wanted());
        assert_eq!(player.job(), UNKNOWN_JOB);
    }
}
