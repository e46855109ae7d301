//! Type inference for unquoted SNBT tokens.

use crate::Value;

/// Determines the value of an unquoted token.
///
/// Patterns are tried in order and the first one matching the whole token
/// wins: `f` float, `b` byte, `l` long, `s` short, plain int, `d` double,
/// unsuffixed decimal (with `.` or an exponent) as double, `true`, `false`.
/// Anything else, including integers that overflow their type, is a string.
/// Suffixes are case insensitive.
pub(super) fn classify(token: &str) -> Value {
    if let Some(v) = with_suffix(token, 'f').filter(|s| is_decimal(s)) {
        if let Ok(v) = v.parse() {
            return Value::Float(v);
        }
    }

    if let Some(v) = with_suffix(token, 'b').filter(|s| is_integer(s)) {
        if let Ok(v) = v.parse() {
            return Value::Byte(v);
        }
    }

    if let Some(v) = with_suffix(token, 'l').filter(|s| is_integer(s)) {
        if let Ok(v) = v.parse() {
            return Value::Long(v);
        }
    }

    if let Some(v) = with_suffix(token, 's').filter(|s| is_integer(s)) {
        if let Ok(v) = v.parse() {
            return Value::Short(v);
        }
    }

    if is_integer(token) {
        if let Ok(v) = token.parse() {
            return Value::Int(v);
        }
    }

    if let Some(v) = with_suffix(token, 'd').filter(|s| is_decimal(s)) {
        if let Ok(v) = v.parse() {
            return Value::Double(v);
        }
    }

    if is_decimal(token) && token.contains(['.', 'e', 'E']) {
        if let Ok(v) = token.parse() {
            return Value::Double(v);
        }
    }

    match token {
        "true" => Value::Byte(1),
        "false" => Value::Byte(0),
        _ => Value::String(token.to_owned()),
    }
}

fn with_suffix(token: &str, suffix: char) -> Option<&str> {
    token
        .strip_suffix(suffix)
        .or_else(|| token.strip_suffix(suffix.to_ascii_uppercase()))
}

fn strip_sign(s: &str) -> &str {
    s.strip_prefix(['+', '-']).unwrap_or(s)
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// `[+-]?(0|[1-9][0-9]*)`
fn is_integer(s: &str) -> bool {
    match strip_sign(s).as_bytes() {
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

/// `[+-]?([0-9]+\.?|[0-9]*\.[0-9]+)([eE][+-]?[0-9]+)?`
fn is_decimal(s: &str) -> bool {
    let s = strip_sign(s);

    let mantissa = match s.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => {
            let exponent = strip_sign(exponent);
            if exponent.is_empty() || !all_digits(exponent) {
                return false;
            }
            mantissa
        }
        None => s,
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    all_digits(int_part) && all_digits(frac_part) && int_part.len() + frac_part.len() > 0
}
