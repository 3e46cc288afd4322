//! Numeric parsing helpers
//!
//! Two parsers with deliberately different strictness:
//!
//! - [`parse_float`] is permissive: it reads the longest numeric prefix of a
//!   string and ignores the rest (`"12px"` parses to `12`).
//! - [`safe_parse_number`] is strict: a string is accepted only when printing
//!   the parsed number with [`number_to_string`] reproduces the input exactly,
//!   so `"007"`, `"1.0"` and `"12px"` are all rejected.

use crate::value::Value;

/// Numbers at or above this magnitude print in exponent form.
const EXPONENT_UPPER: i32 = 21;
/// Numbers below `1e-6` print in exponent form.
const EXPONENT_LOWER: i32 = -6;

/// Parses the longest leading decimal literal of `input`.
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with an
/// optional fraction, an optional exponent, and `Infinity`. Returns `NaN`
/// when no digits can be read.
///
/// ```rust
/// use runcheck::number::parse_float;
///
/// assert_eq!(parse_float("  3.5kg"), 3.5);
/// assert_eq!(parse_float("-1e3"), -1000.0);
/// assert!(parse_float("abc").is_nan());
/// ```
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }
    if s[pos..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    let mut digits = pos - int_start;

    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if digits > 0 || end > frac_start {
            digits += end - frac_start;
            pos = end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut end = pos + 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let exp_start = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end > exp_start {
            pos = end;
        }
    }

    s[..pos].parse::<f64>().unwrap_or(f64::NAN)
}

/// Prints `n` in its canonical form.
///
/// Uses the shortest digit string that round-trips, switching to exponent
/// notation for magnitudes `>= 1e21` or `< 1e-6`.
///
/// ```rust
/// use runcheck::number::number_to_string;
///
/// assert_eq!(number_to_string(7.0), "7");
/// assert_eq!(number_to_string(0.000001), "0.000001");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// ```
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n == 0.0 {
        return "0".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.2345e-7".
    let sci = format!("{:e}", n.abs());
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => (sci.as_str(), "0"),
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let k = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`.
    let point = exponent + 1;

    let mut out = String::new();
    if n < 0.0 {
        out.push('-');
    }

    if k <= point && point <= EXPONENT_UPPER {
        out.push_str(&digits);
        out.extend(std::iter::repeat_n('0', (point - k) as usize));
    } else if 0 < point && point <= EXPONENT_UPPER {
        let (int_part, frac_part) = digits.split_at(point as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if EXPONENT_LOWER < point && point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', (-point) as usize));
        out.push_str(&digits);
    } else {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if point - 1 < 0 { '-' } else { '+' });
        out.push_str(&(point - 1).abs().to_string());
    }
    out
}

/// Converts `value` to a number without losing information.
///
/// Numbers are returned as-is. Strings are parsed with [`parse_float`] and
/// accepted only if the canonical form of the result equals the input.
/// Every other kind yields `None`.
///
/// ```rust
/// use runcheck::number::safe_parse_number;
/// use runcheck::value::Value;
///
/// assert_eq!(safe_parse_number(&Value::from("7")), Some(7.0));
/// assert_eq!(safe_parse_number(&Value::from("007")), None);
/// assert_eq!(safe_parse_number(&Value::from(true)), None);
/// ```
pub fn safe_parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::String(s) => {
            let parsed = parse_float(s);
            if parsed.is_nan() || number_to_string(parsed) != *s {
                None
            } else {
                Some(parsed)
            }
        }
        _ => None,
    }
}

/// Alias of [`safe_parse_number`].
pub fn parse_number_strict(value: &Value) -> Option<f64> {
    safe_parse_number(value)
}
