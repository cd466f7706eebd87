// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Numeric coercion of dynamic values

use super::value::Value;

impl Value {
    /// Coerce to a number the way arithmetic on a dynamic value would
    ///
    /// Never fails: values without a numeric reading become NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined => f64::NAN,
            Self::Null => 0.0,
            Self::Boolean(b) => f64::from(u8::from(*b)),
            Self::Number(n) => *n,
            Self::String(s) => string_to_number(s),
            // Arrays go through their string form: [] -> "" -> 0, [7] -> "7" -> 7
            Self::Array(_) => string_to_number(&self.to_string()),
            Self::Date(date) => date.timestamp_millis() as f64,
            Self::Host(host) => host.to_number(),
            Self::Object(_) | Self::Function(_) | Self::RegExp(_) => f64::NAN,
        }
    }
}

/// Parse a string as a numeric literal, yielding NaN when it is not one
pub fn string_to_number(input: &str) -> f64 {
    let trimmed = input.trim_matches(is_numeric_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_prefixed_integer(trimmed) {
        return value;
    }

    if is_decimal_literal(trimmed) {
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Whitespace and line terminators that may surround a numeric string
///
/// Space separators (Zs), the ASCII controls `\t\n\v\f\r`, U+2028, U+2029
/// and the byte order mark. NEL (U+0085) is not one of them.
fn is_numeric_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0b}'
            | '\u{0c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// `0x`, `0o` and `0b` literals. Returns `None` when there is no prefix.
fn parse_prefixed_integer(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    // Accumulate in f64 so literals wider than 64 bits still round sensibly
    let mut value = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(digit) => value = value * f64::from(radix) + f64::from(digit),
            None => return Some(f64::NAN),
        }
    }
    Some(value)
}

/// `[+-] (digits [. digits] | . digits) [(e|E) [+-] digits]`
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let integer_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - integer_start;

    if i < len && bytes[i] == b'.' {
        i += 1;
        let fraction_start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - fraction_start;
    }

    if mantissa_digits == 0 {
        return false;
    }

    if i < len && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < len && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let exponent_start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exponent_start {
            return false;
        }
    }

    i == len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_to_number() {
        assert_eq!(string_to_number("42"), 42.0);
        assert_eq!(string_to_number("  -1.5  "), -1.5);
        assert_eq!(string_to_number(".5"), 0.5);
        assert_eq!(string_to_number("5."), 5.0);
        assert_eq!(string_to_number("1e3"), 1000.0);
        assert_eq!(string_to_number(""), 0.0);
        assert_eq!(string_to_number("0xff"), 255.0);
        assert_eq!(string_to_number("0b101"), 5.0);
        assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_string_to_number_rejects_non_literals() {
        for input in ["abc", "1e", ".", "inf", "nan", "infinity", "0x", "-0x10", "12px", "1_000"] {
            assert!(string_to_number(input).is_nan(), "{input} should not parse");
        }
    }

    #[test]
    fn test_trims_only_numeric_whitespace() {
        assert_eq!(string_to_number("\u{a0}\t5\u{2028}"), 5.0);
        assert_eq!(string_to_number("\u{3000}7\u{feff}"), 7.0);
        assert!(string_to_number("\u{85}5").is_nan());
        assert!(Value::from("\u{85}5").to_number().is_nan());
    }

    #[test]
    fn test_value_to_number() {
        assert!(Value::Undefined.to_number().is_nan());
        assert_eq!(Value::Null.to_number(), 0.0);
        assert_eq!(Value::from(true).to_number(), 1.0);
        assert_eq!(Value::from("12").to_number(), 12.0);
        assert_eq!(Value::array(Vec::<Value>::new()).to_number(), 0.0);
        assert_eq!(Value::array([7]).to_number(), 7.0);
        assert!(Value::array([1, 2]).to_number().is_nan());
        assert!(Value::object([("a", 1)]).to_number().is_nan());
    }
}
