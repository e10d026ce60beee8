//! US-style numeric text: parsing for type inference and canonical float output.
//!
//! Everything here is a pure function over the candidate text. A parse only
//! succeeds when the whole string is consumed.

use std::borrow::Cow;

use crate::value::Number;

/// Format a float so that it reads back as a float.
/// - finite values use the shortest round-trip form, always with a `.` or an
///   exponent (`1.0`, `-1.3`, `1e300`)
/// - non-finite values become `NaN`, `inf`, `-inf`
pub(crate) fn format_f64(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    let mut buf = ryu::Buffer::new();
    String::from(buf.format_finite(value))
}

/// Parse a whole-string integer: optional `-`, digits, optional `,` grouping in
/// threes. Values that fit 32 bits come back as [`Number::I32`].
///
/// Integers outside the 64-bit range do not parse here; they fall through to
/// [`parse_float`].
pub fn parse_integer(s: &str) -> Option<Number> {
    let b = s.as_bytes();
    let sign = usize::from(b.first() == Some(&b'-'));
    let len = integer_part_len(&b[sign..]);
    if len == 0 || sign + len != b.len() {
        return None;
    }
    let n: i64 = strip_grouping(s).parse().ok()?;
    Some(Number::from_i64(n))
}

/// Parse a whole-string float: the integer grammar plus an optional `.`
/// fraction and an optional `e`/`E` exponent. Either the integer part or the
/// fraction must have digits. `NaN` and `inf` are rejected, and so is any
/// literal too large for an `f64` (`1e400`).
pub fn parse_float(s: &str) -> Option<f64> {
    let b = s.as_bytes();
    let mut i = usize::from(b.first() == Some(&b'-'));
    let int_len = integer_part_len(&b[i..]);
    i += int_len;
    let mut frac_len = 0usize;
    if b.get(i) == Some(&b'.') {
        i += 1;
        frac_len = digit_run(&b[i..]);
        i += frac_len;
    }
    if int_len == 0 && frac_len == 0 {
        return None;
    }
    if matches!(b.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(b.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_len = digit_run(&b[i..]);
        if exp_len == 0 {
            return None;
        }
        i += exp_len;
    }
    if i != b.len() {
        return None;
    }
    strip_grouping(s).parse::<f64>().ok().filter(|f| f.is_finite())
}

#[inline]
fn digit_run(b: &[u8]) -> usize {
    b.iter().take_while(|c| c.is_ascii_digit()).count()
}

/// Length of the integer part at the start of `b`. A grouped number has a
/// leading group of one to three digits followed by `,ddd` groups; an
/// ungrouped one is any run of digits.
fn integer_part_len(b: &[u8]) -> usize {
    let lead = digit_run(b);
    if lead == 0 || lead > 3 {
        return lead;
    }
    let mut end = lead;
    while b.len() >= end + 4 && b[end] == b',' && digit_run(&b[end + 1..end + 4]) == 3 {
        end += 4;
    }
    end
}

fn strip_grouping(s: &str) -> Cow<'_, str> {
    if s.contains(',') {
        Cow::Owned(s.replace(',', ""))
    } else {
        Cow::Borrowed(s)
    }
}
