use crate::options::Delimiter;

/// Append `s` to `out` wrapped in `delim`, doubling every delimiter inside it.
/// Nothing else is escaped: separators and line breaks are safe inside quotes.
pub fn escape_and_quote_into(out: &mut String, s: &str, delim: Delimiter) {
    let quote = delim.as_char();
    out.reserve(s.len() + 2);
    out.push(quote);
    push_escaped(out, s, quote);
    out.push(quote);
}

pub fn escape_and_quote(s: &str, delim: Delimiter) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    escape_and_quote_into(&mut out, s, delim);
    out
}

#[cfg(feature = "perf_memchr")]
fn push_escaped(out: &mut String, s: &str, quote: char) {
    // delimiters are ASCII, so every match index is a char boundary
    let mut rest = s;
    while let Some(idx) = memchr::memchr(quote as u8, rest.as_bytes()) {
        out.push_str(&rest[..=idx]);
        out.push(quote);
        rest = &rest[idx + 1..];
    }
    out.push_str(rest);
}

#[cfg(not(feature = "perf_memchr"))]
fn push_escaped(out: &mut String, s: &str, quote: char) {
    for ch in s.chars() {
        if ch == quote {
            out.push(quote);
        }
        out.push(ch);
    }
}
