use crate::number::{parse_float, parse_integer};
use crate::value::{Number, Value};

/// Infer the type of a field from its unescaped text.
///
/// | text                              | value            |
/// |-----------------------------------|------------------|
/// | empty                             | `String("")`     |
/// | `true`/`false`, any case          | `Bool`           |
/// | US integer (`-12`, `1,234`)       | `I32`, else `I64`|
/// | US float (`-1.5`, `.5`, `1e3`)    | `F64`            |
/// | `null`, undelimited only          | `Null`           |
/// | anything else                     | `String`         |
///
/// A delimited `"null"` stays a string: that is how a written `Null` reads back.
pub fn infer(text: String, delimited: bool) -> Value {
    if text.is_empty() {
        return Value::String(text);
    }
    if text.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Some(n) = parse_integer(&text) {
        return Value::Number(n);
    }
    if let Some(f) = parse_float(&text) {
        return Value::Number(Number::F64(f));
    }
    if !delimited && text == "null" {
        return Value::Null;
    }
    Value::String(text)
}
