use typecsv::decode::infer::infer;
use typecsv::number::{parse_float, parse_integer};
use typecsv::{Number, Reader, Value, Writer};

fn plain(s: &str) -> Value {
    infer(s.to_string(), false)
}

#[test]
fn integers_prefer_32_bits() {
    assert_eq!(parse_integer("-1"), Some(Number::I32(-1)));
    assert_eq!(parse_integer("123456789"), Some(Number::I32(123456789)));
    assert_eq!(parse_integer("2147483647"), Some(Number::I32(i32::MAX)));
    assert_eq!(parse_integer("2147483648"), Some(Number::I64(2147483648)));
    assert_eq!(parse_integer("-2147483649"), Some(Number::I64(-2147483649)));
}

#[test]
fn integers_tolerate_us_grouping() {
    assert_eq!(parse_integer("1,234"), Some(Number::I32(1234)));
    assert_eq!(parse_integer("12,345,678"), Some(Number::I32(12345678)));
    assert_eq!(parse_integer("1,23"), None);
    assert_eq!(parse_integer("1234,567"), None);
    assert_eq!(parse_integer(",123"), None);
}

#[test]
fn integers_reject_partial_matches() {
    for s in ["", "-", "+1", "12a", " 1", "1 ", "1.5", "0x10", "1e3"] {
        assert_eq!(parse_integer(s), None, "{s:?}");
    }
}

#[test]
fn integers_beyond_64_bits_become_floats() {
    assert_eq!(parse_integer("99999999999999999999"), None);
    assert_eq!(parse_float("99999999999999999999"), Some(1e20));
}

#[test]
fn floats_accept_fraction_and_exponent() {
    assert_eq!(parse_float("-1.3"), Some(-1.3));
    assert_eq!(parse_float(".5"), Some(0.5));
    assert_eq!(parse_float("2."), Some(2.0));
    assert_eq!(parse_float("1,234.5"), Some(1234.5));
    assert_eq!(parse_float("1e300"), Some(1e300));
    assert_eq!(parse_float("2.5E-3"), Some(0.0025));
}

#[test]
fn floats_reject_words_and_fragments() {
    for s in ["NaN", "inf", "-infinity", ".", "-.", "1e", "1e+", "1.2.3", "1.5x", "+1.5"] {
        assert_eq!(parse_float(s), None, "{s:?}");
    }
}

#[test]
fn floats_out_of_range_do_not_parse() {
    assert_eq!(parse_float("1e400"), None);
    assert_eq!(parse_float("-1e400"), None);
    assert_eq!(parse_float(&"9".repeat(400)), None);
    assert_eq!(parse_float("1e-400"), Some(0.0));
}

#[test]
fn overflowing_literal_reads_back_as_text() -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = Reader::new("1e400,\"-1e400\"\n".as_bytes());
    let record = reader.read_record()?.ok_or("missing record")?;
    assert_eq!(record, vec![Value::from("1e400"), Value::from("-1e400")]);

    let mut writer = Writer::new(Vec::new());
    writer.write_record(&record)?;
    let bytes = writer.into_inner()?;
    let mut again = Reader::new(bytes.as_slice());
    assert_eq!(again.read_record()?, Some(record));
    Ok(())
}

#[test]
fn float_text_keeps_a_fraction_marker() {
    assert_eq!(Value::from(1.0).to_string(), "1.0");
    assert_eq!(Value::from(-1.3).to_string(), "-1.3");
    assert_eq!(Value::from(0.1 + 0.2).to_string(), "0.30000000000000004");
    assert_eq!(Value::from(1e300).to_string(), "1e300");
    assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
    assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-inf");
}

#[test]
fn inference_priority_order() {
    assert_eq!(plain(""), Value::String(String::new()));
    assert_eq!(plain("TRUE"), Value::Bool(true));
    assert_eq!(plain("False"), Value::Bool(false));
    assert_eq!(plain("42"), Value::Number(Number::I32(42)));
    assert_eq!(plain("4294967296"), Value::Number(Number::I64(4294967296)));
    assert_eq!(plain("0.3333333333333333"), Value::Number(Number::F64(0.3333333333333333)));
    assert_eq!(plain("null"), Value::Null);
    assert_eq!(plain("2010-10-15T18:15:00Z"), Value::String("2010-10-15T18:15:00Z".into()));
}

#[test]
fn null_is_case_sensitive_and_undelimited() {
    assert_eq!(plain("NULL"), Value::String("NULL".into()));
    assert_eq!(infer("null".into(), true), Value::String("null".into()));
}

#[test]
fn delimited_text_still_coerces_scalars() {
    assert_eq!(infer("true".into(), true), Value::Bool(true));
    assert_eq!(infer("-1".into(), true), Value::Number(Number::I32(-1)));
}

#[test]
fn trailing_garbage_is_a_string() {
    assert_eq!(plain("12px"), Value::String("12px".into()));
    assert_eq!(plain("1.5 "), Value::String("1.5 ".into()));
}
