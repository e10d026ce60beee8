#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use typecsv::{Delimiter, Number, Options, Reader, Separator, Value, Writer};

#[derive(Arbitrary, Debug)]
enum FuzzField {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FuzzField {
    fn to_value(&self) -> Value {
        match self {
            FuzzField::Null => Value::Null,
            FuzzField::Bool(b) => Value::Bool(*b),
            FuzzField::Int(i) => Value::from(*i),
            FuzzField::Float(f) => Value::Number(Number::F64(*f)),
            FuzzField::Text(s) => Value::String(s.clone()),
        }
    }
}

#[derive(Arbitrary, Debug)]
struct Input {
    single_quote: bool,
    separator: u8,
    records: Vec<Vec<FuzzField>>,
}

fuzz_target!(|input: Input| {
    let separators = [
        Separator::Comma,
        Separator::Semicolon,
        Separator::Colon,
        Separator::Tab,
        Separator::Space,
    ];
    let options = Options::new(
        if input.single_quote { Delimiter::Single } else { Delimiter::Double },
        separators[usize::from(input.separator) % separators.len()],
    );
    let records: Vec<Vec<Value>> = input
        .records
        .iter()
        .filter(|r| !r.is_empty())
        .map(|r| r.iter().map(FuzzField::to_value).collect())
        .collect();

    let mut w = Writer::with_options(Vec::new(), options);
    for r in &records {
        w.write_record(r).unwrap();
    }
    let bytes = w.into_inner().unwrap();

    let mut reader = Reader::with_options(bytes.as_slice(), options);
    for original in &records {
        let back = reader.read_record().unwrap().expect("record written");
        assert_eq!(back.len(), original.len());
        for (b, o) in back.iter().zip(original) {
            match (o, b) {
                (Value::Null, Value::String(s)) => assert_eq!(s, "null"),
                // NaN and infinities come back as their text
                (Value::Number(Number::F64(x)), _) if !x.is_finite() => {}
                // text may infer as another type
                (Value::String(_), _) => {}
                _ => assert_eq!(b, o),
            }
        }
    }
    assert_eq!(reader.read_record().unwrap(), None);
});
