#![no_main]
use libfuzzer_sys::fuzz_target;
use typecsv::decode::infer::infer;
use typecsv::{Reader, Value, Writer};

// Any text written as a field reads back as what its delimited form infers to.
fuzz_target!(|fields: Vec<String>| {
    if fields.is_empty() {
        return;
    }
    let mut w = Writer::new(Vec::new());
    w.set_terminator("\r\n");
    w.write_record(&fields).unwrap();
    let bytes = w.into_inner().unwrap();

    let mut reader = Reader::new(bytes.as_slice());
    let record = reader.read_record().unwrap().expect("one record");
    let expected: Vec<Value> = fields.iter().map(|f| infer(f.clone(), true)).collect();
    assert_eq!(record, expected, "written: {:?}", String::from_utf8_lossy(&bytes));
    assert!(!reader.last_record_truncated());
    assert_eq!(reader.read_record().unwrap(), None);
});
