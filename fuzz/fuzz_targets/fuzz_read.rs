#![no_main]
use libfuzzer_sys::fuzz_target;
use typecsv::{Delimiter, Options, Reader, Separator};

const SEPARATORS: [Separator; 5] = [
    Separator::Comma,
    Separator::Semicolon,
    Separator::Colon,
    Separator::Tab,
    Separator::Space,
];

fuzz_target!(|data: &[u8]| {
    let Some((&dialect, body)) = data.split_first() else {
        return;
    };
    let delimiter = if dialect & 0x80 == 0 { Delimiter::Double } else { Delimiter::Single };
    let separator = SEPARATORS[usize::from(dialect & 0x7F) % SEPARATORS.len()];
    let mut reader = Reader::with_options(body, Options::new(delimiter, separator));
    let mut seen = 0usize;
    loop {
        match reader.read_record() {
            Ok(Some(_)) => {
                seen += 1;
                assert_eq!(reader.count(), seen);
            }
            Ok(None) | Err(_) => break,
        }
    }
});
