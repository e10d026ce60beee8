use std::io::{self, Read};

/// Number of lines in `reader`: one more than the number of `\n` bytes, so a
/// file without any newline still counts as one line.
pub fn count_lines<R: Read>(mut reader: R) -> io::Result<usize> {
    let mut buf = [0u8; 8 * 1024];
    let mut count = 1usize;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        count += newlines(&buf[..n]);
    }
    Ok(count)
}

#[cfg(feature = "perf_memchr")]
fn newlines(chunk: &[u8]) -> usize {
    memchr::memchr_iter(b'\n', chunk).count()
}

#[cfg(not(feature = "perf_memchr"))]
fn newlines(chunk: &[u8]) -> usize {
    chunk.iter().filter(|&&b| b == b'\n').count()
}
