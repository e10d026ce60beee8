use std::io::{self, BufRead, BufReader, Read};

/// Characters that can be pushed back at once. Enough to probe for CRLF.
const PUSHBACK: usize = 2;

/// UTF-8 character source with a small pushback buffer.
///
/// Every probe either consumes what it matched or leaves the position where it
/// was, so callers never need to rewind the underlying stream.
pub struct Lookahead<R> {
    inner: BufReader<R>,
    pushed: [char; PUSHBACK],
    len: usize,
}

impl<R: Read> Lookahead<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
            pushed: ['\0'; PUSHBACK],
            len: 0,
        }
    }

    /// Next character, or `None` at end of input.
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        if self.len > 0 {
            self.len -= 1;
            return Ok(Some(self.pushed[self.len]));
        }
        self.decode_char()
    }

    pub fn peek(&mut self) -> io::Result<Option<char>> {
        let c = self.next_char()?;
        if let Some(c) = c {
            self.unread(c);
        }
        Ok(c)
    }

    /// Push `c` back so the next read returns it.
    pub fn unread(&mut self, c: char) {
        debug_assert!(self.len < PUSHBACK, "pushback buffer overflow");
        self.pushed[self.len] = c;
        self.len += 1;
    }

    /// Consume the next character if it is `c`.
    pub fn next_if_eq(&mut self, c: char) -> io::Result<bool> {
        match self.next_char()? {
            Some(x) if x == c => Ok(true),
            Some(x) => {
                self.unread(x);
                Ok(false)
            }
            None => Ok(false),
        }
    }

    /// Consume the next two characters if they are `first` then `second`.
    pub fn next_if_pair(&mut self, first: char, second: char) -> io::Result<bool> {
        if !self.next_if_eq(first)? {
            return Ok(false);
        }
        if self.next_if_eq(second)? {
            return Ok(true);
        }
        self.unread(first);
        Ok(false)
    }

    /// Drops any buffered input.
    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let b = loop {
            match self.inner.fill_buf() {
                Ok(buf) => break buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        if b.is_some() {
            self.inner.consume(1);
        }
        Ok(b)
    }

    fn decode_char(&mut self) -> io::Result<Option<char>> {
        let Some(first) = self.read_byte()? else {
            return Ok(None);
        };
        let width = utf8_width(first);
        if width == 1 {
            return Ok(Some(char::from(first)));
        }
        if width == 0 {
            return Err(invalid_utf8());
        }
        let mut bytes = [first, 0, 0, 0];
        for slot in &mut bytes[1..width] {
            *slot = self.read_byte()?.ok_or_else(invalid_utf8)?;
        }
        std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or_else(invalid_utf8)
    }
}

#[inline]
fn utf8_width(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8")
}
