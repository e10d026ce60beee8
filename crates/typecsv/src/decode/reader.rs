use std::io::Read;

use log::{trace, warn};

use crate::Result;
use crate::decode::infer::infer;
use crate::decode::lookahead::Lookahead;
use crate::options::{Delimiter, Options, Separator};
use crate::value::Value;

/// Reads CSV records one at a time, inferring a type for every field.
///
/// ```
/// use typecsv::{Reader, Value};
///
/// let mut csv = Reader::new("a,1,-1.5,true\n".as_bytes());
/// let record = csv.read_record()?.unwrap();
/// assert_eq!(record[0], Value::from("a"));
/// assert_eq!(record[3], Value::Bool(true));
/// assert!(csv.read_record()?.is_none());
/// assert_eq!(csv.count(), 1);
/// # Ok::<(), typecsv::Error>(())
/// ```
pub struct Reader<R> {
    source: Lookahead<R>,
    options: Options,
    count: usize,
    truncated: bool,
}

/// Result of reading one field.
#[derive(Debug)]
enum FieldOutcome {
    Field(Value),
    /// No field could be read; the record ends here.
    EndOfRecord(Malformed),
}

#[derive(Debug, Clone, Copy)]
enum Malformed {
    Unterminated,
    TextAfterClose(char),
}

impl core::fmt::Display for Malformed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Malformed::Unterminated => f.write_str("input ended inside a delimited field"),
            Malformed::TextAfterClose(c) => {
                write!(f, "unexpected {:?} after closing delimiter", c)
            }
        }
    }
}

impl<R: Read> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, Options::default())
    }

    pub fn with_options(reader: R, options: Options) -> Self {
        Self {
            source: Lookahead::new(reader),
            options,
            count: 0,
            truncated: false,
        }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Accepts `"` and `'`.
    pub fn set_delimiter(&mut self, delimiter: char) -> Result<()> {
        self.options.delimiter = Delimiter::try_from(delimiter)?;
        Ok(())
    }

    /// Accepts `,` `;` `:` TAB and SPACE.
    pub fn set_separator(&mut self, separator: char) -> Result<()> {
        self.options.separator = Separator::try_from(separator)?;
        Ok(())
    }

    /// How many records have been read.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the last record ended early on a malformed delimited field.
    pub fn last_record_truncated(&self) -> bool {
        self.truncated
    }

    /// Reads one record, or `None` if the input is exhausted.
    ///
    /// The position is left just after the record's line terminator (`\n`,
    /// `\r\n` or `\r`), or at end of input if the last record has none.
    ///
    /// A malformed delimited field ends the record: fields before it are
    /// returned, the rest of the physical line is skipped, and
    /// [`last_record_truncated`](Self::last_record_truncated) reports it.
    pub fn read_record(&mut self) -> Result<Option<Vec<Value>>> {
        self.truncated = false;
        if self.source.peek()?.is_none() {
            return Ok(None);
        }

        let separator = self.options.separator.as_char();
        let mut record = Vec::new();
        loop {
            match self.read_field()? {
                FieldOutcome::Field(value) => record.push(value),
                FieldOutcome::EndOfRecord(reason) => {
                    warn!("record {}: field {}: {}", self.count + 1, record.len() + 1, reason);
                    self.truncated = true;
                    self.skip_rest_of_line()?;
                    break;
                }
            }
            if !self.source.next_if_eq(separator)? {
                break;
            }
        }
        self.read_terminator()?;

        self.count += 1;
        trace!("record {}: {} fields", self.count, record.len());
        Ok(Some(record))
    }

    /// Reads a record and returns its first field if it is a string.
    pub fn read_string(&mut self) -> Result<Option<String>> {
        Ok(self.read_first()?.and_then(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        }))
    }

    /// Reads a record and returns its first field if it is a boolean.
    pub fn read_boolean(&mut self) -> Result<Option<bool>> {
        Ok(self.read_first()?.and_then(|v| v.as_bool()))
    }

    pub fn records(&mut self) -> Records<'_, R> {
        Records { reader: self }
    }

    /// Drops any buffered input.
    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }

    fn read_first(&mut self) -> Result<Option<Value>> {
        Ok(self.read_record()?.and_then(|r| r.into_iter().next()))
    }

    fn read_field(&mut self) -> Result<FieldOutcome> {
        let quote = self.options.delimiter.as_char();
        match self.source.peek()? {
            None => Ok(FieldOutcome::Field(Value::String(String::new()))),
            Some(c) if c == quote => self.read_delimited_field(quote),
            Some(_) => self.read_undelimited_field(),
        }
    }

    fn read_undelimited_field(&mut self) -> Result<FieldOutcome> {
        let separator = self.options.separator.as_char();
        let mut text = String::new();
        while let Some(c) = self.source.next_char()? {
            if c == separator || c == '\r' || c == '\n' {
                self.source.unread(c);
                break;
            }
            text.push(c);
        }
        Ok(FieldOutcome::Field(infer(text, false)))
    }

    /// Position is on the opening delimiter; left just after the closing one.
    fn read_delimited_field(&mut self, quote: char) -> Result<FieldOutcome> {
        self.source.next_char()?;
        let mut text = String::new();
        loop {
            match self.source.next_char()? {
                None => return Ok(FieldOutcome::EndOfRecord(Malformed::Unterminated)),
                Some(c) if c == quote => {
                    // doubled delimiter is one literal delimiter
                    if !self.source.next_if_eq(quote)? {
                        break;
                    }
                    text.push(quote);
                }
                Some(c) => text.push(c),
            }
        }

        let separator = self.options.separator.as_char();
        match self.source.peek()? {
            None | Some('\r' | '\n') => {}
            Some(c) if c == separator => {}
            Some(c) => return Ok(FieldOutcome::EndOfRecord(Malformed::TextAfterClose(c))),
        }
        Ok(FieldOutcome::Field(infer(text, true)))
    }

    fn skip_rest_of_line(&mut self) -> Result<()> {
        while let Some(c) = self.source.next_char()? {
            if c == '\r' || c == '\n' {
                self.source.unread(c);
                break;
            }
        }
        Ok(())
    }

    fn read_terminator(&mut self) -> Result<()> {
        if self.source.next_if_eq('\n')? {
            return Ok(());
        }
        if self.source.next_if_pair('\r', '\n')? {
            return Ok(());
        }
        self.source.next_if_eq('\r')?;
        Ok(())
    }
}

/// Iterator over the remaining records of a [`Reader`].
pub struct Records<'r, R> {
    reader: &'r mut Reader<R>,
}

impl<R: Read> Iterator for Records<'_, R> {
    type Item = Result<Vec<Value>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_record().transpose()
    }
}
