use std::io::Write;

use log::debug;

use crate::Result;
use crate::encode::primitives::escape_and_quote_into;
use crate::options::{Delimiter, Options, Separator};
use crate::value::Value;

/// Line terminator used when none is configured.
#[cfg(windows)]
pub const DEFAULT_TERMINATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const DEFAULT_TERMINATOR: &str = "\n";

/// Writes records as CSV, always enclosing fields in the delimiter.
///
/// The writer does not check that records have the same number of fields.
///
/// ```
/// use typecsv::{record, Value, Writer};
///
/// let mut csv = Writer::new(Vec::new());
/// csv.set_terminator("\r\n");
/// csv.write_record(record![Value::Null, true, -1, 1.5, "say \"hi\""])?;
/// let out = String::from_utf8(csv.into_inner()?).unwrap();
/// assert_eq!(out, "\"null\",\"true\",\"-1\",\"1.5\",\"say \"\"hi\"\"\"\r\n");
/// # Ok::<(), typecsv::Error>(())
/// ```
pub struct Writer<W: Write> {
    out: W,
    options: Options,
    terminator: String,
    /// No field on the current line yet.
    fresh: bool,
    scratch: String,
}

impl<W: Write> Writer<W> {
    pub fn new(out: W) -> Self {
        Self::with_options(out, Options::default())
    }

    pub fn with_options(out: W, options: Options) -> Self {
        Self {
            out,
            options,
            terminator: String::from(DEFAULT_TERMINATOR),
            fresh: true,
            scratch: String::new(),
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

    pub fn set_terminator(&mut self, terminator: impl Into<String>) {
        self.terminator = terminator.into();
    }

    /// Writes each value as one more field of the current line.
    pub fn write<I, V>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        for field in fields {
            let value = field.into();
            self.scratch.clear();
            if !self.fresh {
                self.scratch.push(self.options.separator.as_char());
            }
            escape_and_quote_into(&mut self.scratch, &value.to_text(), self.options.delimiter);
            self.out.write_all(self.scratch.as_bytes())?;
            self.fresh = false;
        }
        Ok(())
    }

    /// Writes the values, then terminates the record and flushes.
    pub fn write_record<I, V>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.write(fields)?;
        self.end_record()
    }

    /// Terminates the current record and flushes.
    pub fn end_record(&mut self) -> Result<()> {
        self.out.write_all(self.terminator.as_bytes())?;
        self.out.flush()?;
        self.fresh = true;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Flushes and releases the sink.
    pub fn close(self) -> Result<()> {
        self.into_inner().map(drop)
    }

    /// Flushes and hands back the sink.
    pub fn into_inner(mut self) -> Result<W> {
        self.out.flush()?;
        debug!("csv writer closed");
        Ok(self.out)
    }
}
