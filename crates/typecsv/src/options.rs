use crate::error::Error;

/// Quote character wrapping a field's raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// `"`
    #[default]
    Double,
    /// `'`
    Single,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Double => '"',
            Delimiter::Single => '\'',
        }
    }
}

impl TryFrom<char> for Delimiter {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '"' => Ok(Delimiter::Double),
            '\'' => Ok(Delimiter::Single),
            other => Err(Error::InvalidDelimiter(other)),
        }
    }
}

/// Character dividing the fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    Comma,
    Semicolon,
    Colon,
    Tab,
    Space,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Comma => ',',
            Separator::Semicolon => ';',
            Separator::Colon => ':',
            Separator::Tab => '\t',
            Separator::Space => ' ',
        }
    }
}

impl TryFrom<char> for Separator {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            ',' => Ok(Separator::Comma),
            ';' => Ok(Separator::Semicolon),
            ':' => Ok(Separator::Colon),
            '\t' => Ok(Separator::Tab),
            ' ' => Ok(Separator::Space),
            other => Err(Error::InvalidSeparator(other)),
        }
    }
}

/// Dialect shared by [`Reader`](crate::Reader) and [`Writer`](crate::Writer).
///
/// Changing the options of a reader in the middle of a stream is allowed but
/// the records already consumed are not reinterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub delimiter: Delimiter,
    pub separator: Separator,
}

impl Options {
    pub fn new(delimiter: Delimiter, separator: Separator) -> Self {
        Self {
            delimiter,
            separator,
        }
    }
}
