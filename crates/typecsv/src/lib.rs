#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod value;
pub mod number;
pub mod lines;
pub mod encode;
pub mod decode;

pub use crate::decode::reader::{Reader, Records};
pub use crate::encode::writer::Writer;
pub use crate::error::{Error, Result};
pub use crate::lines::count_lines;
pub use crate::options::{Delimiter, Options, Separator};
pub use crate::value::{Number, Value};
