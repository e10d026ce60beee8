//! Encoding pipeline: delimiter escaping and the record writer

pub mod primitives;
pub mod writer;
