//! Decoding pipeline: character lookahead, record/field state machine, type inference

pub mod infer;
pub mod lookahead;
pub mod reader;
