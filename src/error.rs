use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DnsError {
    #[error("truncated input: need {needed} byte(s) at offset {offset}")]
    TruncatedInput { offset: usize, needed: usize },

    #[error("invalid {field} value: {value} (must be 0-{max})")]
    OutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },

    #[error("label '{0}' exceeds 255 bytes")]
    LabelTooLong(String),

    #[error("invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("network I/O error: {0}")]
    NetworkIo(#[from] io::Error),

    #[error("unsupported modification for {target}: {modification}")]
    UnsupportedModification {
        target: &'static str,
        modification: String,
    },

    #[error("bad compression pointer at offset {offset} (target {target})")]
    BadPointer { offset: usize, target: usize },

    #[error("{section} count mismatch: header says {header}, message has {actual}")]
    CountMismatch {
        section: &'static str,
        header: u16,
        actual: usize,
    },

    #[error("message of {0} bytes exceeds the 512 byte limit")]
    MessageTooLarge(usize),
}
