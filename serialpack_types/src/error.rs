use crate::serde::Tag;
use std::io;
use thiserror::Error;

/// Failures while packing values into a message.
///
/// Encoding aborts on the first error; no partial buffer is handed back.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("value kind {0:?} is decodable but never encoded")]
    UnsupportedType(Tag),

    #[error("{what} of length {len} does not fit a u32 length prefix")]
    LengthOverflow { what: &'static str, len: usize },

    #[error("packing object {ident} failed")]
    ObjectPack {
        ident: String,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Failures while decoding a single message.
///
/// Every variant aborts the whole message it occurred in.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unknown tag byte {0:#04x}")]
    UnknownTag(u8),

    #[error("tag {:?} is reserved and not supported", char::from(*.0))]
    ExplicitlyUnsupportedTag(u8),

    #[error("truncated buffer: {what} needs {need} bytes, {have} remain")]
    TruncatedBuffer {
        what: &'static str,
        need: usize,
        have: usize,
    },

    #[error("cannot resolve object type {namespace}.{type_name}")]
    TypeResolutionError {
        namespace: String,
        type_name: String,
    },

    #[error("map holds an odd number ({0}) of flattened keys and values")]
    OddMapLength(usize),

    #[error("nesting deeper than {max_depth} levels")]
    DepthExceeded { max_depth: usize },

    #[error("unpacking object {ident} failed")]
    ObjectUnpack {
        ident: String,
        #[source]
        source: anyhow::Error,
    },
}

impl DecodeError {
    pub(crate) fn truncated(what: &'static str, need: usize, have: usize) -> Self {
        Self::TruncatedBuffer { what, need, have }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::TruncatedBuffer { .. })
    }
}
