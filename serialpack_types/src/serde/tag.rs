use crate::error::DecodeError;
use crate::serde::Value;
use derive_more::{Deref, From};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

/// The raw byte found in a message's tag section.
#[derive(From, Deref, Clone, Copy, PartialEq, Eq, Debug)]
pub struct TagByte(u8);
impl From<Tag> for TagByte {
    fn from(tag: Tag) -> Self {
        // Every discriminant is an ASCII byte.
        Self(tag.to_u8().unwrap_or_default())
    }
}

/// Tag bytes that older writers reserved but no reader ever supported.
pub const UNSUPPORTED_TAG_BYTES: [u8; 3] = [b'x', b'p', b'P'];

/// Each tag's discriminant is the ASCII character written on the wire.
///
/// The first group is what the encoder emits.
/// The second group is only ever decoded, for interoperability with writers
/// that emit fixed-width scalars.
#[repr(u8)]
#[derive(PartialEq, Eq, Hash, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum Tag {
    Absent = b'n',
    Bool = b'?',
    Int = b'q',
    Float = b'd',
    Bytes = b's',
    List = b'a',
    Tuple = b'u',
    Set = b't',
    Map = b'm',
    Object = b'o',

    Char = b'c',
    I8 = b'b',
    U8 = b'B',
    I16 = b'h',
    U16 = b'H',
    I32 = b'i',
    U32 = b'I',
    Long = b'l',
    ULong = b'L',
    U64 = b'Q',
    F32 = b'f',
}

impl TryFrom<TagByte> for Tag {
    type Error = DecodeError;
    fn try_from(byte: TagByte) -> Result<Self, DecodeError> {
        if UNSUPPORTED_TAG_BYTES.contains(&byte.0) {
            return Err(DecodeError::ExplicitlyUnsupportedTag(byte.0));
        }
        Tag::from_u8(byte.0).ok_or(DecodeError::UnknownTag(byte.0))
    }
}

impl From<&Value> for Tag {
    fn from(val: &Value) -> Self {
        match val {
            Value::Absent => Tag::Absent,
            Value::Bool(_) => Tag::Bool,
            Value::Int(_) => Tag::Int,
            Value::Float(_) => Tag::Float,
            Value::Bytes(_) => Tag::Bytes,
            Value::List(_) => Tag::List,
            Value::Tuple(_) => Tag::Tuple,
            Value::Set(_) => Tag::Set,
            Value::Map(_) => Tag::Map,
            Value::Object(_) => Tag::Object,
            Value::Char(_) => Tag::Char,
            Value::I8(_) => Tag::I8,
            Value::U8(_) => Tag::U8,
            Value::I16(_) => Tag::I16,
            Value::U16(_) => Tag::U16,
            Value::I32(_) => Tag::I32,
            Value::U32(_) => Tag::U32,
            Value::U64(_) => Tag::U64,
            Value::F32(_) => Tag::F32,
        }
    }
}
