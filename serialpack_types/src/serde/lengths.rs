use crate::error::{DecodeError, EncodeError};
use crate::serde::Reader;
use derive_more::Deref;
use std::mem;

/// The count `F` that opens every message.
#[derive(Deref, Clone, Copy, PartialEq, Eq, Debug)]
pub struct TagCount(u32);
impl TagCount {
    pub fn from_members<T>(members: &[T]) -> Result<Self, EncodeError> {
        let ct = u32::try_from(members.len()).map_err(|_| EncodeError::LengthOverflow {
            what: "message",
            len: members.len(),
        })?;
        Ok(Self(ct))
    }
    pub fn deser(r: &mut Reader) -> Result<(usize, Self), DecodeError> {
        let buf = r.read_array::<{ mem::size_of::<u32>() }>("tag count")?;
        Ok((buf.len(), Self(u32::from_le_bytes(buf))))
    }
}

/// The u32 prefix in front of a byte string.
#[derive(Deref, Clone, Copy, PartialEq, Eq, Debug)]
pub struct BodyLen(u32);
impl BodyLen {
    pub fn from_body_buf(what: &'static str, buf: &[u8]) -> Result<Self, EncodeError> {
        let len = u32::try_from(buf.len()).map_err(|_| EncodeError::LengthOverflow {
            what,
            len: buf.len(),
        })?;
        Ok(Self(len))
    }
    pub fn deser(r: &mut Reader) -> Result<(usize, Self), DecodeError> {
        let buf = r.read_array::<{ mem::size_of::<u32>() }>("length prefix")?;
        Ok((buf.len(), Self(u32::from_le_bytes(buf))))
    }
}
