use crate::error::DecodeError;
use std::io::{Cursor, Read};

/// Read cursor over a fully buffered input.
///
/// Every read is checked against the remaining bytes first,
/// so a declared length can never make us allocate past the buffer.
pub struct Reader<'a> {
    cur: Cursor<&'a [u8]>,
}
impl<'a> From<&'a [u8]> for Reader<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Self {
            cur: Cursor::new(buf),
        }
    }
}
impl<'a> Reader<'a> {
    pub fn position(&self) -> usize {
        self.cur.position() as usize
    }

    pub fn remaining(&self) -> &'a [u8] {
        let buf: &'a [u8] = *self.cur.get_ref();
        &buf[self.position().min(buf.len())..]
    }

    fn ensure(&self, what: &'static str, need: usize) -> Result<(), DecodeError> {
        let have = self.remaining().len();
        if have < need {
            return Err(DecodeError::truncated(what, need, have));
        }
        Ok(())
    }

    pub fn read_array<const N: usize>(&mut self, what: &'static str) -> Result<[u8; N], DecodeError> {
        self.ensure(what, N)?;
        let mut buf = [0u8; N];
        self.cur
            .read_exact(&mut buf)
            .map_err(|_| DecodeError::truncated(what, N, 0))?;
        Ok(buf)
    }

    pub fn read_slice(&mut self, what: &'static str, len: usize) -> Result<&'a [u8], DecodeError> {
        self.ensure(what, len)?;
        let slice = &self.remaining()[..len];
        self.advance(len);
        Ok(slice)
    }

    /// Skips bytes that were consumed out of band, e.g. by a nested decode.
    pub fn advance(&mut self, len: usize) {
        let pos = self.cur.position() + len as u64;
        self.cur.set_position(pos);
    }
}
