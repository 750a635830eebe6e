use crate::error::DecodeError;
use crate::serde::{unpack_message, DeserCtx, Value};

/// Walks a buffer of back-to-back messages that carry no outer framing.
///
/// Yields each message's members along with the bytes it occupied.
/// Ends when the buffer is exhausted, and for good after the first error.
pub struct MessageIterator<'a> {
    buf: &'a [u8],
    ctx: DeserCtx<'a>,
    done: bool,
}

impl<'a> MessageIterator<'a> {
    pub fn new(buf: &'a [u8], ctx: DeserCtx<'a>) -> Self {
        Self {
            buf,
            ctx,
            done: false,
        }
    }

    /// The bytes not yet decoded.
    pub fn remaining(&self) -> &'a [u8] {
        self.buf
    }
}

impl<'a> Iterator for MessageIterator<'a> {
    type Item = Result<(Vec<Value>, usize), DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.buf.is_empty() {
            return None;
        }
        match unpack_message(self.buf, self.ctx) {
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
            Ok((members, r_len)) => {
                self.buf = &self.buf[r_len..];
                tracing::trace!(
                    members = members.len(),
                    bytes = r_len,
                    remaining = self.buf.len(),
                    "decoded message"
                );
                Some(Ok((members, r_len)))
            }
        }
    }
}
