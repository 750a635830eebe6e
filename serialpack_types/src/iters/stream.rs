use crate::error::DecodeError;
use crate::iters::MessageIterator;
use crate::serde::{unpack_message, DeserCtx, Value};

/// Decodes every well-formed message in `buf` into one flat list of members.
///
/// The first message must decode; its error is returned as is.
/// After that, decoding stops at the first message that fails,
/// and the members gathered so far are the result. The failure is not reported.
pub fn unpack_stream(buf: &[u8], ctx: DeserCtx) -> Result<Vec<Value>, DecodeError> {
    let (mut members, r_len) = unpack_message(buf, ctx)?;

    let mut msgs_ct = 1;
    for res in MessageIterator::new(&buf[r_len..], ctx) {
        match res {
            Ok((more, _)) => {
                members.extend(more);
                msgs_ct += 1;
            }
            Err(e) => {
                tracing::debug!(
                    messages = msgs_ct,
                    members = members.len(),
                    error = %e,
                    "stream decode stopped early"
                );
                break;
            }
        }
    }

    Ok(members)
}
