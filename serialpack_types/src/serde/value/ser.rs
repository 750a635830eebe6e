use crate::error::EncodeError;
use crate::serde::{BodyLen, Tag, TagByte, TagCount, Value};
use derive_more::Deref;
use std::borrow::Borrow;
use std::io::Write;

#[derive(Deref, Clone, Copy, PartialEq, Eq, Debug)]
pub struct WriteLen(usize);

/// Packs `members` into one message and returns the message bytes.
pub fn pack<V: Borrow<Value>>(members: &[V]) -> Result<Vec<u8>, EncodeError> {
    let mut buf = vec![];
    Value::ser_message(members, &mut buf)?;
    Ok(buf)
}

impl Value {
    /// Writes one message: the tag count, the tags, then each member's body in tag order.
    pub fn ser_message<V: Borrow<Value>>(
        members: &[V],
        w: &mut impl Write,
    ) -> Result<WriteLen, EncodeError> {
        let tag_ct = TagCount::from_members(members)?;

        let mut tags = Vec::with_capacity(members.len());
        let mut body = vec![];
        for memb in members {
            let memb: &Value = memb.borrow();
            tags.push(*TagByte::from(memb.kind()));
            memb.ser_body(&mut body)?;
        }

        let mut w_len = WriteLen(0);

        /* tag_count */
        let tag_ct = tag_ct.to_le_bytes();
        w.write_all(&tag_ct)?;
        w_len.0 += tag_ct.len();

        /* tags */
        w.write_all(&tags)?;
        w_len.0 += tags.len();

        /* bodies */
        w.write_all(&body)?;
        w_len.0 += body.len();

        Ok(w_len)
    }

    fn ser_body(&self, w: &mut impl Write) -> Result<WriteLen, EncodeError> {
        let w_len = match self {
            Value::Absent => 0,
            Value::Bool(b) => Self::ser_fixed_len_body(w, [u8::from(*b)])?,
            Value::Int(i) => Self::ser_fixed_len_body(w, i.to_le_bytes())?,
            Value::Float(f) => Self::ser_fixed_len_body(w, f.to_le_bytes())?,
            Value::Bytes(b) => Self::ser_dynalen_body(w, "byte string", b)?,
            Value::List(members) | Value::Tuple(members) | Value::Set(members) => {
                *Self::ser_message(members, w)?
            }
            Value::Map(pairs) => {
                let flat = pairs
                    .iter()
                    .flat_map(|(k, v)| [k, v])
                    .collect::<Vec<&Value>>();
                *Self::ser_message(&flat, w)?
            }
            Value::Object(obj) => {
                let ident = obj.type_ident();
                let payload = obj.pack().map_err(|e| EncodeError::ObjectPack {
                    ident: ident.to_string(),
                    source: e,
                })?;

                let mut w_len = 0;
                w_len += Self::ser_dynalen_body(w, "namespace", ident.namespace.as_bytes())?;
                w_len += Self::ser_dynalen_body(w, "type name", ident.type_name.as_bytes())?;
                /* The object frames its own payload. */
                w.write_all(&payload)?;
                w_len += payload.len();
                w_len
            }
            Value::Char(_)
            | Value::I8(_)
            | Value::U8(_)
            | Value::I16(_)
            | Value::U16(_)
            | Value::I32(_)
            | Value::U32(_)
            | Value::U64(_)
            | Value::F32(_) => return Err(EncodeError::UnsupportedType(Tag::from(self))),
        };
        Ok(WriteLen(w_len))
    }

    fn ser_fixed_len_body<const LEN: usize>(
        w: &mut impl Write,
        buf: [u8; LEN],
    ) -> Result<usize, EncodeError> {
        w.write_all(&buf)?;
        Ok(LEN)
    }

    fn ser_dynalen_body(
        w: &mut impl Write,
        what: &'static str,
        buf: &[u8],
    ) -> Result<usize, EncodeError> {
        let body_len = BodyLen::from_body_buf(what, buf)?.to_le_bytes();
        w.write_all(&body_len)?;
        w.write_all(buf)?;
        Ok(body_len.len() + buf.len())
    }
}
