use crate::config::CodecConfig;
use crate::error::DecodeError;
use crate::serde::{BodyLen, Reader, Tag, TagByte, TagCount, Value};
use crate::types::{Object, TypeIdent, TypeRegistry};
use itertools::Itertools;
use std::str;

/// What a decode needs besides the bytes.
#[derive(Clone, Copy)]
pub struct DeserCtx<'a> {
    pub registry: &'a TypeRegistry,
    pub config: &'a CodecConfig,
}

/// Decodes exactly one message from the front of `buf`.
///
/// Returns the members and the number of bytes they occupied.
/// Bytes past that boundary are left alone.
pub fn unpack_message(buf: &[u8], ctx: DeserCtx) -> Result<(Vec<Value>, usize), DecodeError> {
    let mut r = Reader::from(buf);
    let (r_len, members) = Value::deser_message(&mut r, ctx, 0)?;
    debug_assert_eq!(r_len, r.position());
    Ok((members, r_len))
}

impl Value {
    pub fn deser_message(
        r: &mut Reader,
        ctx: DeserCtx,
        depth: usize,
    ) -> Result<(usize, Vec<Value>), DecodeError> {
        /* tag_count */
        let (mut r_len, tag_ct) = TagCount::deser(r)?;

        /* tags */
        let tags = r.read_slice("tags", *tag_ct as usize)?;
        r_len += tags.len();

        /* bodies */
        let mut members = Vec::with_capacity(tags.len());
        for byte in tags {
            let tag = Tag::try_from(TagByte::from(*byte))?;
            let (delta_r_len, memb) = Self::deser_body(tag, r, ctx, depth)?;
            r_len += delta_r_len;
            members.push(memb);
        }

        Ok((r_len, members))
    }

    fn deser_body(
        tag: Tag,
        r: &mut Reader,
        ctx: DeserCtx,
        depth: usize,
    ) -> Result<(usize, Value), DecodeError> {
        let start = r.position();
        let val = match tag {
            Tag::Absent => Value::Absent,
            Tag::Bool => Value::Bool(r.read_array::<1>("bool")?[0] != 0),
            Tag::Int => Value::Int(i64::from_le_bytes(r.read_array("int")?)),
            Tag::Float => Value::Float(f64::from_le_bytes(r.read_array("float")?)),
            Tag::Bytes => Value::Bytes(Self::deser_dynalen_body(r, "byte string")?.to_vec()),
            Tag::List => Value::List(Self::deser_nested(r, ctx, depth)?),
            Tag::Tuple => Value::Tuple(Self::deser_nested(r, ctx, depth)?),
            Tag::Set => Value::Set(Self::deser_nested(r, ctx, depth)?),
            Tag::Map => {
                let flat = Self::deser_nested(r, ctx, depth)?;
                if flat.len() % 2 != 0 {
                    return Err(DecodeError::OddMapLength(flat.len()));
                }
                Value::Map(flat.into_iter().tuples().collect())
            }
            Tag::Object => Value::Object(Self::deser_object(r, ctx, depth)?),
            Tag::Char => Value::Char(r.read_array::<1>("char")?[0]),
            Tag::I8 => Value::I8(i8::from_le_bytes(r.read_array("i8")?)),
            Tag::U8 => Value::U8(u8::from_le_bytes(r.read_array("u8")?)),
            Tag::I16 => Value::I16(i16::from_le_bytes(r.read_array("i16")?)),
            Tag::U16 => Value::U16(u16::from_le_bytes(r.read_array("u16")?)),
            Tag::I32 | Tag::Long => Value::I32(i32::from_le_bytes(r.read_array("i32")?)),
            Tag::U32 | Tag::ULong => Value::U32(u32::from_le_bytes(r.read_array("u32")?)),
            Tag::U64 => Value::U64(u64::from_le_bytes(r.read_array("u64")?)),
            Tag::F32 => Value::F32(f32::from_le_bytes(r.read_array("f32")?)),
        };
        Ok((r.position() - start, val))
    }

    fn deser_dynalen_body<'a>(
        r: &mut Reader<'a>,
        what: &'static str,
    ) -> Result<&'a [u8], DecodeError> {
        let (_, body_len) = BodyLen::deser(r)?;
        r.read_slice(what, *body_len as usize)
    }

    fn deser_nested(
        r: &mut Reader,
        ctx: DeserCtx,
        depth: usize,
    ) -> Result<Vec<Value>, DecodeError> {
        let depth = Self::descend(ctx, depth)?;
        let (_, members) = Self::deser_message(r, ctx, depth)?;
        Ok(members)
    }

    fn deser_object(r: &mut Reader, ctx: DeserCtx, depth: usize) -> Result<Object, DecodeError> {
        Self::descend(ctx, depth)?;

        let namespace = Self::deser_dynalen_body(r, "namespace")?;
        let type_name = Self::deser_dynalen_body(r, "type name")?;
        let ident = match (str::from_utf8(namespace), str::from_utf8(type_name)) {
            (Ok(namespace), Ok(type_name)) => TypeIdent::new(namespace, type_name),
            _ => {
                return Err(DecodeError::TypeResolutionError {
                    namespace: String::from_utf8_lossy(namespace).into_owned(),
                    type_name: String::from_utf8_lossy(type_name).into_owned(),
                })
            }
        };

        let placeholder = ctx.registry.instantiate(&ident)?;

        let rest = r.remaining();
        let (obj, used) = placeholder
            .unpack_boxed(rest)
            .map_err(|e| DecodeError::ObjectUnpack {
                ident: ident.to_string(),
                source: e,
            })?;
        if used > rest.len() {
            return Err(DecodeError::truncated("object payload", used, rest.len()));
        }
        r.advance(used);

        Ok(Object::from(obj))
    }

    fn descend(ctx: DeserCtx, depth: usize) -> Result<usize, DecodeError> {
        let depth = depth + 1;
        if depth > ctx.config.max_depth {
            return Err(DecodeError::DepthExceeded {
                max_depth: ctx.config.max_depth,
            });
        }
        Ok(depth)
    }
}
