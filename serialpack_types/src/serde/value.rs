use crate::serde::Tag;
use crate::types::{Object, Packable};
use std::str;

mod deser;
mod ser;
pub use deser::*;
pub use ser::*;

/// One self-describing value.
///
/// `Set` and `Map` keep their members in a `Vec`;
/// comparisons on them ignore member order.
#[derive(Clone, Debug)]
pub enum Value {
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Set(Vec<Value>),
    Map(Vec<(Value, Value)>),
    Object(Object),

    /* Decode-only fixed-width scalars. */
    Char(u8),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    U64(u64),
    F32(f32),
}

impl Value {
    pub fn object<T: Packable>(obj: T) -> Self {
        Self::Object(Object::new(obj))
    }

    pub fn kind(&self) -> Tag {
        Tag::from(self)
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| str::from_utf8(b).ok())
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) => true,
            (Self::Bool(slf), Self::Bool(oth)) => slf == oth,
            (Self::Int(slf), Self::Int(oth)) => slf == oth,
            (Self::Float(slf), Self::Float(oth)) => slf == oth || slf.to_bits() == oth.to_bits(),
            (Self::Bytes(slf), Self::Bytes(oth)) => slf == oth,
            (Self::List(slf), Self::List(oth)) => slf == oth,
            (Self::Tuple(slf), Self::Tuple(oth)) => slf == oth,
            (Self::Set(slf), Self::Set(oth)) => eq_unordered(slf, oth),
            (Self::Map(slf), Self::Map(oth)) => eq_unordered(slf, oth),
            (Self::Object(slf), Self::Object(oth)) => slf == oth,
            (Self::Char(slf), Self::Char(oth)) => slf == oth,
            (Self::I8(slf), Self::I8(oth)) => slf == oth,
            (Self::U8(slf), Self::U8(oth)) => slf == oth,
            (Self::I16(slf), Self::I16(oth)) => slf == oth,
            (Self::U16(slf), Self::U16(oth)) => slf == oth,
            (Self::I32(slf), Self::I32(oth)) => slf == oth,
            (Self::U32(slf), Self::U32(oth)) => slf == oth,
            (Self::U64(slf), Self::U64(oth)) => slf == oth,
            (Self::F32(slf), Self::F32(oth)) => slf == oth || slf.to_bits() == oth.to_bits(),
            _ => false,
        }
    }
}

/// Multiset equality. Quadratic, but members need neither `Hash` nor `Ord`.
fn eq_unordered<T: PartialEq>(slf: &[T], oth: &[T]) -> bool {
    if slf.len() != oth.len() {
        return false;
    }
    let mut taken = vec![false; oth.len()];
    slf.iter().all(|memb| {
        let found = oth
            .iter()
            .enumerate()
            .find(|(i, cand)| !taken[*i] && *cand == memb);
        match found {
            Some((i, _)) => {
                taken[i] = true;
                true
            }
            None => false,
        }
    })
}

/* Conversions from plain Rust values. */
impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Absent
    }
}
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}
impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Bytes(s.as_bytes().to_vec())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Bytes(s.into_bytes())
    }
}
impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Self::Bytes(b.to_vec())
    }
}
impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}
impl From<Vec<Value>> for Value {
    fn from(members: Vec<Value>) -> Self {
        Self::List(members)
    }
}
impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Self::Object(obj)
    }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            None => Self::Absent,
            Some(t) => t.into(),
        }
    }
}
