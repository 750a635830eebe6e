use crate::types::TypeIdent;
use anyhow::Result;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A user-defined type that can ride inside a message as an object.
///
/// The payload layout is the type's own business.
/// It must be self-delimiting: [`Packable::unpack`] receives everything
/// after the object header, including bytes that belong to later members,
/// and reports how many of them it used.
pub trait Packable: PartialEq + fmt::Debug + Send + Sync + Sized + 'static {
    const NAMESPACE: &'static str;
    const TYPE_NAME: &'static str;

    /// An argument-free scaffold, only ever used as the receiver of [`Packable::unpack`].
    fn placeholder() -> Self;

    fn pack(&self) -> Result<Vec<u8>>;

    fn unpack(self, buf: &[u8]) -> Result<(Self, usize)>;

    fn type_ident() -> TypeIdent {
        TypeIdent::new(Self::NAMESPACE, Self::TYPE_NAME)
    }
}

/// Object-safe face of [`Packable`].
pub trait DynPackable: fmt::Debug + Send + Sync {
    fn dyn_type_ident(&self) -> TypeIdent;
    fn dyn_pack(&self) -> Result<Vec<u8>>;
    fn unpack_boxed(self: Box<Self>, buf: &[u8]) -> Result<(Box<dyn DynPackable>, usize)>;
    fn as_any(&self) -> &dyn Any;
    fn eq_dyn(&self, other: &dyn DynPackable) -> bool;
}

impl<T: Packable> DynPackable for T {
    fn dyn_type_ident(&self) -> TypeIdent {
        T::type_ident()
    }
    fn dyn_pack(&self) -> Result<Vec<u8>> {
        self.pack()
    }
    fn unpack_boxed(self: Box<Self>, buf: &[u8]) -> Result<(Box<dyn DynPackable>, usize)> {
        let (moi, used) = (*self).unpack(buf)?;
        Ok((Box::new(moi), used))
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn eq_dyn(&self, other: &dyn DynPackable) -> bool {
        match other.as_any().downcast_ref::<T>() {
            Some(other) => self == other,
            None => false,
        }
    }
}

/// An embedded object as carried by [`crate::serde::Value::Object`].
#[derive(Clone)]
pub struct Object(Arc<dyn DynPackable>);

impl Object {
    pub fn new<T: Packable>(obj: T) -> Self {
        Self(Arc::new(obj))
    }

    pub fn type_ident(&self) -> TypeIdent {
        self.0.dyn_type_ident()
    }

    pub fn pack(&self) -> Result<Vec<u8>> {
        self.0.dyn_pack()
    }

    pub fn downcast_ref<T: Packable>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl From<Box<dyn DynPackable>> for Object {
    fn from(obj: Box<dyn DynPackable>) -> Self {
        Self(Arc::from(obj))
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Object) -> bool {
        self.0.eq_dyn(other.0.as_ref())
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({}, {:?})", self.type_ident(), self.0)
    }
}
