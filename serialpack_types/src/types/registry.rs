use crate::error::DecodeError;
use crate::types::{DynPackable, Packable, TypeIdent};
use std::collections::HashMap;

/// Builds the argument-free scaffold of one registered type.
pub type PlaceholderFn = fn() -> Box<dyn DynPackable>;

fn placeholder_of<T: Packable>() -> Box<dyn DynPackable> {
    Box::new(T::placeholder())
}

/// The closed set of object types a decoder can reconstruct.
///
/// Populate it once at startup, then share it read-only.
#[derive(Default, Clone)]
pub struct TypeRegistry {
    factories: HashMap<TypeIdent, PlaceholderFn>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: Packable>(&mut self) -> &mut Self {
        let ident = T::type_ident();
        tracing::trace!(%ident, "registering object type");
        if let Some(_prior) = self.factories.insert(ident, placeholder_of::<T>) {
            tracing::warn!(ident = %T::type_ident(), "object type registered twice; replaced");
        }
        self
    }

    pub fn with<T: Packable>(mut self) -> Self {
        self.register::<T>();
        self
    }

    pub fn contains(&self, ident: &TypeIdent) -> bool {
        self.factories.contains_key(ident)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub fn idents(&self) -> impl Iterator<Item = &TypeIdent> {
        self.factories.keys()
    }

    pub fn resolve(&self, ident: &TypeIdent) -> Result<PlaceholderFn, DecodeError> {
        self.factories
            .get(ident)
            .copied()
            .ok_or_else(|| DecodeError::TypeResolutionError {
                namespace: ident.namespace.clone(),
                type_name: ident.type_name.clone(),
            })
    }

    /// A fresh placeholder of the type behind `ident`, ready to be unpacked into.
    pub fn instantiate(&self, ident: &TypeIdent) -> Result<Box<dyn DynPackable>, DecodeError> {
        let placeholder = self.resolve(ident)?;
        Ok(placeholder())
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}
