use crate::config::CodecConfig;
use crate::error::{DecodeError, EncodeError};
use crate::iters::{unpack_stream, MessageIterator};
use crate::serde::{self, DeserCtx, Value};
use crate::types::TypeRegistry;
use std::borrow::Borrow;
use std::sync::Arc;

/// Packs and unpacks messages against one fixed set of object types.
///
/// Holds no mutable state, so clones may be used from any thread.
#[derive(Clone, Debug)]
pub struct Serializer {
    registry: Arc<TypeRegistry>,
    config: CodecConfig,
}

impl Serializer {
    pub fn new(registry: impl Into<Arc<TypeRegistry>>) -> Self {
        Self {
            registry: registry.into(),
            config: CodecConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn ctx(&self) -> DeserCtx<'_> {
        DeserCtx {
            registry: &self.registry,
            config: &self.config,
        }
    }

    pub fn pack<V: Borrow<Value>>(&self, members: &[V]) -> Result<Vec<u8>, EncodeError> {
        serde::pack(members)
    }

    /// Decodes the one message at the front of `buf`; see [`serde::unpack_message`].
    pub fn unpack_message(&self, buf: &[u8]) -> Result<(Vec<Value>, usize), DecodeError> {
        serde::unpack_message(buf, self.ctx())
    }

    /// Decodes as many messages as are well-formed; see [`unpack_stream`].
    pub fn unpack(&self, buf: &[u8]) -> Result<Vec<Value>, DecodeError> {
        unpack_stream(buf, self.ctx())
    }

    pub fn messages<'a>(&'a self, buf: &'a [u8]) -> MessageIterator<'a> {
        MessageIterator::new(buf, self.ctx())
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new(TypeRegistry::new())
    }
}
