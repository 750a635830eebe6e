//! A self-describing binary codec for ordered, heterogeneous lists of values.
//!
//! See [`serde`] for the wire format and [`iters`] for multi-message streams.

pub mod config;
pub mod error;
pub mod iters;
pub mod serde;
mod serializer;
pub mod types;

pub use config::CodecConfig;
pub use error::{DecodeError, EncodeError};
pub use serde::{pack, Value};
pub use serializer::Serializer;
pub use types::{Object, Packable, TypeIdent, TypeRegistry};
