//! # Serialization format
//!
//! The unit of the format is a message: an ordered list of [`Value`]s.
//!
//! A message opens with the count of its members, followed by one [`Tag`]
//! byte per member, followed by every member's body in tag order.
//! All integers, floats and length prefixes are little-endian.
//!
//! Scalar bodies have a width implied by their tag; these widths are not encoded.
//! Byte strings are prefixed by their `u32` length.
//! Containers are nested messages and carry no length of their own;
//! a reader learns their size by decoding them.
//!
//! ```text
//! struct Message {
//!     tag_count:      u32,
//!     tags:           [u8; tag_count],
//!     bodies:         {
//!         body_0:         Body(tags[0]),
//!         body_1:         Body(tags[1]),
//!         ...
//!     }
//! }
//!
//! Body('n') = {}
//! Body('?') = u8
//! Body('q') = i64
//! Body('d') = f64
//! Body('s') = {
//!     body_len:       u32,
//!     body:           [u8; body_len],
//! }
//! Body('a' | 'u' | 't') = Message    // list, tuple, set
//! Body('m') = Message                // key_0, value_0, key_1, value_1, ...
//! Body('o') = {
//!     namespace_len:  u32,
//!     namespace:      [u8; namespace_len],
//!     type_name_len:  u32,
//!     type_name:      [u8; type_name_len],
//!     payload:        [u8; ?],       // framed by the object type itself
//! }
//! ```
//!
//! Readers additionally accept the fixed-width scalars
//! `c b B h H i I l L Q f`; writers never produce them.

mod lengths;
mod reader;
mod tag;
mod value;

pub use lengths::*;
pub use reader::*;
pub use tag::*;
pub use value::*;
