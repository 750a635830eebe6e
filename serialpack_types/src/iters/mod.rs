//! A stream is a buffer holding zero or more messages back to back,
//! with no count or separator around them.
//!
//! ```text
//! struct Stream {
//!     msg_0:  Message,
//!     msg_1:  Message,
//!     ...
//! }
//! ```

mod iter_msg;
mod stream;

pub use iter_msg::*;
pub use stream::*;
