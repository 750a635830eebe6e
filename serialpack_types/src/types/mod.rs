mod packable;
mod registry;
mod type_ident;

pub use packable::*;
pub use registry::*;
pub use type_ident::*;
