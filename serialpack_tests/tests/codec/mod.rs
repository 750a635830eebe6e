pub mod helpers;
pub mod objects;
pub mod stream;
