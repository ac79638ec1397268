pub mod common;
pub mod key_path;
pub mod value;

pub use common::*;
pub use key_path::*;
pub use value::*;
