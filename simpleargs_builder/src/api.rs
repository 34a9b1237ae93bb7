mod core;
mod info;
mod value;

pub use self::core::*;
pub use info::*;
pub use value::{ArgType, ArgValue, Value};
