//! Traits which, typically, may be imported without concern: `use simpleargs::prelude::*`.

// Needs to be imported in order to implement a custom value type.
pub use crate::api::ArgType;
