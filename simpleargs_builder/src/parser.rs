mod base;
mod container;
mod engine;
mod interface;
pub(crate) mod printer;

pub use base::*;
pub use container::*;
pub use engine::*;
pub use interface::parse_env_or_exit;
