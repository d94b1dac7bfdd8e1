pub mod dsl;
pub mod env;
pub mod value;

pub use dsl::parse_dsl;
pub use env::{env_int, env_string};
