#![allow(clippy::style)]
#![allow(clippy::useless_format)]

pub mod syntax {
    pub use simple_syntax::*;
}

pub mod env;
pub use env::Env;
pub mod err;
pub use err::*;
pub mod eval;
pub use eval::*;
pub mod machine;
pub use machine::*;
