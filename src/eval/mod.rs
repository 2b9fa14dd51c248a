pub mod postfix;

pub use postfix::*;
