pub mod err;

pub mod eval_err;

pub mod syntax_err;

pub use err::*;
pub use eval_err::*;
pub use syntax_err::*;
